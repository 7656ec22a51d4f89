//! Per-device queue creation, kernel execution, and blocking readback.
//!
//! The host drives devices strictly one at a time: each iteration creates
//! a fresh queue, enqueues the shared kernel, and blocks on the readback
//! before the next device is touched. The serialization is load-bearing;
//! all devices write the same result buffer.

use crate::device::DeviceProbe;
use crate::error::{Error, Result};
use crate::host::DIM;
use opencl3::command_queue::CommandQueue;
use opencl3::context::Context;
use opencl3::kernel::Kernel;
use opencl3::memory::Buffer;
use opencl3::types::{cl_float, CL_BLOCKING};
use std::ptr;
use tracing::debug;

/// Result of one device's execution of the shared kernel.
#[derive(Debug, Clone)]
pub struct DeviceRun {
    /// Position in discovery order.
    pub index: usize,
    /// Device name as reported by the runtime.
    pub name: String,
    /// Output vector read back from the device.
    pub result: [f32; DIM],
}

/// Execute the kernel once per device, in discovery order.
///
/// Any queue, dispatch, or readback failure aborts the sweep before the
/// remaining devices are attempted.
pub fn run_all(
    context: &Context,
    devices: &[DeviceProbe],
    kernel: &Kernel,
    result_buffer: &Buffer<cl_float>,
) -> Result<Vec<DeviceRun>> {
    let mut runs = Vec::with_capacity(devices.len());

    for (index, probe) in devices.iter().enumerate() {
        let result = run_on_device(context, probe, kernel, result_buffer)?;
        debug!(index, device = %probe.name, ?result, "device completed");
        runs.push(DeviceRun {
            index,
            name: probe.name.clone(),
            result,
        });
    }

    Ok(runs)
}

fn run_on_device(
    context: &Context,
    probe: &DeviceProbe,
    kernel: &Kernel,
    result_buffer: &Buffer<cl_float>,
) -> Result<[f32; DIM]> {
    // OpenCL 1.2 queue creation; the 2.0 variant is unavailable on macOS.
    #[allow(deprecated)]
    let queue = unsafe { CommandQueue::create(context, probe.device.id(), 0) }
        .map_err(|e| Error::queue_creation(format!("{}: {e}", probe.name)))?;

    // One work-item per output element; local size left to the runtime.
    let global_work_size: [usize; 1] = [DIM];
    unsafe {
        queue
            .enqueue_nd_range_kernel(
                kernel.get(),
                1,
                ptr::null(),
                global_work_size.as_ptr(),
                ptr::null(),
                &[],
            )
            .map_err(|e| Error::dispatch(format!("{}: {e}", probe.name)))?;
    }

    // The blocking read drains this device's in-order queue, so the next
    // iteration may reuse the shared result buffer safely.
    let mut result = [0.0f32; DIM];
    unsafe {
        queue
            .enqueue_read_buffer(result_buffer, CL_BLOCKING, 0, &mut result, &[])
            .map_err(|e| Error::readback(format!("{}: {e}", probe.name)))?;
    }

    // The queue drops here, after its device's work has fully completed.
    Ok(result)
}
