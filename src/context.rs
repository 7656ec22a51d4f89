//! Context creation spanning every discovered device.

use crate::device::DeviceProbe;
use crate::error::{Error, Result};
use opencl3::context::Context;
use opencl3::types::cl_device_id;
use std::ptr;

/// Create one context bound to the full device list of a single platform.
///
/// Every buffer and the compiled program are allocated against this
/// context and become visible to each device in it. Failure is fatal;
/// the workload does not degrade to a subset of devices.
pub fn create_context(devices: &[DeviceProbe]) -> Result<Context> {
    let ids: Vec<cl_device_id> = devices.iter().map(|d| d.device.id()).collect();

    Context::from_devices(&ids, &[], None, ptr::null_mut())
        .map_err(|e| Error::context_creation(format!("spanning {} device(s): {e}", ids.len())))
}
