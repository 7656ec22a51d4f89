//! Device buffer creation and kernel argument binding.

use crate::error::{Error, Result};
use opencl3::context::Context;
use opencl3::kernel::Kernel;
use opencl3::memory::{Buffer, ClMem, CL_MEM_COPY_HOST_PTR, CL_MEM_READ_ONLY, CL_MEM_WRITE_ONLY};
use opencl3::types::cl_float;
use std::ffi::c_void;
use std::ptr;

/// Read-only buffer populated from host data at creation.
///
/// `CL_MEM_COPY_HOST_PTR` snapshots the slice synchronously; the runtime
/// never touches the host memory again after this call returns.
pub fn create_input_buffer(context: &Context, data: &[f32]) -> Result<Buffer<cl_float>> {
    unsafe {
        Buffer::<cl_float>::create(
            context,
            CL_MEM_READ_ONLY | CL_MEM_COPY_HOST_PTR,
            data.len(),
            data.as_ptr() as *mut c_void,
        )
    }
    .map_err(|e| Error::buffer_creation(format!("{}-element input: {e}", data.len())))
}

/// Write-only buffer, uninitialized until a kernel execution completes.
pub fn create_output_buffer(context: &Context, len: usize) -> Result<Buffer<cl_float>> {
    unsafe { Buffer::<cl_float>::create(context, CL_MEM_WRITE_ONLY, len, ptr::null_mut()) }
        .map_err(|e| Error::buffer_creation(format!("{len}-element output: {e}")))
}

/// Bind a buffer to one positional kernel parameter.
///
/// The binding lives on the kernel object itself, not on any queue: every
/// device that executes this kernel sees the same three buffers.
pub fn bind_argument(kernel: &Kernel, index: u32, buffer: &Buffer<cl_float>) -> Result<()> {
    unsafe { kernel.set_arg(index, &buffer.get()) }
        .map_err(|e| Error::argument_binding(format!("argument {index}: {e}")))?;
    Ok(())
}
