//! End-to-end sweep: discovery through validation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::validate::RunReport;
use crate::{buffer, context, device, dispatch, host, program, validate};
use tracing::info;

/// Run the full sweep described by `config`.
///
/// The reference is computed first, on the host, so it cannot be affected
/// by device state. The kernel is compiled once and its three buffer
/// arguments are bound once; each device then executes the identical
/// configuration through a private queue.
pub fn run(config: &Config) -> Result<RunReport> {
    config.validate()?;

    let matrix = host::generate_matrix();
    let vector = host::generate_vector();
    let reference = host::reference_product(&matrix, &vector);

    let platforms = device::discover_platforms(config.max_platforms)?;
    info!(platforms = platforms.len(), "discovered compute platforms");

    let platform = platforms.get(config.platform_index).ok_or_else(|| {
        Error::discovery(format!(
            "platform index {} out of range ({} available)",
            config.platform_index,
            platforms.len()
        ))
    })?;

    let devices = device::discover_devices(platform, config.max_devices)?;
    for (index, probe) in devices.iter().enumerate() {
        info!(index, name = %probe.name, "discovered device");
    }

    // Load the source before creating any context-scoped resource so a
    // missing file aborts with nothing to clean up.
    let source = program::load_source(&config.kernel_path)?;

    let context = context::create_context(&devices)?;
    let built = program::build_program(&context, &source)?;
    let kernel = program::extract_kernel(&built, &config.kernel_name)?;

    let matrix_buffer = buffer::create_input_buffer(&context, &matrix)?;
    let vector_buffer = buffer::create_input_buffer(&context, &vector)?;
    let result_buffer = buffer::create_output_buffer(&context, host::DIM)?;

    buffer::bind_argument(&kernel, 0, &matrix_buffer)?;
    buffer::bind_argument(&kernel, 1, &vector_buffer)?;
    buffer::bind_argument(&kernel, 2, &result_buffer)?;

    let runs = dispatch::run_all(&context, &devices, &kernel, &result_buffer)?;

    // Locals unwind in reverse declaration order: buffers, then kernel,
    // then program, then context. Queues were already dropped per device.
    Ok(validate::build_report(platforms.len(), reference, runs))
}
