//! Kernel source loading, program compilation, and entry-point extraction.

use crate::error::{Error, Result};
use opencl3::context::Context;
use opencl3::kernel::Kernel;
use opencl3::program::Program;
use std::fs;
use std::path::Path;

/// Read the kernel source text from disk.
///
/// Called before any context exists so a missing file aborts the run with
/// nothing to clean up.
pub fn load_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_access(format!("{}: {e}", path.display())))
}

/// Compile the source once against the context's whole device set.
///
/// The error string from a failed build carries the compiler's log.
pub fn build_program(context: &Context, source: &str) -> Result<Program> {
    Program::create_and_build_from_source(context, source, "")
        .map_err(|log| Error::compilation(log.to_string()))
}

/// Extract one named entry point from a successfully built program.
pub fn extract_kernel(program: &Program, name: &str) -> Result<Kernel> {
    Kernel::create(program, name).map_err(|e| Error::kernel_not_found(format!("{name}: {e}")))
}
