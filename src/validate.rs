//! Validation of device results against the host reference.

use crate::dispatch::DeviceRun;
use crate::host::DIM;

/// Outcome of a full sweep: per-device verdicts plus the shared reference.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of platforms the runtime reported.
    pub platform_count: usize,
    /// Host-computed expected output.
    pub reference: [f32; DIM],
    /// One verdict per discovered device, in discovery order.
    pub devices: Vec<DeviceVerdict>,
}

/// One device's result and whether it matched the reference.
#[derive(Debug, Clone)]
pub struct DeviceVerdict {
    pub index: usize,
    pub name: String,
    pub result: [f32; DIM],
    pub passed: bool,
}

impl RunReport {
    /// True only when every discovered device reproduced the reference.
    pub fn all_passed(&self) -> bool {
        !self.devices.is_empty() && self.devices.iter().all(|d| d.passed)
    }
}

/// Exact comparison, no epsilon: host and device accumulate in the same
/// order without fused multiply-add, so agreement is bitwise.
pub fn matches_reference(result: &[f32; DIM], reference: &[f32; DIM]) -> bool {
    result.iter().zip(reference.iter()).all(|(a, b)| a == b)
}

/// Judge every device's readback, not only the last one.
pub fn build_report(
    platform_count: usize,
    reference: [f32; DIM],
    runs: Vec<DeviceRun>,
) -> RunReport {
    let devices = runs
        .into_iter()
        .map(|run| DeviceVerdict {
            passed: matches_reference(&run.result, &reference),
            index: run.index,
            name: run.name,
            result: run.result,
        })
        .collect();

    RunReport {
        platform_count,
        reference,
        devices,
    }
}
