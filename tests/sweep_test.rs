//! Full-pipeline integration tests.
//!
//! These exercise a real OpenCL runtime and skip silently when none is
//! installed (the usual situation in CI).

use clsweep::device::discover_platforms;
use clsweep::{Config, Error};
use std::path::Path;

fn opencl_available() -> bool {
    discover_platforms(5).is_ok()
}

fn shipped_config() -> Config {
    Config::builder()
        .kernel_path(Path::new(env!("CARGO_MANIFEST_DIR")).join("kernels/matvec.cl"))
        .build()
        .unwrap()
}

#[test]
fn sweep_validates_every_device() {
    if !opencl_available() {
        return;
    }

    let report = clsweep::run(&shipped_config()).unwrap();

    assert!(report.platform_count >= 1);
    assert!(!report.devices.is_empty());
    assert!(report.devices.iter().all(|d| !d.name.is_empty()));
    assert_eq!(report.reference, [84.0, 228.0, 372.0, 516.0]);
    assert!(report.all_passed());
}

#[test]
fn repeated_sweeps_agree() {
    if !opencl_available() {
        return;
    }

    let config = shipped_config();
    let first = clsweep::run(&config).unwrap();
    let second = clsweep::run(&config).unwrap();

    assert_eq!(first.devices.len(), second.devices.len());
    for (a, b) in first.devices.iter().zip(second.devices.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.result.map(f32::to_bits), b.result.map(f32::to_bits));
    }
}

#[test]
fn missing_kernel_source_aborts_before_context_creation() {
    if !opencl_available() {
        return;
    }

    let config = Config::builder()
        .kernel_path("/nonexistent/matvec.cl")
        .build()
        .unwrap();

    let err = clsweep::run(&config).unwrap_err();
    assert!(matches!(err, Error::FileAccess(_)));
}

#[test]
fn out_of_range_platform_index_is_a_discovery_error() {
    if !opencl_available() {
        return;
    }

    // One past the real platform count is out of range on any machine.
    let count = discover_platforms(64).unwrap().len();
    let config = Config::builder()
        .platform_index(count)
        .max_platforms(count + 1)
        .build()
        .unwrap();

    let err = clsweep::run(&config).unwrap_err();
    assert!(matches!(err, Error::Discovery(_)));
}

#[test]
fn broken_kernel_source_reports_the_build_log() {
    if !opencl_available() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("broken.cl");
    std::fs::write(&bad, "__kernel void matvec_mult(__global float* x) { syntax error }")
        .unwrap();

    let config = Config::builder().kernel_path(&bad).build().unwrap();
    let err = clsweep::run(&config).unwrap_err();
    assert!(matches!(err, Error::Compilation(_)));
}
