//! clsweep - run one fixed matvec workload on every OpenCL device.
//!
//! Discovers all compute devices on the first platform, compiles a single
//! matrix-vector kernel against one context spanning them, and dispatches
//! the identical 4-element workload to each device through a private
//! command queue, validating every readback against a host reference.
//!
//! # Quick Start
//!
//! ```no_run
//! use clsweep::Config;
//!
//! let report = clsweep::run(&Config::default())?;
//! for device in &report.devices {
//!     println!("{}: {}", device.name, if device.passed { "ok" } else { "MISMATCH" });
//! }
//! # Ok::<(), clsweep::Error>(())
//! ```
//!
//! # Design
//!
//! - One context spans the whole device set; buffers and the compiled
//!   kernel are shared, only the command queue is per-device.
//! - Dispatches are serialized by a blocking readback because all devices
//!   reuse a single output buffer.
//! - Every failure is fatal for the run; there is no partial-success mode.

#![warn(missing_debug_implementations)]

pub mod buffer;
pub mod config;
pub mod context;
pub mod device;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod pipeline;
pub mod program;
pub mod validate;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use pipeline::run;
pub use validate::{DeviceVerdict, RunReport};
