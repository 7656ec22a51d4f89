//! Platform and device discovery.
//!
//! Devices of every type are requested deliberately: the sweep's purpose
//! is to exercise each compute unit the platform exposes, not a class.

use crate::error::{Error, Result};
use opencl3::device::{Device, CL_DEVICE_TYPE_ALL};
use opencl3::platform::{get_platforms, Platform};

/// One discovered device together with its queried name.
///
/// The underlying handle is owned by the platform that enumerated it and
/// needs no explicit release. `Debug` is implemented manually because the
/// opencl3 handle types don't implement it.
pub struct DeviceProbe {
    pub device: Device,
    pub name: String,
}

impl std::fmt::Debug for DeviceProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceProbe")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Enumerate up to `max_platforms` compute platforms.
///
/// A runtime with zero platforms is an error: nothing downstream can run.
pub fn discover_platforms(max_platforms: usize) -> Result<Vec<Platform>> {
    let mut platforms =
        get_platforms().map_err(|e| Error::discovery(format!("querying platforms: {e}")))?;

    if platforms.is_empty() {
        return Err(Error::discovery("no compute platforms available"));
    }

    platforms.truncate(max_platforms);
    Ok(platforms)
}

/// Enumerate up to `max_devices` devices of any type on one platform.
///
/// Zero devices is an error rather than an empty sweep; device names are
/// trimmed (runtimes pad them) and must be non-empty.
pub fn discover_devices(platform: &Platform, max_devices: usize) -> Result<Vec<DeviceProbe>> {
    let ids = platform
        .get_devices(CL_DEVICE_TYPE_ALL)
        .map_err(|e| Error::discovery(format!("querying devices: {e}")))?;

    cap_device_ids(ids, max_devices)?
        .into_iter()
        .map(|id| {
            let device = Device::new(id);
            let raw = device
                .name()
                .map_err(|e| Error::discovery(format!("querying device name: {e}")))?;
            let name = normalize_device_name(&raw)?;

            Ok(DeviceProbe { device, name })
        })
        .collect()
}

/// Reject an empty id list and apply the enumeration cap.
fn cap_device_ids(
    mut ids: Vec<opencl3::types::cl_device_id>,
    max_devices: usize,
) -> Result<Vec<opencl3::types::cl_device_id>> {
    if ids.is_empty() {
        return Err(Error::discovery("platform reports zero devices"));
    }

    ids.truncate(max_devices);
    Ok(ids)
}

/// Runtimes pad device names with whitespace or NULs; a name that trims
/// to nothing is an error.
fn normalize_device_name(raw: &str) -> Result<String> {
    let name = raw.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    if name.is_empty() {
        return Err(Error::discovery("device reports an empty name"));
    }
    Ok(name.to_string())
}
