use crate::error::{Error, Result};
use std::path::PathBuf;

/// Default location of the kernel source, relative to the working directory.
pub const DEFAULT_KERNEL_PATH: &str = "kernels/matvec.cl";

/// Entry point expected in the kernel source.
pub const DEFAULT_KERNEL_NAME: &str = "matvec_mult";

/// Enumeration cap applied to both platforms and devices.
const DEFAULT_ENUMERATION_CAP: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the OpenCL source file to compile.
    pub kernel_path: PathBuf,
    /// Name of the kernel entry point to extract from the built program.
    pub kernel_name: String,
    /// Which discovered platform to sweep. The sweep spans that platform's
    /// devices only; cross-platform contexts are not supported by OpenCL.
    pub platform_index: usize,
    /// Upper bound on enumerated platforms.
    pub max_platforms: usize,
    /// Upper bound on enumerated devices.
    pub max_devices: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kernel_path: PathBuf::from(DEFAULT_KERNEL_PATH),
            kernel_name: DEFAULT_KERNEL_NAME.to_string(),
            platform_index: 0,
            max_platforms: DEFAULT_ENUMERATION_CAP,
            max_devices: DEFAULT_ENUMERATION_CAP,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<()> {
        if self.kernel_name.is_empty() {
            return Err(Error::config("kernel_name must not be empty"));
        }

        if self.max_platforms == 0 {
            return Err(Error::config("max_platforms must be > 0"));
        }

        if self.max_devices == 0 {
            return Err(Error::config("max_devices must be > 0"));
        }

        if self.platform_index >= self.max_platforms {
            return Err(Error::config(format!(
                "platform_index {} outside enumeration cap {}",
                self.platform_index, self.max_platforms
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn kernel_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.kernel_path = path.into();
        self
    }

    pub fn kernel_name<S: Into<String>>(mut self, name: S) -> Self {
        self.config.kernel_name = name.into();
        self
    }

    pub fn platform_index(mut self, index: usize) -> Self {
        self.config.platform_index = index;
        self
    }

    pub fn max_platforms(mut self, max: usize) -> Self {
        self.config.max_platforms = max;
        self
    }

    pub fn max_devices(mut self, max: usize) -> Self {
        self.config.max_devices = max;
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn builder_round_trips_fields() {
        let config = Config::builder()
            .kernel_path("/tmp/custom.cl")
            .kernel_name("custom_entry")
            .platform_index(1)
            .max_platforms(8)
            .max_devices(16)
            .build()
            .unwrap();

        assert_eq!(config.kernel_path, PathBuf::from("/tmp/custom.cl"));
        assert_eq!(config.kernel_name, "custom_entry");
        assert_eq!(config.platform_index, 1);
        assert_eq!(config.max_platforms, 8);
        assert_eq!(config.max_devices, 16);
    }

    #[test]
    fn rejects_empty_kernel_name() {
        let result = Config::builder().kernel_name("").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn rejects_zero_caps() {
        assert!(Config::builder().max_platforms(0).build().is_err());
        assert!(Config::builder().max_devices(0).build().is_err());
    }

    #[test]
    fn rejects_platform_index_beyond_cap() {
        let result = Config::builder().platform_index(5).build();
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
