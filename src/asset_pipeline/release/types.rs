//! Release packaging configuration

use std::path::PathBuf;

/// Where the compiled firmware comes from and where the versioned copy goes
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Header holding `#define APP_VERSION "..."`
    pub version_header: PathBuf,
    /// Firmware image produced by the external build
    pub firmware: PathBuf,
    /// Directory collecting versioned images
    pub binaries_dir: PathBuf,
    /// File name prefix, giving `<prefix>-<version>.bin`
    pub artifact_prefix: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            version_header: PathBuf::from("src/main.h"),
            firmware: PathBuf::from(".pioenvs/prod/firmware.bin"),
            binaries_dir: PathBuf::from("binaries"),
            artifact_prefix: "ailight".to_string(),
        }
    }
}

impl ReleaseConfig {
    pub fn builder() -> ReleaseConfigBuilder {
        ReleaseConfigBuilder::default()
    }

    pub fn artifact_name(&self, version: &str) -> String {
        format!("{}-{}.bin", self.artifact_prefix, version)
    }
}

/// Builder for ReleaseConfig
#[derive(Default)]
pub struct ReleaseConfigBuilder {
    version_header: Option<PathBuf>,
    firmware: Option<PathBuf>,
    binaries_dir: Option<PathBuf>,
    artifact_prefix: Option<String>,
}

impl ReleaseConfigBuilder {
    pub fn version_header(mut self, path: impl Into<PathBuf>) -> Self {
        self.version_header = Some(path.into());
        self
    }

    pub fn firmware(mut self, path: impl Into<PathBuf>) -> Self {
        self.firmware = Some(path.into());
        self
    }

    pub fn binaries_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.binaries_dir = Some(path.into());
        self
    }

    pub fn artifact_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.artifact_prefix = Some(prefix.into());
        self
    }

    pub fn build(self) -> ReleaseConfig {
        let default = ReleaseConfig::default();
        ReleaseConfig {
            version_header: self.version_header.unwrap_or(default.version_header),
            firmware: self.firmware.unwrap_or(default.firmware),
            binaries_dir: self.binaries_dir.unwrap_or(default.binaries_dir),
            artifact_prefix: self.artifact_prefix.unwrap_or(default.artifact_prefix),
        }
    }
}
