use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::asset_pipeline::common::error::{AssetError, Result};
use crate::asset_pipeline::release::types::ReleaseConfig;
use crate::asset_pipeline::release::version::extract_app_version;

/// Moves the compiled firmware to `<binaries_dir>/<prefix>-<version>.bin`.
///
/// The version comes from the configured header. The firmware build itself is
/// expected to have run already.
#[instrument(skip(config), fields(firmware = %config.firmware.display()))]
pub fn package_release(config: &ReleaseConfig) -> Result<PathBuf> {
    let header = std::fs::read_to_string(&config.version_header).map_err(|e| {
        AssetError::InputReadError(format!("{}: {}", config.version_header.display(), e))
    })?;
    let version = extract_app_version(&header, &config.version_header.display().to_string())?;
    debug!("Firmware version {}", version);

    if !config.firmware.is_file() {
        return Err(AssetError::InputReadError(format!(
            "{}: no firmware image",
            config.firmware.display()
        )));
    }

    std::fs::create_dir_all(&config.binaries_dir).map_err(|e| {
        AssetError::OutputWriteError(format!("{}: {}", config.binaries_dir.display(), e))
    })?;

    let destination = config.binaries_dir.join(config.artifact_name(&version));
    move_file(&config.firmware, &destination)?;

    info!(
        version = %version,
        destination = %destination.display(),
        "Firmware packaged"
    );
    Ok(destination)
}

fn move_file(from: &Path, to: &Path) -> Result<()> {
    if let Err(e) = std::fs::rename(from, to) {
        // rename cannot cross filesystems
        warn!("rename {} failed ({}), copying instead", from.display(), e);
        std::fs::copy(from, to).map_err(|e| {
            AssetError::OutputWriteError(format!("{}: {}", to.display(), e))
        })?;
        std::fs::remove_file(from)?;
    }
    Ok(())
}
