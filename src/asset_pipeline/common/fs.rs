use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use tempfile::Builder;
use tracing::{debug, warn};

use crate::asset_pipeline::common::error::{AssetError, Result};

/// Writes an artifact through a temp file in the destination directory and
/// renames it into place only after `write` succeeded.
///
/// A failing `write` drops the temp file, so the destination keeps whatever it
/// held before the call. The artifact keeps the destination's permissions when
/// it already exists and otherwise gets the same umask-derived mode as
/// `std::fs::write`.
pub fn write_atomically<P, F>(path: P, write: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let output_error =
        |e: std::io::Error| AssetError::OutputWriteError(format!("{}: {}", path.display(), e));

    let existing = std::fs::metadata(path).ok().map(|m| m.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // open(2) applies the umask to this
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut staged = builder.tempfile_in(dir).map_err(output_error)?;
    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        write(&mut writer)?;
        writer.flush().map_err(output_error)?;
    }
    if let Some(permissions) = existing {
        staged.as_file().set_permissions(permissions).map_err(output_error)?;
    }
    staged.persist(path).map_err(|e| output_error(e.error))?;

    debug!("Persisted {}", path.display());
    Ok(())
}

/// Removes a file, treating "already gone" as a warning rather than an error.
pub fn remove_if_present<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    match std::fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Nothing to remove at {}", path.display());
            Ok(false)
        }
        Err(e) => Err(AssetError::IoError(e)),
    }
}
