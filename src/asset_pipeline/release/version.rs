use std::sync::LazyLock;

use regex::Regex;

use crate::asset_pipeline::common::error::{AssetError, Result};

static APP_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"#define APP_VERSION "(.+)""#).expect("APP_VERSION pattern compiles")
});

/// Pulls the quoted value of the first `#define APP_VERSION "..."` out of a
/// firmware header.
///
/// `source` only names the header in the error message.
pub fn extract_app_version(text: &str, source: &str) -> Result<String> {
    let version = APP_VERSION
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| AssetError::VersionNotFound(source.to_string()))?;

    // The version ends up in a file name
    if version.contains(['/', '\\']) || version == "." || version == ".." {
        return Err(AssetError::InvalidConfig(format!(
            "APP_VERSION {version:?} cannot be used in a file name"
        )));
    }

    Ok(version)
}
