//! Removal of generated intermediates (inlined HTML, gzipped bundle, compiled
//! CSS, previous headers) before a fresh build.

use std::path::{Path, PathBuf};

use globset::Glob;
use tracing::{debug, info};

use crate::asset_pipeline::common::error::{AssetError, Result};

/// Files in `dir` whose name matches `pattern`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanRule {
    pub dir: PathBuf,
    pub pattern: String,
}

impl CleanRule {
    pub fn new(dir: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            pattern: pattern.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub rules: Vec<CleanRule>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                CleanRule::new("src", "html.*"),
                CleanRule::new("src", "*.html"),
                CleanRule::new("html", "*.css"),
            ],
        }
    }
}

/// Deletes every regular file under `root` matched by a rule and returns the
/// removed paths. Missing directories are skipped.
pub fn clean<P: AsRef<Path>>(config: &CleanConfig, root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut removed = Vec::new();

    for rule in &config.rules {
        let matcher = Glob::new(&rule.pattern)
            .map_err(|e| AssetError::InvalidConfig(format!("{}: {}", rule.pattern, e)))?
            .compile_matcher();

        let dir = root.join(&rule.dir);
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Skipping missing directory {}", dir.display());
                continue;
            }
            Err(e) => return Err(AssetError::IoError(e)),
        };

        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() || !matcher.is_match(entry.file_name()) {
                continue;
            }
            let path = entry.path();
            std::fs::remove_file(&path)?;
            debug!("Removed {}", path.display());
            removed.push(path);
        }
    }

    removed.sort();
    info!("Removed {} generated files", removed.len());
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_default_rules_remove_generated_files_only() {
        let root = tempdir().unwrap();
        let r = root.path();
        for generated in ["src/html.gz.h", "src/index.html", "html/style.css"] {
            touch(&r.join(generated));
        }
        for kept in ["src/main.h", "src/index.html.gz", "html/style.scss", "html/index.html"] {
            touch(&r.join(kept));
        }

        let removed = clean(&CleanConfig::default(), r).unwrap();

        assert_eq!(
            removed,
            vec![
                r.join("html/style.css"),
                r.join("src/html.gz.h"),
                r.join("src/index.html"),
            ]
        );
        assert!(r.join("src/main.h").exists());
        assert!(r.join("src/index.html.gz").exists());
        assert!(r.join("html/style.scss").exists());
        assert!(r.join("html/index.html").exists());
    }

    #[test]
    fn test_missing_directories_are_skipped() {
        let root = tempdir().unwrap();
        let removed = clean(&CleanConfig::default(), root.path()).unwrap();
        assert!(removed.is_empty());
    }

    #[test]
    fn test_invalid_glob_is_rejected() {
        let root = tempdir().unwrap();
        let config = CleanConfig {
            rules: vec![CleanRule::new("src", "[unterminated")],
        };
        assert!(matches!(
            clean(&config, root.path()),
            Err(AssetError::InvalidConfig(_))
        ));
    }
}
