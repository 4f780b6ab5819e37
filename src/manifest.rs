//! Installed-version manifest.
//!
//! Every release archive ships a `manifest.json` describing itself; the
//! installer only ever reads it.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::version::Version;

/// File name of the manifest inside the install directory.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Package manifest bundled inside every release archive.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Version of the installed payload.
    pub version: String,
}

/// Read the installed version from the manifest under `install_dir`.
///
/// A missing manifest means nothing is installed. An unreadable or
/// unparseable manifest is logged as a warning and treated the same way.
pub fn installed_version(install_dir: &Path) -> Option<Version> {
    let path = install_dir.join(MANIFEST_FILE_NAME);
    if !path.is_file() {
        return None;
    }

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("Can't read manifest {}: {}", path.display(), err);
            return None;
        }
    };

    let manifest: Manifest = match serde_json::from_str(&raw) {
        Ok(manifest) => manifest,
        Err(err) => {
            warn!("Can't parse manifest {}: {}", path.display(), err);
            return None;
        }
    };

    Version::parse(&manifest.version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_manifest_means_not_installed() {
        let temp = TempDir::new().unwrap();
        assert!(installed_version(temp.path()).is_none());
    }

    #[test]
    fn valid_manifest_yields_version() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(MANIFEST_FILE_NAME),
            r#"{"version": "1.2.0", "name": "Skylark"}"#,
        )
        .unwrap();

        let version = installed_version(temp.path()).unwrap();
        assert_eq!(version, Version::parse("1.2.0").unwrap());
    }

    #[test]
    fn unparseable_manifest_means_not_installed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MANIFEST_FILE_NAME), "not json at all").unwrap();
        assert!(installed_version(temp.path()).is_none());
    }

    #[test]
    fn manifest_without_version_field_means_not_installed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MANIFEST_FILE_NAME), r#"{"name": "Skylark"}"#).unwrap();
        assert!(installed_version(temp.path()).is_none());
    }

    #[test]
    fn manifest_with_non_numeric_version_means_not_installed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MANIFEST_FILE_NAME), r#"{"version": "unknown"}"#).unwrap();
        assert!(installed_version(temp.path()).is_none());
    }
}
