//! Error types for installer operations.
//!
//! This module defines [`InstallError`], the primary error type used
//! throughout the installer, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `InstallError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `InstallError::Other`) for unexpected errors
//! - Failures propagate to the entry point; nothing is retried or rolled back

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for installer operations.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Release metadata carried no usable version tag.
    #[error("no usable version tag in release metadata from {url}")]
    MissingVersionTag { url: String },

    /// Remote endpoint answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Package archive could not be unpacked.
    #[error("failed to unpack {path}: {message}")]
    Unpack { path: PathBuf, message: String },

    /// The crontab utility rejected the updated table.
    #[error("crontab exited with code {code:?}")]
    Crontab { code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error wrapper.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for installer operations.
pub type Result<T> = std::result::Result<T, InstallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_version_tag_displays_url() {
        let err = InstallError::MissingVersionTag {
            url: "https://example.invalid/releases/latest".into(),
        };
        assert!(err.to_string().contains("releases/latest"));
    }

    #[test]
    fn http_status_displays_status_and_url() {
        let err = InstallError::HttpStatus {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "https://example.invalid/skylark.zip".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("skylark.zip"));
    }

    #[test]
    fn unpack_displays_path_and_message() {
        let err = InstallError::Unpack {
            path: PathBuf::from("/tmp/skylark.zip"),
            message: "invalid Zip archive".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/skylark.zip"));
        assert!(msg.contains("invalid Zip archive"));
    }

    #[test]
    fn crontab_displays_exit_code() {
        let err = InstallError::Crontab { code: Some(2) };
        assert!(err.to_string().contains("2"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: InstallError = io_err.into();
        assert!(matches!(err, InstallError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(InstallError::Crontab { code: None })
        }
        assert!(returns_error().is_err());
    }
}
