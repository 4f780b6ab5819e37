//! Skylark installer - bootstrap installer and auto-updater for the
//! Skylark desktop application.
//!
//! A single invocation checks the remote release source, downloads the
//! packaged release when it is newer than the installed one, unpacks it
//! into the install directory, and on first install registers a desktop
//! launcher entry and a recurring auto-update cron job.
//!
//! # Modules
//!
//! - [`archive`] - In-process zip extraction
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Immutable run configuration and built-in defaults
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Blocking HTTP client for metadata and downloads
//! - [`installer`] - The check-download-update-integrate sequence
//! - [`launcher`] - Desktop-entry generation
//! - [`manifest`] - Installed-version manifest reading
//! - [`release`] - Remote release-metadata shapes
//! - [`schedule`] - Auto-update cron registration
//! - [`version`] - Version tags and numeric-tuple ordering
//!
//! # Example
//!
//! ```
//! use skylark_installer::version::Version;
//!
//! let installed = Version::parse("9.2").unwrap();
//! let latest = Version::parse("v10.0").unwrap();
//! assert!(latest > installed);
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod installer;
pub mod launcher;
pub mod manifest;
pub mod release;
pub mod schedule;
pub mod version;

pub use error::{InstallError, Result};
