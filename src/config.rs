//! Run configuration.
//!
//! Configuration is resolved exactly once at startup from built-in
//! defaults plus command-line overrides; the resulting [`InstallConfig`]
//! is immutable for the rest of the run. Running as root selects the
//! system-wide install directory and launcher path, a plain user gets the
//! per-user ones.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::anyhow;

use crate::cli::Cli;
use crate::error::Result;

/// Name of the application the installer manages.
pub const APP_NAME: &str = "Skylark";

/// File name of the application payload's entry binary.
pub const APP_EXEC_NAME: &str = "skylark";

/// Release-metadata endpoint queried for the latest version tag.
pub const RELEASE_URL: &str =
    "https://api.github.com/repos/skylark-im/skylark-desktop/releases/latest";

/// Package download endpoint; serves a redirect to the release archive.
pub const PACKAGE_URL: &str = "https://downloads.skylark.im/desktop/latest/skylark.zip";

/// Icon download endpoint.
pub const ICON_URL: &str = "https://downloads.skylark.im/desktop/skylark.png";

/// File name of the downloaded package inside the install directory.
pub const PACKAGE_FILE_NAME: &str = "skylark.zip";

/// File name of the downloaded icon inside the install directory.
pub const ICON_FILE_NAME: &str = "skylark.png";

/// File name of the run log inside the install directory.
pub const LOG_FILE_NAME: &str = "install.log";

/// System-wide install directory used when running as root.
const INSTALL_DIR_ROOT: &str = "/opt/skylark";

/// System-wide launcher path used when running as root.
const LAUNCHER_FILE_ROOT: &str = "/usr/share/applications/skylark.desktop";

/// Launcher path relative to the invoking user's home directory.
const LAUNCHER_FILE_USER: &str = ".local/share/applications/skylark.desktop";

/// Immutable configuration for a single installer run.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Directory the application is installed into.
    pub install_dir: PathBuf,

    /// Release-metadata endpoint.
    pub release_url: String,

    /// Package download URL.
    pub package_url: String,

    /// Icon download URL.
    pub icon_url: String,

    /// Launcher file written on first install; `None` suppresses it.
    pub launcher_file: Option<PathBuf>,

    /// Whether to register the auto-update cron job on first install.
    pub cron: bool,
}

impl InstallConfig {
    /// Resolve the configuration from built-in defaults and CLI overrides.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let root = is_root();

        let install_dir = match &cli.install_dir {
            Some(dir) => dir.clone(),
            None if root => PathBuf::from(INSTALL_DIR_ROOT),
            None => executable_dir()?,
        };

        let launcher_file = if cli.no_launcher {
            None
        } else if root {
            Some(PathBuf::from(LAUNCHER_FILE_ROOT))
        } else {
            Some(user_launcher_file()?)
        };

        Ok(Self {
            install_dir,
            release_url: RELEASE_URL.to_string(),
            package_url: PACKAGE_URL.to_string(),
            icon_url: ICON_URL.to_string(),
            launcher_file,
            cron: !cli.no_cron,
        })
    }

    /// Path of the package archive inside the install directory.
    pub fn package_file(&self) -> PathBuf {
        self.install_dir.join(PACKAGE_FILE_NAME)
    }

    /// Path of the icon inside the install directory.
    pub fn icon_file(&self) -> PathBuf {
        self.install_dir.join(ICON_FILE_NAME)
    }

    /// Path of the run log inside the install directory.
    pub fn log_file(&self) -> PathBuf {
        self.install_dir.join(LOG_FILE_NAME)
    }
}

/// Whether the process runs with root privileges.
pub fn is_root() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid has no preconditions and cannot fail.
        unsafe { libc::geteuid() == 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}

/// Directory of the running executable, the default user install target.
fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Per-user launcher path under the home directory.
fn user_launcher_file() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("could not determine home directory"))?;
    Ok(home.join(LAUNCHER_FILE_USER))
}
