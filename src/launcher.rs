//! Desktop launcher entry.
//!
//! The launcher is a freedesktop `.desktop` file generated once, on first
//! install. Fields are kept as an explicit record and serialized by
//! [`DesktopEntry::render`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{APP_EXEC_NAME, APP_NAME};
use crate::error::Result;

/// A desktop-entry launcher file.
#[derive(Debug, Clone)]
pub struct DesktopEntry {
    /// Application name shown in menus.
    pub name: String,

    /// Command line to start the application.
    pub exec: String,

    /// Icon file path.
    pub icon: PathBuf,

    /// Working directory; empty when `None`.
    pub path: Option<PathBuf>,

    /// Whether the desktop shows startup feedback.
    pub startup_notify: bool,

    /// Whether the application runs in a terminal.
    pub terminal: bool,
}

impl DesktopEntry {
    /// Entry launching the application payload under `install_dir`.
    pub fn for_install(install_dir: &Path, icon_file: &Path) -> Self {
        Self {
            name: APP_NAME.to_string(),
            exec: install_dir.join(APP_EXEC_NAME).display().to_string(),
            icon: icon_file.to_path_buf(),
            path: None,
            startup_notify: true,
            terminal: false,
        }
    }

    /// Render the `[Desktop Entry]` file contents.
    pub fn render(&self) -> String {
        format!(
            "[Desktop Entry]\n\
             Exec={exec}\n\
             Icon={icon}\n\
             Name={name}\n\
             Path={path}\n\
             StartupNotify={startup_notify}\n\
             Terminal={terminal}\n\
             Type=Application\n",
            exec = self.exec,
            icon = self.icon.display(),
            name = self.name,
            path = self
                .path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            startup_notify = self.startup_notify,
            terminal = self.terminal,
        )
    }

    /// Write the rendered entry to `dest`, creating parent directories.
    pub fn write(&self, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(dest, self.render())?;
        Ok(())
    }
}
