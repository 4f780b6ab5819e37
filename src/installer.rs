//! Installer orchestration.
//!
//! [`Installer::run`] performs the full check-download-update-integrate
//! sequence exactly once: read the installed version, fetch the latest
//! tag, and when the remote is newer (or nothing is installed) download
//! and extract the package. First installs additionally register the
//! launcher entry and the auto-update cron job; upgrades instead purge
//! stale files before extraction.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::{debug, error, info};

use crate::archive;
use crate::config::{InstallConfig, ICON_FILE_NAME, LOG_FILE_NAME, PACKAGE_FILE_NAME};
use crate::error::Result;
use crate::fetch::HttpFetcher;
use crate::launcher::DesktopEntry;
use crate::manifest;
use crate::release;
use crate::schedule::CronJob;
use crate::version::Version;

/// Runs the check-download-update-integrate sequence.
pub struct Installer {
    config: InstallConfig,
    fetcher: HttpFetcher,
}

impl Installer {
    /// Create an installer with the default HTTP fetcher.
    pub fn new(config: InstallConfig) -> Self {
        Self::with_fetcher(config, HttpFetcher::new())
    }

    /// Create an installer with a custom HTTP fetcher.
    pub fn with_fetcher(config: InstallConfig, fetcher: HttpFetcher) -> Self {
        Self { config, fetcher }
    }

    /// Run the full install/update sequence.
    pub fn run(&self) -> Result<()> {
        self.copy_self_into_install_dir()?;

        info!("Checking installed version");
        let installed = manifest::installed_version(&self.config.install_dir);
        match &installed {
            Some(version) => info!("Installed version is {}", version),
            None => info!("Installed version is none"),
        }

        let latest = release::latest_version(&self.fetcher, &self.config.release_url)?;

        let newer = installed
            .as_ref()
            .map_or(true, |installed| latest > *installed);
        if newer {
            self.update(installed.as_ref())?;
        }

        info!("Done");
        Ok(())
    }

    /// Download and extract the latest package; integrate on first install.
    fn update(&self, installed: Option<&Version>) -> Result<()> {
        info!("New version found, downloading");

        let package_file = self.config.package_file();
        self.fetcher
            .download(&self.config.package_url, &package_file)?;

        if installed.is_some() {
            clean_old_files(&self.config.install_dir, &self.cleanup_exceptions())?;
        }

        // Extraction failure is not fatal; the run still completes and a
        // re-invocation starts over from whatever manifest state remains.
        if let Err(err) = archive::unpack(&package_file, &self.config.install_dir) {
            error!("{}", err);
        }
        fs::remove_file(&package_file)?;

        if installed.is_none() {
            if self.config.launcher_file.is_some() {
                self.create_launcher()?;
            }
            if self.config.cron {
                self.create_cron_job()?;
            }
        }

        Ok(())
    }

    /// Copy the running executable into an overridden install directory,
    /// so the cron job has an installed copy to invoke.
    fn copy_self_into_install_dir(&self) -> Result<()> {
        let exe = env::current_exe()?;
        if exe.parent() == Some(self.config.install_dir.as_path()) {
            return Ok(());
        }

        fs::create_dir_all(&self.config.install_dir)?;
        let name = exe.file_name().expect("executable path has a file name");
        fs::copy(&exe, self.config.install_dir.join(name))?;
        Ok(())
    }

    /// Basenames spared by the upgrade cleanup: the installer binary, the
    /// icon, the package being installed, and the log.
    fn cleanup_exceptions(&self) -> Vec<OsString> {
        let mut exceptions = vec![
            OsString::from(ICON_FILE_NAME),
            OsString::from(PACKAGE_FILE_NAME),
            OsString::from(LOG_FILE_NAME),
        ];
        if let Ok(exe) = env::current_exe() {
            if let Some(name) = exe.file_name() {
                exceptions.push(name.to_os_string());
            }
        }
        exceptions
    }

    /// Download the icon and write the launcher file.
    fn create_launcher(&self) -> Result<()> {
        let Some(launcher_file) = &self.config.launcher_file else {
            return Ok(());
        };

        info!("Retrieving icon");
        let icon_file = self.config.icon_file();
        self.fetcher.download(&self.config.icon_url, &icon_file)?;

        info!("Creating launcher");
        let entry = DesktopEntry::for_install(&self.config.install_dir, &icon_file);
        entry.write(launcher_file)
    }

    /// Register the recurring auto-update cron job.
    fn create_cron_job(&self) -> Result<()> {
        info!("Creating cron job");

        let exe = env::current_exe()?;
        let name = exe.file_name().expect("executable path has a file name");
        CronJob::new(self.config.install_dir.join(name)).register()
    }
}

/// Delete every entry of `dir` whose file name is not in `exceptions`.
///
/// Plain files are unlinked; directories are removed recursively.
pub fn clean_old_files(dir: &Path, exceptions: &[OsString]) -> Result<()> {
    info!("Cleaning {}", dir.display());

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if exceptions
            .iter()
            .any(|exception| exception.as_os_str() == entry.file_name())
        {
            continue;
        }

        debug!("Removing {}", entry.file_name().to_string_lossy());
        let path = entry.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }

    Ok(())
}
