//! Archive extraction.

use std::fs::File;
use std::path::Path;

use tracing::info;
use zip::ZipArchive;

use crate::error::{InstallError, Result};

/// Extract a zip archive into `dest`.
pub fn unpack(file: &Path, dest: &Path) -> Result<()> {
    info!("Unpacking {}", file.display());

    let archive_file = File::open(file)?;
    let mut archive = ZipArchive::new(archive_file).map_err(|err| InstallError::Unpack {
        path: file.to_path_buf(),
        message: err.to_string(),
    })?;

    archive.extract(dest).map_err(|err| InstallError::Unpack {
        path: file.to_path_buf(),
        message: err.to_string(),
    })?;

    Ok(())
}
