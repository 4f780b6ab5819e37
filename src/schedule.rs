//! Auto-update cron registration.
//!
//! On first install a single crontab entry is registered, invoking the
//! installed copy of this binary every six hours at a random minute
//! offset. The existing table is read with `crontab -l`, the new entry
//! appended, and the result written back through `crontab -`.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{InstallError, Result};

/// A single crontab entry for the recurring update run.
#[derive(Debug, Clone)]
pub struct CronJob {
    minute: u8,
    command: PathBuf,
}

impl CronJob {
    /// Job invoking `command` every six hours at a random minute offset.
    pub fn new(command: PathBuf) -> Self {
        Self {
            minute: random_minute(),
            command,
        }
    }

    /// The minute offset of the cadence, in `[0, 59]`.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Render the crontab lines: a comment label plus the schedule entry.
    pub fn render(&self) -> String {
        format!(
            "# Skylark updater\n{} */6 * * * {}\n",
            self.minute,
            self.command.display()
        )
    }

    /// Append this job to `table`, preserving every existing line.
    pub fn append_to(&self, table: &str) -> String {
        let mut updated = table.to_string();
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(&self.render());
        updated
    }

    /// Register the job in the invoking user's crontab.
    pub fn register(&self) -> Result<()> {
        let table = read_crontab()?;
        write_crontab(&self.append_to(&table))
    }
}

/// Read the current crontab; a missing table reads as empty.
fn read_crontab() -> Result<String> {
    let output = Command::new("crontab").arg("-l").output()?;
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        // crontab -l exits nonzero when the user has no table yet
        debug!("No existing crontab");
        Ok(String::new())
    }
}

/// Replace the crontab with `table` via `crontab -` stdin.
fn write_crontab(table: &str) -> Result<()> {
    let mut child = Command::new("crontab")
        .arg("-")
        .stdin(Stdio::piped())
        .spawn()?;

    child
        .stdin
        .take()
        .expect("crontab stdin is piped")
        .write_all(table.as_bytes())?;

    let status = child.wait()?;
    if !status.success() {
        return Err(InstallError::Crontab {
            code: status.code(),
        });
    }
    Ok(())
}

/// Random minute offset in `[0, 59]`.
fn random_minute() -> u8 {
    let mut bytes = [0u8; 2];
    getrandom::getrandom(&mut bytes).expect("Failed to generate random bytes");
    (u16::from_le_bytes(bytes) % 60) as u8
}
