//! CLI argument definitions.
//!
//! All arguments are defined with clap's derive macros on the [`Cli`]
//! struct. There are no subcommands; a bare invocation runs the full
//! check-and-update sequence.

use clap::Parser;
use std::path::PathBuf;

/// Skylark installer - installs and auto-updates the Skylark desktop application.
#[derive(Debug, Parser)]
#[command(name = "skylark-installer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Installation directory. Will be created if nonexistent.
    #[arg(short = 'd', long)]
    pub install_dir: Option<PathBuf>,

    /// Don't create a .desktop launcher file
    #[arg(long)]
    pub no_launcher: bool,

    /// Don't create a cron job for auto-updating
    #[arg(long)]
    pub no_cron: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_no_arguments() {
        let cli = Cli::parse_from(["skylark-installer"]);
        assert!(cli.install_dir.is_none());
        assert!(!cli.no_launcher);
        assert!(!cli.no_cron);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_install_dir_long_and_short() {
        let cli = Cli::parse_from(["skylark-installer", "--install-dir", "/opt/skylark"]);
        assert_eq!(cli.install_dir, Some(PathBuf::from("/opt/skylark")));

        let cli = Cli::parse_from(["skylark-installer", "-d", "/tmp/skylark"]);
        assert_eq!(cli.install_dir, Some(PathBuf::from("/tmp/skylark")));
    }

    #[test]
    fn parses_suppression_flags() {
        let cli = Cli::parse_from(["skylark-installer", "--no-launcher", "--no-cron"]);
        assert!(cli.no_launcher);
        assert!(cli.no_cron);
    }

    #[test]
    fn parses_debug_flag() {
        let cli = Cli::parse_from(["skylark-installer", "--debug"]);
        assert!(cli.debug);
    }
}
