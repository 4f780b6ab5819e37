//! Skylark installer CLI entry point.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use skylark_installer::cli::Cli;
use skylark_installer::config::{self, InstallConfig};
use skylark_installer::installer::Installer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Every event goes to stderr and, without ANSI escapes, to the append-only
/// install log. Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(log_file: &Path, debug: bool) -> std::io::Result<()> {
    let filter = if debug {
        EnvFilter::new("skylark_installer=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("skylark_installer=info"))
    };

    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .with(filter)
        .init();

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match InstallConfig::resolve(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    // The log file lives in the install directory, so the directory must
    // exist before the subscriber can open it.
    if let Err(err) = fs::create_dir_all(&config.install_dir) {
        eprintln!(
            "Error: can't create {}: {}",
            config.install_dir.display(),
            err
        );
        return ExitCode::FAILURE;
    }
    if let Err(err) = init_tracing(&config.log_file(), cli.debug) {
        eprintln!("Error: can't open {}: {}", config.log_file().display(), err);
        return ExitCode::FAILURE;
    }

    tracing::info!("----------------");
    if config::is_root() {
        tracing::info!("Detected installation as root");
    } else {
        tracing::info!("Detected installation as user");
    }
    tracing::info!("Init");
    tracing::debug!("Configuration: {:?}", config);

    match Installer::new(config).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
