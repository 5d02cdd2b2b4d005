use mojs::app::{Args, load, run};
use mojs::error::MojsError;
use mojs::logger::{initialize as LoggerInitialize, level_from};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn start() -> Result<(), MojsError> {
    let log_dir = log_dir();
    create_dir_all(&log_dir).map_err(|e| MojsError::Mojs {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Exits on --help, --version, and usage errors
    let args = Args::parse();

    // Initialize logger before anything talks to the network
    LoggerInitialize(&log_dir, level_from(args.log_level.as_deref()))?;
    info!("Log directory: {}", log_dir.display());

    let registry = load(&args)?;

    let mut stdout = std::io::stdout().lock();
    run(&registry, &args, &mut stdout).await
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("mojs")
}
