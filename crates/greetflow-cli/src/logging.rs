use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

use crate::CliError;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// With a log file, events are appended as JSON lines. Otherwise a compact
/// human-readable layer writes to stderr so stdout only carries program output.
pub fn init_logging(log_file: Option<&Path>) -> Result<(), CliError> {
    match log_file {
        Some(path) => init_file_logging(path),
        None => init_stderr_logging(),
    }
}

fn init_file_logging(path: &Path) -> Result<(), CliError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    // Each event locks the file for the duration of a single JSON line.
    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter("info"))
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

fn init_stderr_logging() -> Result<(), CliError> {
    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter(DEFAULT_FILTER))
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
