//! Log setup: stdout plus an append-mode log file

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::Level as TraceLevel;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::FmtSubscriber;

use crate::constants::logging;

/// `<executable basename>.txt` in the working directory
pub fn log_file_path() -> PathBuf {
    let exe_name = std::env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|arg0| arg0.file_name().map(|name| name.to_os_string()))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").into());

    let mut filename = exe_name;
    filename.push(logging::FILE_SUFFIX);
    PathBuf::from(filename)
}

fn level_from_env() -> TraceLevel {
    parse_level(&std::env::var(logging::LEVEL_ENV).unwrap_or_else(|_| "info".to_string()))
}

fn parse_level(value: &str) -> TraceLevel {
    match value.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context(format!("Failed to open log file {}", path.display()))
}

/// Install the global subscriber. Every event goes to stdout and to `log_file`.
pub fn init(log_file: &Path) -> Result<()> {
    let file = Arc::new(open_log_file(log_file)?);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_from_env())
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stdout.and(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;
    Ok(())
}
