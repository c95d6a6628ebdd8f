// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use log::LevelFilter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Send log output to `log_file`, appending across runs.
///
/// The terminal is left to the interactive menu. `RUST_LOG` still overrides
/// `level` when set.
pub fn init_logging(level: LevelFilter, log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
