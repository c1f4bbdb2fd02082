// src/logging/mod.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use env_logger::{Builder, Target};
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

// Open the log file for appending, creating parent directories
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Configure `env_logger` from the loaded config. `RUST_LOG` still
/// overrides individual modules.
pub fn builder(config: &Config) -> Result<Builder> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    match &config.log_file {
        Some(path) => {
            builder.target(Target::Pipe(Box::new(open_log_file(path)?)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    Ok(builder)
}

pub fn init(config: &Config) -> Result<()> {
    builder(config)?.try_init()?;
    log::debug!("Logging initialised at {}", config.log_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn log_file_parents_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("passkeeper.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn builder_accepts_file_target() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_level: LevelFilter::Warn,
            log_file: Some(dir.path().join("app.log")),
            ..Config::default()
        };

        let _logger = builder(&config).unwrap().build();
        assert!(dir.path().join("app.log").exists());
    }
}
