mod config;
pub mod database;

pub use config::{AppearanceConfig, Config, FeedbackConfig, LoggingConfig, TimerConfig};
pub use database::Database;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Environment variable that pins the data directory (tests, portable use).
pub const DATA_DIR_ENV: &str = "STUDYSPRINT_DATA_DIR";

/// Returns `$STUDYSPRINT_DATA_DIR`, or `~/.config/studysprint[-dev]/` based
/// on STUDYSPRINT_ENV, creating it if needed.
///
/// Set STUDYSPRINT_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = data_dir_path();
    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

/// Resolve the data directory without touching the filesystem.
pub fn data_dir_path() -> PathBuf {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env =
                std::env::var("STUDYSPRINT_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studysprint-dev")
            } else {
                base_dir.join("studysprint")
            }
        }
    }
}
