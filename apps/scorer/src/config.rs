use std::path::PathBuf;

use crate::error::AppError;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "SCORER_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "./data";

/// Runtime configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where `match.json` and `players.json` live.
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let data_dir = std::env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
        Self { data_dir }
    }

    /// Create the data directory if it does not exist yet.
    pub fn ensure_data_dir(&self) -> Result<(), AppError> {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| {
            AppError::config(format!(
                "cannot create data directory {}: {e}",
                self.data_dir.display()
            ))
        })
    }
}
