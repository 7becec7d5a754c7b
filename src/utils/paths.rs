//! Cross-Platform Path Utilities
//!
//! Functions for resolving the application's directories across platforms.

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the ClauseLens directory (~/.clauselens/)
pub fn clauselens_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".clauselens"))
}

/// Get the config file path (~/.clauselens/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(clauselens_dir()?.join("config.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the ClauseLens directory, creating if it doesn't exist
pub fn ensure_clauselens_dir() -> AppResult<PathBuf> {
    let path = clauselens_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}
