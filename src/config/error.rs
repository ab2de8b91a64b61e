use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or watching the keybinds file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Keybinds file does not exist.
    #[error("Keybinds file not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is a directory or other non-file.
    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),
    /// Path has no parent directory to watch.
    #[error("Cannot watch path without a parent directory: {0}")]
    NoParentDir(PathBuf),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// File system watcher could not be created or attached.
    #[error("File watcher failed: {0}")]
    Watch(#[from] notify::Error),
}
