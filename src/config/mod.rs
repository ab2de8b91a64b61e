//! Keybinds file access
//!
//! This module is the only place that touches the file system. It resolves
//! the keybinds file path, reads it, and hands the text to the parser.
//!
//! - **Tilde expansion**: `~/...` paths are expanded with `shellexpand`
//! - **Strict reads**: [`KeybindSource::read`] reports why a file could not
//!   be read
//! - **Resilient loads**: [`KeybindSource::load`] logs the failure and
//!   returns an empty list, so a viewer always has something to render
//! - **Live reload**: [`ConfigWatcher`] signals when the file changes
//!
//! # Example
//!
//! ```no_run
//! use hypr_keybind_sheet::config::KeybindSource;
//!
//! let source = KeybindSource::from_user_path("~/.config/hypr/configs/keybinds.conf");
//!
//! // Distinguish "unreadable" from "empty"
//! let binds = source.read()?;
//!
//! // Or never fail
//! let binds = source.load();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{parse_keybinds, Keybind};

pub mod error;
pub mod watcher;

pub use error::ConfigError;
pub use watcher::ConfigWatcher;

/// Where Hecate keeps its keybinds, relative to the home directory.
pub const DEFAULT_KEYBINDS_PATH: &str = "~/.config/hypr/configs/keybinds.conf";

/// Environment variable that overrides the keybinds file location.
pub const KEYBINDS_PATH_ENV: &str = "HYPR_KEYBINDS_CONFIG";

/// Expands a leading `~` to the user's home directory.
///
/// If the home directory cannot be resolved the path is returned as
/// given, and the later read reports it as not found.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// A keybinds file on disk
///
/// Holds only the path. Every read goes back to the file, so edits made
/// between two reads are always picked up.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeybindSource {
    path: PathBuf,
}

impl KeybindSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a source from a user-supplied path, expanding `~`.
    pub fn from_user_path(raw: &str) -> Self {
        Self::new(expand_path(raw))
    }

    /// Source for [`DEFAULT_KEYBINDS_PATH`].
    pub fn default_location() -> Self {
        Self::from_user_path(DEFAULT_KEYBINDS_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the raw file text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::NotAFile` for directories, and `ConfigError::Io` when
    /// the read itself fails (permissions, invalid UTF-8).
    pub fn read_to_string(&self) -> Result<String, ConfigError> {
        if !self.path.exists() {
            return Err(ConfigError::NotFound(self.path.clone()));
        }

        if !self.path.is_file() {
            return Err(ConfigError::NotAFile(self.path.clone()));
        }

        if self.path.read_link().is_ok() {
            tracing::debug!(path = %self.path.display(), "keybinds file is a symlink");
        }

        Ok(fs::read_to_string(&self.path)?)
    }

    /// Reads and parses the file, reporting I/O failures.
    ///
    /// An existing but empty file gives `Ok(vec![])`.
    pub fn read(&self) -> Result<Vec<Keybind>, ConfigError> {
        let content = self.read_to_string()?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = content.len(),
            "read keybinds file"
        );
        Ok(parse_keybinds(&content))
    }

    /// Reads and parses the file, treating any failure as "no keybinds".
    ///
    /// The failure is logged at `warn` level and an empty list returned.
    pub fn load(&self) -> Vec<Keybind> {
        match self.read() {
            Ok(keybinds) => keybinds,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "could not load keybinds");
                Vec::new()
            }
        }
    }

    /// Re-reads the file into `current`, keeping the old list on failure.
    ///
    /// Editors that save by rename leave a short window where the file is
    /// missing. A failed read is logged and `current` is left as it was.
    /// Returns true when `current` was replaced.
    pub fn refresh(&self, current: &mut Vec<Keybind>) -> bool {
        match self.read() {
            Ok(keybinds) => {
                *current = keybinds;
                true
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "reload failed, keeping previous keybinds"
                );
                false
            }
        }
    }
}

impl Default for KeybindSource {
    fn default() -> Self {
        Self::default_location()
    }
}

#[cfg(test)]
mod tests;
