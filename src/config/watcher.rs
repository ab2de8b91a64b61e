// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! File system watcher for live keybinds reloads
//!
//! Uses OS-level file watching (Linux inotify) via the notify crate.
//! The parent directory is watched rather than the file itself: editors
//! such as Neovim save by writing a new file and renaming it over the old
//! one, which would silently detach a watch on the original inode.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver, RecvTimeoutError},
    time::Duration,
};

use crate::config::ConfigError;

/// Watches the keybinds file for modifications
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    file_name: OsString,
}

impl ConfigWatcher {
    pub fn new(path: &Path) -> Result<Self, ConfigError> {
        let (parent, file_name) = match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) => (parent_or_cwd(parent), name.to_os_string()),
            _ => return Err(ConfigError::NoParentDir(path.to_path_buf())),
        };

        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        watcher.watch(&parent, RecursiveMode::NonRecursive)?;
        tracing::info!(dir = %parent.display(), "watching for keybinds changes");

        Ok(ConfigWatcher {
            _watcher: watcher,
            rx,
            file_name,
        })
    }

    /// Checks for modification events without blocking.
    pub fn check_for_changes(&self) -> bool {
        let mut changed = false;
        while let Ok(event_result) = self.rx.try_recv() {
            changed |= self.is_relevant(event_result);
        }
        changed
    }

    /// Blocks until the file changes or `timeout` elapses.
    ///
    /// Events that arrive in the same burst (write + rename) are drained so
    /// one save is reported once. Returns `Ok(false)` on timeout.
    pub fn wait_for_change(&self, timeout: Duration) -> Result<bool, ConfigError> {
        loop {
            match self.rx.recv_timeout(timeout) {
                Ok(event_result) => {
                    if self.is_relevant(event_result) {
                        self.check_for_changes();
                        return Ok(true);
                    }
                }
                Err(RecvTimeoutError::Timeout) => return Ok(false),
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(ConfigError::Watch(notify::Error::generic(
                        "watcher channel disconnected",
                    )))
                }
            }
        }
    }

    fn is_relevant(&self, event_result: notify::Result<Event>) -> bool {
        match event_result {
            Ok(event) => {
                matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                ) && event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(self.file_name.as_os_str()))
            }
            Err(e) => {
                tracing::warn!(error = %e, "file watcher error");
                false
            }
        }
    }
}

// `Path::new("keybinds.conf").parent()` is `Some("")`
fn parent_or_cwd(parent: &Path) -> PathBuf {
    if parent.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        parent.to_path_buf()
    }
}
