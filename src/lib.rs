// Copyright 2025 bakri (tidynest@proton.me)
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

//! Hyprland Keybind Sheet
//!
//! Turns an annotated Hyprland keybinds file into a categorised,
//! searchable cheat sheet.
//!
//! # Features
//!
//! - **Sections:** `#/ Name` lines group the binds that follow them
//! - **Descriptions:** trailing `# label` comments become readable names
//! - **Disabled binds:** `# bind = ...` lines are listed and flagged
//! - **Hidden lines:** `#.` keeps a line out of the sheet entirely
//! - **Readable keys:** `$mainMod_SHIFT` → `SUPER + SHIFT`, `mouse:272` → `Mouse Left`
//! - **Search:** case-insensitive search over descriptions, keys and modifiers
//! - **Live reload:** re-parse on every save
//!
//! # Architecture
//!
//! - **`core`:** Pure parsing pipeline (classifier, matcher, formatting) and search
//! - **`config`:** File access, path expansion, file watching
//! - **`logging`:** tracing subscriber setup
//!
//! The parser never writes the file and never executes the actions it
//! reads.
//!
//! # Examples
//!
//! ## Parsing keybinds text
//!
//! ```
//! use hypr_keybind_sheet::core::parse_keybinds;
//!
//! let binds = parse_keybinds("#/ Apps\nbind = SUPER, Return, exec, kitty # Terminal");
//! assert_eq!(binds[0].category, "Apps");
//! assert_eq!(binds[0].description, "Terminal");
//! ```
//!
//! ## Searching
//!
//! ```no_run
//! use hypr_keybind_sheet::config::KeybindSource;
//! use hypr_keybind_sheet::core::{group_by_category, KeybindFilter};
//!
//! let binds = KeybindSource::default().load();
//! let hits = KeybindFilter::new().with_query("screenshot").apply(&binds);
//!
//! for group in group_by_category(hits) {
//!     println!("{} ({})", group.category, group.keybinds.len());
//! }
//! ```

pub mod config;
pub mod core;
pub mod logging;

// Re-export commonly used types for convenience
pub use crate::core::{parse_keybinds, BindFlag, BindVariant, Keybind, KeybindFilter};
