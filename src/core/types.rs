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

//! src/core/types.rs
//!
//! Core type definitions for the keybind sheet
//!
//! This module defines the types shared by every stage of the parser:
//! - `BindFlag`: A single Hyprland bind suffix letter (l, e, r, t, m)
//! - `BindVariant`: The ordered set of flags following the `bind` keyword
//! - `Keybind`: One display-ready record per accepted directive line
//!
//! Records serialise with the field names the sheet's front-end expects
//! (`mods`, `isCommented`, `rawLine`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned to keybinds that appear before any `#/` marker.
pub const DEFAULT_CATEGORY: &str = "General";

/// A single bind suffix letter
///
/// Hyprland lets several flags follow the `bind` keyword (`bindel`,
/// `bindlm`, ...). Each letter changes how the binding fires without
/// changing the three-field shape of the directive.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum BindFlag {
    /// Works while the screen is locked (l)
    Locked,
    /// Repeats while the key is held (e)
    Repeat,
    /// Fires on key release (r)
    Release,
    /// Transparent, cannot be shadowed by other binds (t)
    Transparent,
    /// Mouse binding (m)
    Mouse,
}

impl BindFlag {
    /// Maps a suffix letter to its flag.
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'l' => Some(BindFlag::Locked),
            'e' => Some(BindFlag::Repeat),
            'r' => Some(BindFlag::Release),
            't' => Some(BindFlag::Transparent),
            'm' => Some(BindFlag::Mouse),
            _ => None,
        }
    }

    /// Human-readable tag used when synthesising a description.
    ///
    /// Only `Mouse` is currently applied automatically (see
    /// [`crate::core::fields::enrich_description`]).
    pub fn tag(self) -> &'static str {
        match self {
            BindFlag::Locked => "Locked",
            BindFlag::Repeat => "Repeat",
            BindFlag::Release => "On Release",
            BindFlag::Transparent => "Transparent",
            BindFlag::Mouse => "Mouse",
        }
    }
}

/// The flags that followed the `bind` keyword, in source order
///
/// An empty variant is a plain `bind`.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct BindVariant {
    pub flags: Vec<BindFlag>,
}

impl BindVariant {
    /// Builds a variant from a suffix such as `"el"`.
    ///
    /// Returns `None` if any letter is not a known flag.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        suffix
            .chars()
            .map(BindFlag::from_letter)
            .collect::<Option<Vec<_>>>()
            .map(|flags| Self { flags })
    }

    pub fn is_plain(&self) -> bool {
        self.flags.is_empty()
    }

    /// True when the suffix is exactly the given single flag (`bindm` for
    /// `Mouse`, but not `bindlm`).
    pub fn is_only(&self, flag: BindFlag) -> bool {
        self.flags == [flag]
    }
}

/// A display-ready keybinding record
///
/// One record is produced for every directive line the parser accepts,
/// whether active or commented out. All fields are already formatted for
/// display; `raw_line` keeps the untouched source line.
///
/// # Example
/// ```ignore
/// // #/ Apps
/// // bind = SUPER, Return, exec, kitty
/// let bind = Keybind {
///     modifiers: "SUPER".to_string(),
///     key: "Return".to_string(),
///     action: "exec, kitty".to_string(),
///     description: "exec, kitty".to_string(),
///     category: "Apps".to_string(),
///     is_commented: false,
///     raw_line: "bind = SUPER, Return, exec, kitty".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Keybind {
    /// Canonical modifiers joined with `" + "`, empty when there are none
    #[serde(rename = "mods")]
    pub modifiers: String,

    /// Display name of the key (e.g. "Return", "↑", "Mouse Left")
    pub key: String,

    /// Dispatcher and its arguments, e.g. "exec, kitty"
    pub action: String,

    /// Inline comment label, or the action when no label was given
    pub description: String,

    /// Name of the nearest preceding `#/` section
    pub category: String,

    /// The directive is present but disabled with a leading `#`
    pub is_commented: bool,

    /// Source line exactly as it appeared in the file
    pub raw_line: String,
}

impl fmt::Display for Keybind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{} → {}", self.key, self.description)
        } else {
            write!(f, "{} + {} → {}", self.modifiers, self.key, self.description)
        }
    }
}
