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

//! src/core/format.rs
//!
//! Display formatting for modifier and key fields
//!
//! Hyprland accepts many spellings for the same modifier (`SUPER`, `MOD4`,
//! `$mainMod`, `SUPER_SHIFT`, `CTRL+ALT`). The sheet shows one canonical
//! form joined with `" + "`, and friendly names for keys.

/// Alternate modifier spellings and their canonical names.
///
/// Applied in order as substring replacements on the uppercased field.
const MODIFIER_ALIASES: &[(&str, &str)] = &[
    ("$MAINMOD", "SUPER"),
    ("CONTROL", "CTRL"),
    ("MOD4", "SUPER"),
    ("MOD1", "ALT"),
];

const MODIFIER_SEPARATOR: &str = " + ";

/// Named keys, looked up by lowercase key name.
const NAMED_KEYS: &[(&str, &str)] = &[
    ("return", "Return"),
    ("space", "Space"),
    ("tab", "Tab"),
    ("print", "Print"),
    ("escape", "Escape"),
    ("backspace", "Backspace"),
    ("delete", "Delete"),
    ("insert", "Insert"),
    ("home", "Home"),
    ("end", "End"),
    ("pageup", "PageUp"),
    ("pagedown", "PageDown"),
    ("up", "↑"),
    ("down", "↓"),
    ("left", "←"),
    ("right", "→"),
    ("mouse:272", "Mouse Left"),
    ("mouse:273", "Mouse Right"),
    ("mouse:274", "Mouse Middle"),
];

/// Raw keycode prefix, e.g. `code:10`.
const KEYCODE_PREFIX: &str = "code:";

/// Converts a raw modifier field to its canonical display form
///
/// # Example
/// ```ignore
/// assert_eq!(format_modifiers("$mainMod SHIFT"), "SUPER + SHIFT");
/// assert_eq!(format_modifiers("control_alt"), "CTRL + ALT");
/// assert_eq!(format_modifiers(""), "");
/// ```
pub fn format_modifiers(raw: &str) -> String {
    let mut mods = raw.trim().to_uppercase();

    for (alias, canonical) in MODIFIER_ALIASES {
        mods = mods.replace(*alias, canonical);
    }

    mods.replace(['_', '+'], MODIFIER_SEPARATOR)
        .split_whitespace()
        .filter(|part| *part != "+")
        .collect::<Vec<_>>()
        .join(MODIFIER_SEPARATOR)
}

/// Converts a raw key field to its display name
///
/// Named keys come from a fixed table, `code:NN` keycodes are shown as the
/// bare code, and anything else is capitalised (`q` → `Q`, `f1` → `F1`).
pub fn format_key(raw: &str) -> String {
    let key = raw.trim();
    let lower = key.to_lowercase();

    if let Some((_, display)) = NAMED_KEYS.iter().find(|(name, _)| *name == lower) {
        return (*display).to_string();
    }

    if let Some(code) = strip_keycode_prefix(key) {
        return code.to_string();
    }

    capitalise(key)
}

fn strip_keycode_prefix(key: &str) -> Option<&str> {
    let prefix = key.get(..KEYCODE_PREFIX.len())?;
    if prefix.eq_ignore_ascii_case(KEYCODE_PREFIX) {
        key.get(KEYCODE_PREFIX.len()..)
    } else {
        None
    }
}

fn capitalise(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
