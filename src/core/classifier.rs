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

//! src/core/classifier.rs
//!
//! Per-line classification of a keybinds file
//!
//! Decides what a line is before any directive matching happens. The
//! classifier is pure: it never holds the current section itself, the
//! parser carries that in its fold state and applies `SectionChange`.
//!
//! Markers, checked on the trimmed line in this order:
//! - `#.` ignore marker, line is dropped entirely
//! - `#/` section marker, names the category for following binds
//! - `#` plain comment, unless it also mentions `bind`

/// Prefix that removes a line from the sheet entirely.
pub const IGNORE_MARKER: &str = "#.";

/// Prefix that starts a new category.
pub const SECTION_MARKER: &str = "#/";

pub const COMMENT_MARKER: char = '#';

/// Substring that marks a comment as a disabled directive.
pub const DIRECTIVE_KEYWORD: &str = "bind";

/// What a single line contributes to the parse
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LineClass {
    /// Nothing to do: blank, ignored, plain comment or empty section marker
    Skip,
    /// A non-empty `#/` marker; carries the trimmed section name
    SectionChange(String),
    /// May be a directive; `commented` when the line starts with `#`
    DirectiveCandidate { commented: bool },
}

/// Classifies one line of the keybinds file.
///
/// # Example
/// ```ignore
/// assert_eq!(classify_line("#/ Apps"), LineClass::SectionChange("Apps".into()));
/// assert_eq!(classify_line("#. bind = SUPER, Z, exit"), LineClass::Skip);
/// ```
pub fn classify_line(line: &str) -> LineClass {
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with(IGNORE_MARKER) {
        return LineClass::Skip;
    }

    if let Some(name) = trimmed.strip_prefix(SECTION_MARKER) {
        let name = name.trim();
        return if name.is_empty() {
            LineClass::Skip
        } else {
            LineClass::SectionChange(name.to_string())
        };
    }

    if trimmed.starts_with(COMMENT_MARKER) {
        return if trimmed.contains(DIRECTIVE_KEYWORD) {
            LineClass::DirectiveCandidate { commented: true }
        } else {
            LineClass::Skip
        };
    }

    LineClass::DirectiveCandidate { commented: false }
}
