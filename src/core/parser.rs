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

//! src/core/parser.rs
//!
//! Keybinds file parser
//!
//! Turns an annotated Hyprland keybinds file into display records. It
//! handles:
//! - All bind variants (bind, bindl, binde, bindr, bindt, bindm and
//!   combinations such as bindel)
//! - Commented-out binds (`# bind = ...`), kept and flagged
//! - `#/ Section` markers that set the category of following binds
//! - `#.` ignore markers that hide a line from the sheet
//! - Inline `# label` comments used as descriptions
//!
//! # Architecture
//! A single forward pass folds the lines into a [`ParseState`]. The current
//! category lives in that state, so every call starts from scratch and two
//! parses of the same text are identical.
//!
//! Malformed lines are never errors. They are skipped and parsing goes on,
//! since most lines in a config are not binds at all.
//!
//! # Security
//! The parser only reads and structures text. It never executes actions.

use crate::core::classifier::{classify_line, LineClass};
use crate::core::fields::{enrich_description, split_action_description};
use crate::core::format::{format_key, format_modifiers};
use crate::core::matcher::match_directive;
use crate::core::types::{Keybind, DEFAULT_CATEGORY};

/// Fold state carried from line to line
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseState {
    /// Category applied to the next accepted bind
    pub category: String,
    /// Records emitted so far, in file order
    pub records: Vec<Keybind>,
}

impl Default for ParseState {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            records: Vec::new(),
        }
    }
}

impl ParseState {
    /// Consumes one line and returns the updated state.
    pub fn feed(mut self, line: &str) -> Self {
        match classify_line(line) {
            LineClass::Skip => {}
            LineClass::SectionChange(name) => {
                tracing::trace!(category = %name, "section marker");
                self.category = name;
            }
            LineClass::DirectiveCandidate { .. } => match parse_keybind_line(line, &self.category) {
                Some(keybind) => self.records.push(keybind),
                None => tracing::trace!(line, "skipped non-directive line"),
            },
        }
        self
    }

    pub fn into_records(self) -> Vec<Keybind> {
        self.records
    }
}

/// Parses a complete keybinds file
///
/// # Arguments
/// * `content` - The full file content
///
/// # Returns
/// Every accepted bind in file order. An empty or bind-free file gives an
/// empty vector.
///
/// # Example
/// ```ignore
/// let binds = parse_keybinds("#/ Apps\nbind = SUPER, Return, exec, kitty");
/// assert_eq!(binds[0].category, "Apps");
/// ```
pub fn parse_keybinds(content: &str) -> Vec<Keybind> {
    let records = content
        .lines()
        .fold(ParseState::default(), ParseState::feed)
        .into_records();

    tracing::debug!(count = records.len(), "parsed keybinds");
    records
}

/// Builds a record from one directive candidate line
///
/// Returns `None` if the line does not match the directive shape, or if
/// key or action turn out empty.
pub fn parse_keybind_line(line: &str, category: &str) -> Option<Keybind> {
    let directive = match_directive(line)?;

    let (action, description) = split_action_description(directive.remainder);
    if action.is_empty() {
        return None;
    }
    let description = enrich_description(&directive.variant, &action, description);

    Some(Keybind {
        modifiers: format_modifiers(directive.modifiers),
        key: format_key(directive.key),
        action,
        description,
        category: category.to_string(),
        is_commented: directive.commented,
        raw_line: line.to_string(),
    })
}
