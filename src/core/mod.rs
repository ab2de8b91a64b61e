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

//! src/core/mod.rs
//!
//! Core parsing module
//!
//! This module turns keybinds file text into display records:
//! - Line classification (sections, ignore markers, comments)
//! - Directive matching with nom combinators
//! - Action/description splitting and modifier/key formatting
//! - Search and category grouping over the parsed records
//!
//! Nothing in here touches the file system, so every stage is unit tested
//! on plain strings.

pub mod classifier;
pub mod fields;
pub mod format;
pub mod matcher;
pub mod parser;
pub mod query;
pub mod types;

pub use parser::parse_keybinds;
pub use query::{categories, group_by_category, CategoryGroup, KeybindFilter};
pub use types::*;

#[cfg(test)]
mod tests;
