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

//! src/core/query.rs
//!
//! Search and category browsing over parsed keybinds
//!
//! Everything here borrows from the parsed records and keeps file order.
//! Nothing is sorted or deduplicated.

use crate::core::types::Keybind;

/// Category name that selects every category.
pub const ALL_CATEGORIES: &str = "All";

/// Search criteria for the keybind sheet
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct KeybindFilter {
    /// Case-insensitive text matched against description, key and modifiers
    pub query: Option<String>,
    /// Exact category name; `None` or `"All"` matches every category
    pub category: Option<String>,
    /// Hide binds that are commented out when false
    pub include_commented: bool,
}

impl KeybindFilter {
    /// A filter that matches every keybind, commented ones included.
    pub fn new() -> Self {
        Self {
            include_commented: true,
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn include_commented(mut self, include: bool) -> Self {
        self.include_commented = include;
        self
    }

    /// Checks a single keybind against every criterion.
    ///
    /// The query is trimmed first, so a whitespace-only search matches
    /// everything instead of only fields containing spaces.
    pub fn matches(&self, keybind: &Keybind) -> bool {
        if !self.include_commented && keybind.is_commented {
            return false;
        }

        if let Some(category) = self.category.as_deref() {
            if category != ALL_CATEGORIES && keybind.category != category {
                return false;
            }
        }

        match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query_lower = query.to_lowercase();
                [&keybind.description, &keybind.key, &keybind.modifiers]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query_lower))
            }
        }
    }

    /// Returns the matching keybinds in file order.
    pub fn apply<'a>(&self, keybinds: &'a [Keybind]) -> Vec<&'a Keybind> {
        keybinds.iter().filter(|k| self.matches(k)).collect()
    }
}

/// Keybinds sharing one category
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub keybinds: Vec<&'a Keybind>,
}

/// Distinct categories in the order they first appear.
pub fn categories(keybinds: &[Keybind]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for keybind in keybinds {
        if !seen.contains(&keybind.category.as_str()) {
            seen.push(&keybind.category);
        }
    }
    seen
}

/// Groups keybinds by category
///
/// Groups follow first-appearance order; records within a group keep file
/// order. A category split across the file (`#/ Apps` twice) ends up in a
/// single group.
pub fn group_by_category<'a, I>(keybinds: I) -> Vec<CategoryGroup<'a>>
where
    I: IntoIterator<Item = &'a Keybind>,
{
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();

    for keybind in keybinds {
        match groups.iter_mut().find(|g| g.category == keybind.category) {
            Some(group) => group.keybinds.push(keybind),
            None => groups.push(CategoryGroup {
                category: &keybind.category,
                keybinds: vec![keybind],
            }),
        }
    }

    groups
}
