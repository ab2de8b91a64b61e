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

//! src/core/fields.rs
//!
//! Splits a directive remainder into action and description
//!
//! Users label binds with a trailing comment:
//!
//! ```hyprland
//! bind = SUPER SHIFT, Q, killactive # Close window
//! ```
//!
//! Everything before the first `#` is the action, everything after it is
//! the description.

use crate::core::classifier::COMMENT_MARKER;
use crate::core::types::{BindFlag, BindVariant};

/// Splits the remainder at the first inline comment marker.
///
/// Without a marker, action and description are both the trimmed
/// remainder. The action may come back empty (`"# label only"`); callers
/// discard such directives.
pub fn split_action_description(remainder: &str) -> (String, String) {
    match remainder.split_once(COMMENT_MARKER) {
        Some((action, description)) => {
            (action.trim().to_string(), description.trim().to_string())
        }
        None => {
            let action = remainder.trim().to_string();
            (action.clone(), action)
        }
    }
}

/// Synthesises a description for unlabelled mouse binds
///
/// Applies only when the suffix is exactly `m` and no inline label was
/// supplied. The other flags have tags but are deliberately not applied
/// here; `bindl`, `binde` and friends keep the action as description.
pub fn enrich_description(variant: &BindVariant, action: &str, description: String) -> String {
    if variant.is_only(BindFlag::Mouse) && description == action {
        tagged_description(BindFlag::Mouse, action)
    } else {
        description
    }
}

/// Formats `"<Tag>: <action>"` for a flag.
pub fn tagged_description(flag: BindFlag, action: &str) -> String {
    format!("{}: {}", flag.tag(), action)
}
