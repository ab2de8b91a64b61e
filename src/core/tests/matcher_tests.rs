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

//! Directive matcher tests
//!
//! Covers each small parser on its own, then the full line match:
//! - Comment prefix detection
//! - Bind keyword and flag suffix parsing
//! - Comma-terminated field parsing
//! - Remainder capture with embedded commas
//! - The empty key / empty remainder gate

use crate::core::matcher::*;
use crate::core::types::BindFlag;

#[test]
fn test_parse_comment_prefix() {
    assert!(matches!(parse_comment_prefix("  # bind"), Ok(("bind", true))));
    assert!(matches!(parse_comment_prefix("bind"), Ok(("bind", false))));
    // Only one marker is consumed
    assert!(matches!(parse_comment_prefix("## bind"), Ok(("# bind", true))));
}

#[test]
fn test_parse_bind_keyword() {
    let (rest, variant) = parse_bind_keyword("bind = SUPER").unwrap();
    assert_eq!(rest, " = SUPER");
    assert!(variant.is_plain());

    let (rest, variant) = parse_bind_keyword("bindel=").unwrap();
    assert_eq!(rest, "=");
    assert_eq!(variant.flags, vec![BindFlag::Repeat, BindFlag::Locked]);

    let (rest, variant) = parse_bind_keyword("bindings").unwrap();
    assert_eq!(rest, "ings");
    assert!(variant.is_plain());

    assert!(parse_bind_keyword("unbind = SUPER, Q").is_err());
}

#[test]
fn test_parse_field() {
    assert!(matches!(parse_field("SUPER SHIFT,  Q"), Ok(("Q", "SUPER SHIFT"))));
    assert!(matches!(parse_field(", Q"), Ok(("Q", ""))));
    assert!(parse_field("no comma here").is_err());
}

#[test]
fn test_match_active_directive() {
    let directive = match_directive("bind = SUPER, Return, exec, kitty").unwrap();

    assert!(!directive.commented);
    assert!(directive.variant.is_plain());
    assert_eq!(directive.modifiers, "SUPER");
    assert_eq!(directive.key, "Return");
    assert_eq!(directive.remainder, "exec, kitty");
}

#[test]
fn test_match_commented_directive() {
    let directive = match_directive("   #   binde = SUPER, L, resizeactive, 10 0").unwrap();

    assert!(directive.commented);
    assert_eq!(directive.variant.flags, vec![BindFlag::Repeat]);
    assert_eq!(directive.remainder, "resizeactive, 10 0");
}

#[test]
fn test_remainder_keeps_extra_commas() {
    let directive =
        match_directive("bind = SUPER SHIFT, S, exec, grim -g \"$(slurp)\" - | wl-copy, --type, image/png")
            .unwrap();

    assert_eq!(
        directive.remainder,
        "exec, grim -g \"$(slurp)\" - | wl-copy, --type, image/png"
    );
}

#[test]
fn test_empty_modifiers_are_allowed() {
    let directive = match_directive("bind = , Print, exec, grim").unwrap();
    assert_eq!(directive.modifiers, "");
    assert_eq!(directive.key, "Print");
}

#[test]
fn test_empty_key_or_remainder_is_rejected() {
    assert!(match_directive("bind = , , ").is_none());
    assert!(match_directive("bind = SUPER, , exec, kitty").is_none());
    assert!(match_directive("bind = SUPER, Q,    ").is_none());
}

#[test]
fn test_shape_mismatches() {
    // Missing third field
    assert!(match_directive("bind = SUPER, Q").is_none());
    // Missing assignment
    assert!(match_directive("bind SUPER, Q, killactive").is_none());
    // Unknown flag letter
    assert!(match_directive("bindx = SUPER, Q, killactive").is_none());
    // Keyword must come first
    assert!(match_directive("$mainMod = SUPER").is_none());
    assert!(match_directive("# see bind = SUPER, Q, x").is_none());
}
