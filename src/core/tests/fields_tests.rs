//! Action/description splitting tests

use crate::core::fields::*;
use crate::core::types::{BindFlag, BindVariant};

#[test]
fn test_split_without_comment() {
    let (action, description) = split_action_description("exec, kitty");
    assert_eq!(action, "exec, kitty");
    assert_eq!(description, "exec, kitty");
}

#[test]
fn test_split_with_inline_comment() {
    let (action, description) = split_action_description("killactive   #   Close window ");
    assert_eq!(action, "killactive");
    assert_eq!(description, "Close window");
}

#[test]
fn test_split_uses_first_marker() {
    let (action, description) = split_action_description("exec, kitty # Terminal # main");
    assert_eq!(action, "exec, kitty");
    assert_eq!(description, "Terminal # main");
}

#[test]
fn test_split_label_only_gives_empty_action() {
    let (action, description) = split_action_description("# just a label");
    assert!(action.is_empty());
    assert_eq!(description, "just a label");
}

#[test]
fn test_mouse_bind_without_label_is_enriched() {
    let variant = BindVariant::from_suffix("m").unwrap();
    let description = enrich_description(&variant, "movewindow", "movewindow".to_string());
    assert_eq!(description, "Mouse: movewindow");
}

#[test]
fn test_mouse_bind_with_label_is_kept() {
    let variant = BindVariant::from_suffix("m").unwrap();
    let description = enrich_description(&variant, "movewindow", "Drag window".to_string());
    assert_eq!(description, "Drag window");
}

#[test]
fn test_other_variants_are_not_enriched() {
    for suffix in ["", "l", "e", "r", "t", "lm", "el"] {
        let variant = BindVariant::from_suffix(suffix).unwrap();
        let description = enrich_description(&variant, "exec, x", "exec, x".to_string());
        assert_eq!(description, "exec, x", "suffix {suffix:?} should not enrich");
    }
}

#[test]
fn test_tagged_description_for_each_flag() {
    assert_eq!(tagged_description(BindFlag::Locked, "a"), "Locked: a");
    assert_eq!(tagged_description(BindFlag::Release, "a"), "On Release: a");
    assert_eq!(tagged_description(BindFlag::Transparent, "a"), "Transparent: a");
}
