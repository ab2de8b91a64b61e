//! Modifier and key formatting tests

use crate::core::format::{format_key, format_modifiers};

#[test]
fn test_format_modifiers_single() {
    assert_eq!(format_modifiers("SUPER"), "SUPER");
    assert_eq!(format_modifiers("super"), "SUPER");
}

#[test]
fn test_format_modifiers_separators() {
    assert_eq!(format_modifiers("SUPER SHIFT"), "SUPER + SHIFT");
    assert_eq!(format_modifiers("SUPER_SHIFT"), "SUPER + SHIFT");
    assert_eq!(format_modifiers("CTRL+ALT"), "CTRL + ALT");
    assert_eq!(format_modifiers("  SUPER   +  SHIFT  "), "SUPER + SHIFT");
}

#[test]
fn test_format_modifiers_aliases() {
    assert_eq!(format_modifiers("$mainMod"), "SUPER");
    assert_eq!(format_modifiers("$mainMod SHIFT"), "SUPER + SHIFT");
    assert_eq!(format_modifiers("control"), "CTRL");
    assert_eq!(format_modifiers("MOD4 MOD1"), "SUPER + ALT");
}

#[test]
fn test_format_modifiers_drops_separator_artifacts() {
    assert_eq!(format_modifiers("SUPER+"), "SUPER");
    assert_eq!(format_modifiers("_SHIFT_"), "SHIFT");
    assert_eq!(format_modifiers("+"), "");
}

#[test]
fn test_format_modifiers_empty() {
    assert_eq!(format_modifiers(""), "");
    assert_eq!(format_modifiers("   "), "");
}

#[test]
fn test_format_named_keys() {
    assert_eq!(format_key("return"), "Return");
    assert_eq!(format_key("RETURN"), "Return");
    assert_eq!(format_key("pageup"), "PageUp");
    assert_eq!(format_key("left"), "←");
    assert_eq!(format_key("Down"), "↓");
}

#[test]
fn test_format_mouse_keys() {
    assert_eq!(format_key("mouse:272"), "Mouse Left");
    assert_eq!(format_key("mouse:273"), "Mouse Right");
    assert_eq!(format_key("mouse:274"), "Mouse Middle");
}

#[test]
fn test_scroll_keys_use_default_capitalisation() {
    assert_eq!(format_key("mouse_up"), "Mouse_up");
    assert_eq!(format_key("mouse_down"), "Mouse_down");
}

#[test]
fn test_format_keycodes() {
    assert_eq!(format_key("code:10"), "10");
    assert_eq!(format_key("CODE:49"), "49");
}

#[test]
fn test_format_default_capitalisation() {
    assert_eq!(format_key("q"), "Q");
    assert_eq!(format_key("f1"), "F1");
    assert_eq!(format_key("XF86AudioMute"), "Xf86audiomute");
    assert_eq!(format_key("édition"), "Édition");
}
