//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Line classification tests
//! - Directive matcher tests
//! - Field splitting and formatting tests
//! - Full file parsing tests
//! - Search and grouping tests
//! - Type tests (BindVariant, Keybind, etc.)

#[cfg(test)]
mod fields_tests;
#[cfg(test)]
mod format_tests;
#[cfg(test)]
mod matcher_tests;
