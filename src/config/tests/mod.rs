//! Config module tests
//!
//! - Path expansion and source construction
//! - Strict reads and resilient loads against real files
//! - File watcher change detection
