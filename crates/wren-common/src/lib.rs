//! Common utilities for the Wren render tree.
//!
//! This crate provides shared infrastructure used by all Wren crates:
//! - **Warning System** - deduplicated colored terminal output for unsupported input

pub mod warning;

pub use warning::warn_once;
