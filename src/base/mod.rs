//! Foundation types for the featlang crates.
//!
//! This module provides the primitives used throughout the parser:
//! - [`Position`] - Line/column source positions for diagnostics and nodes
//! - Domain constants (default language)
//!
//! This module has NO dependencies on other featlang modules.

pub mod constants;
mod position;

pub use position::Position;
