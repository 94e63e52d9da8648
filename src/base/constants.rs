//! Domain constants shared across the crate.

/// Language assumed for feature files that carry no language directive,
/// unless the embedder configures another default.
pub const DEFAULT_LANGUAGE: &str = "en";
