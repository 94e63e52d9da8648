//! # featlang-base
//!
//! Core library for feature-file parsing: spoken-language resolution,
//! grammar dispatch, and document assembly.
//!
//! A feature file optionally opens with a `# language: <tag>` directive
//! selecting the spoken language its keywords are written in. This crate
//! resolves that tag (or a configured default), walks the tag's fallback
//! chain to pick a registered keyword grammar, scans the document in a
//! single pass, and returns the assembled [`Feature`] with language and
//! source provenance stamped - or a [`ParserError`] describing exactly why
//! the parse failed.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! syntax  → document model, feature builder, parse orchestration
//!   ↓
//! parser  → keyword grammars, grammar registry, line lexer
//!   ↓
//! lang    → language tags, directive resolution, fallback chains
//!   ↓
//! base    → primitives (Position, domain constants)
//! ```
//!
//! ## Example
//!
//! ```
//! use featlang::{FeatureParser, LanguageTag};
//!
//! let parser = FeatureParser::new(LanguageTag::new("en")?);
//! let feature = parser.parse("# language: se\nEgenskap: Konto\nScenario: Inloggning\n  Givet en användare\n")
//!     .expect("valid feature file");
//! assert_eq!(feature.language, "sv");
//! # Ok::<(), featlang::InvalidLanguageTag>(())
//! ```

/// Foundation types: source positions, domain constants
pub mod base;

/// Language resolution: tags, the first-line directive, fallback chains
pub mod lang;

/// Keyword grammars, the grammar registry and the line lexer
pub mod parser;

/// Document model, feature builder and parse orchestration
pub mod syntax;

// Re-export the surface most embedders need
pub use base::Position;
pub use lang::{GrammarKey, InvalidLanguageTag, LanguageTag};
pub use parser::{Diagnostic, GrammarRegistry, KeywordTable, Listener, StepKind};
pub use syntax::{
    Background, Examples, Feature, FeatureParser, ParserError, Scenario, ScenarioKind, Step, Table,
    TableRow, Tag,
};
