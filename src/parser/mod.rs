//! Keyword grammars and the line lexer.
//!
//! Feature files are line-oriented: every significant line is a header, a
//! step, a tag line, a table row, a doc-string fence or a comment. This
//! module provides:
//! - [`keywords`] - per-language keyword tables (`const`, registry-friendly)
//! - [`registry`] - the grammar registry mapping keys to keyword tables
//! - [`lexer`] - the single-pass line scanner
//! - [`listener`] - the event interface the scanner reports through

pub mod keywords;
pub mod lexer;
pub mod listener;
pub mod registry;

pub use keywords::KeywordTable;
pub use lexer::Lexer;
pub use listener::{Diagnostic, Listener, StepKind};
pub use registry::GrammarRegistry;
