//! Spoken-language resolution for feature files.
//!
//! Turns raw document text plus a configured default into a concrete
//! [`LanguageTag`], and turns that tag into the ordered grammar-key
//! candidates used to pick a keyword grammar:
//! - [`tag`] - validated, canonical language tags with a finite parent chain
//! - [`resolver`] - the first-line `# language:` directive
//! - [`fallback`] - grammar-key candidates, most specific first

pub mod fallback;
pub mod resolver;
pub mod tag;

pub use fallback::{GrammarKey, grammar_key_chain};
pub use resolver::resolve_language;
pub use tag::{InvalidLanguageTag, LanguageTag};
