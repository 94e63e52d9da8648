//! The parse orchestrator.
//!
//! [`FeatureParser`] runs the whole pipeline for one document: resolve the
//! spoken language, pick a grammar through the fallback chain, scan the text
//! once, and either hand back the assembled [`Feature`] with language and
//! source provenance stamped, or fail with a [`ParserError`]. No partial
//! document ever escapes a failed parse.

use std::path::Path;

use thiserror::Error;

use super::ast::Feature;
use super::builder::FeatureBuilder;
use crate::base::constants::DEFAULT_LANGUAGE;
use crate::lang::{InvalidLanguageTag, LanguageTag, grammar_key_chain, resolve_language};
use crate::parser::{Diagnostic, GrammarRegistry};

/// Why a parse failed.
///
/// `SyntaxErrors` and `EmptyResult` share the generic "invalid feature file"
/// message; [`ParserError::diagnostics`] tells them apart without matching.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The in-document directive named a malformed language tag.
    #[error(transparent)]
    InvalidLanguageTag(#[from] InvalidLanguageTag),

    /// No grammar is registered for any candidate in the resolved tag's
    /// fallback chain.
    #[error("unsupported feature-file language '{language}'")]
    UnsupportedLanguage { language: String },

    /// Scanning reported one or more diagnostics.
    #[error("invalid feature file")]
    SyntaxErrors { diagnostics: Vec<Diagnostic> },

    /// Scanning was clean but produced no document.
    #[error("invalid feature file")]
    EmptyResult,

    /// Reading the file or normalizing the source path failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParserError {
    /// The collected diagnostics; empty for every kind but `SyntaxErrors`.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::SyntaxErrors { diagnostics } => diagnostics,
            _ => &[],
        }
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics().is_empty()
    }
}

/// Parser for feature files in any registered spoken language.
///
/// Holds the configured default language (immutable after construction) and
/// a grammar registry; every call constructs its own lexer and builder, so a
/// shared parser is safe to use from concurrent callers.
pub struct FeatureParser {
    default_language: LanguageTag,
    registry: GrammarRegistry,
}

impl FeatureParser {
    /// A parser over the built-in grammars.
    pub fn new(default_language: LanguageTag) -> Self {
        Self::with_registry(default_language, GrammarRegistry::builtin().clone())
    }

    /// A parser over an explicit registry. The default language is expected
    /// to be supported by it.
    pub fn with_registry(default_language: LanguageTag, registry: GrammarRegistry) -> Self {
        Self {
            default_language,
            registry,
        }
    }

    pub fn default_language(&self) -> &LanguageTag {
        &self.default_language
    }

    /// Parse a document.
    ///
    /// The text gets a trailing newline appended unconditionally, so the
    /// directive pattern can terminate and the final line scans complete.
    pub fn parse(&self, text: &str) -> Result<Feature, ParserError> {
        let content = format!("{text}\n");

        let language = resolve_language(&content, &self.default_language)?;
        let candidates = grammar_key_chain(&language);

        let mut builder = FeatureBuilder::new();
        let Some(lexer) = self.registry.lexer_for(&candidates, &mut builder) else {
            return Err(ParserError::UnsupportedLanguage {
                language: language.name().to_string(),
            });
        };
        tracing::debug!(
            "scanning feature file as '{}' with grammar '{}'",
            language.name(),
            lexer.keywords().key
        );
        lexer.scan(&content);

        let (feature, diagnostics) = builder.into_result();
        if !diagnostics.is_empty() {
            return Err(ParserError::SyntaxErrors { diagnostics });
        }
        let mut feature = feature.ok_or(ParserError::EmptyResult)?;
        feature.language = language.name().to_string();
        Ok(feature)
    }

    /// Parse a document and stamp the absolute, normalized form of `source`
    /// onto it.
    pub fn parse_with_source(
        &self,
        text: &str,
        source: impl AsRef<Path>,
    ) -> Result<Feature, ParserError> {
        let mut feature = self.parse(text)?;
        feature.source_file = Some(std::path::absolute(source)?);
        Ok(feature)
    }

    /// Read a feature file from disk and parse it.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Feature, ParserError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        self.parse_with_source(&text, path)
    }
}

impl Default for FeatureParser {
    fn default() -> Self {
        Self::new(LanguageTag::new(DEFAULT_LANGUAGE).expect("default language tag is well-formed"))
    }
}
