//! Grammar registry mapping lookup keys to keyword tables.
//!
//! The registry is an explicit value rather than hidden process-global
//! state: [`GrammarRegistry::builtin`] is the shared read-only default, and
//! [`GrammarRegistry::from_tables`] builds custom registries for embedders
//! and tests. Registries are never mutated after construction, so sharing
//! one across threads needs no locking.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use smol_str::SmolStr;

use super::keywords::{BUILTIN_TABLES, KeywordTable};
use super::lexer::Lexer;
use super::listener::Listener;
use crate::lang::GrammarKey;

static BUILTIN: Lazy<GrammarRegistry> = Lazy::new(|| GrammarRegistry::from_tables(BUILTIN_TABLES));

/// Registry of keyword grammars, keyed by normalized grammar key.
#[derive(Debug, Clone)]
pub struct GrammarRegistry {
    tables: IndexMap<SmolStr, &'static KeywordTable>,
}

impl GrammarRegistry {
    /// The shared registry of built-in grammars.
    pub fn builtin() -> &'static GrammarRegistry {
        &BUILTIN
    }

    /// Build a registry from explicit tables; each is registered under its
    /// own `key`.
    pub fn from_tables(tables: &[&'static KeywordTable]) -> Self {
        let mut registry = Self {
            tables: IndexMap::with_capacity(tables.len()),
        };
        for &table in tables {
            registry.tables.insert(SmolStr::new_static(table.key), table);
        }
        registry
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tables.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&'static KeywordTable> {
        self.tables.get(key).copied()
    }

    /// The first candidate's table, scanning in order. `None` when no
    /// candidate is registered.
    pub fn select(&self, candidates: &[GrammarKey]) -> Option<&'static KeywordTable> {
        candidates.iter().find_map(|key| self.get(key))
    }

    /// A fresh lexer over the first registered candidate's grammar, bound to
    /// `listener`.
    pub fn lexer_for<'l, L: Listener>(
        &self,
        candidates: &[GrammarKey],
        listener: &'l mut L,
    ) -> Option<Lexer<'l, L>> {
        self.select(candidates)
            .map(|table| Lexer::new(table, listener))
    }

    /// Registered keys, in registration order.
    pub fn supported_keys(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(|key| key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::keywords;

    #[test]
    fn test_builtin_has_core_languages() {
        let registry = GrammarRegistry::builtin();
        for key in ["en", "se", "de", "fr", "es", "it", "pt", "nl", "da", "no"] {
            assert!(registry.contains(key), "missing grammar for '{key}'");
        }
    }

    #[test]
    fn test_builtin_has_no_canonical_swedish_key() {
        // Swedish lives under its historical key only.
        let registry = GrammarRegistry::builtin();
        assert!(registry.contains("se"));
        assert!(!registry.contains("sv"));
    }

    #[test]
    fn test_select_takes_first_match() {
        let registry = GrammarRegistry::builtin();
        let candidates = [
            GrammarKey::new("en-US"),
            GrammarKey::new("enUS"),
            GrammarKey::new("en"),
        ];
        let table = registry.select(&candidates).unwrap();
        assert_eq!(table.key, "en");
    }

    #[test]
    fn test_select_none_when_exhausted() {
        let registry = GrammarRegistry::builtin();
        let candidates = [GrammarKey::new("tlh"), GrammarKey::new("")];
        assert!(registry.select(&candidates).is_none());
    }

    #[test]
    fn test_custom_registry_order() {
        let registry = GrammarRegistry::from_tables(&[&keywords::DE, &keywords::EN]);
        let keys: Vec<&str> = registry.supported_keys().collect();
        assert_eq!(keys, ["de", "en"]);
    }
}
