//! Grammar-key fallback chains.
//!
//! A resolved [`LanguageTag`] rarely names its grammar directly: regional
//! variants fall back to their base language, and a couple of languages are
//! registered under historical keys. This module flattens a tag's ancestry
//! into the ordered candidate keys tried against the grammar registry.

use smol_str::SmolStr;

use super::tag::LanguageTag;

/// A normalized registry-lookup key for a keyword grammar.
pub type GrammarKey = SmolStr;

/// Encode a canonical tag name as a registry key.
///
/// Swedish grammars are registered under the historical key `se`. Inverse of
/// [`super::resolver::decode_tag_exceptions`] for this single pair.
pub fn registry_lang_name(name: &str) -> &str {
    match name {
        "sv" => "se",
        _ => name,
    }
}

/// Ordered candidate keys for `tag`, most specific first.
///
/// Each locale level contributes two candidates: the registry-encoded name,
/// then the same with hyphens stripped (for registries that key regional
/// variants without separators, `enUS` for `en-US`). The result has exactly
/// twice as many entries as the parent chain has levels. Duplicates are
/// kept; the first candidate present in the registry wins.
pub fn grammar_key_chain(tag: &LanguageTag) -> Vec<GrammarKey> {
    let mut keys = Vec::new();
    for level in tag.parent_chain() {
        let name = level.name();
        keys.push(GrammarKey::new(registry_lang_name(name)));
        let stripped: String = name.chars().filter(|&c| c != '-').collect();
        keys.push(GrammarKey::new(registry_lang_name(&stripped)));
    }
    keys
}
