//! Resolution of the in-document language directive.
//!
//! A feature file may open with `# language: <tag>` on its first line to
//! select the spoken language its keywords are written in. Absent the
//! directive, the configured default applies.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tag::{InvalidLanguageTag, LanguageTag};

/// Lazy-compiled pattern for the first-line language directive.
///
/// Anchored at the start of the document with horizontal whitespace only
/// before the `#`, so a directive on any later line (or after a leading
/// blank line) never matches. The keyword is case-insensitive; the tag is a
/// run of word characters and hyphens, terminated by the end of the line.
static LANGUAGE_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[ \t]*#[ \t]*language:[ \t]*([\w-]+)[ \t]*\r?\n").unwrap());

/// Resolve the language a document is written in.
///
/// Returns the directive's tag (after [`decode_tag_exceptions`] and
/// validation) when the first line carries one, or `default` unchanged
/// otherwise. A directive naming a malformed tag is an error, never silently
/// defaulted.
pub fn resolve_language(
    content: &str,
    default: &LanguageTag,
) -> Result<LanguageTag, InvalidLanguageTag> {
    match LANGUAGE_DIRECTIVE
        .captures(content)
        .and_then(|captures| captures.get(1))
    {
        Some(tag) => LanguageTag::new(decode_tag_exceptions(tag.as_str())),
        None => Ok(default.clone()),
    }
}

/// Decode legacy directive spellings to canonical tags.
///
/// Swedish feature files have historically written `se` (the registry key)
/// in the directive; the canonical tag is `sv`. Inverse of
/// [`super::fallback::registry_lang_name`] for this single pair.
pub fn decode_tag_exceptions(name: &str) -> &str {
    match name {
        "se" => "sv",
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default() -> LanguageTag {
        LanguageTag::new("en").unwrap()
    }

    #[test]
    fn test_directive_on_first_line() {
        let resolved = resolve_language("# language: de\nFunktionalität: X\n", &default());
        assert_eq!(resolved.unwrap().name(), "de");
    }

    #[test]
    fn test_directive_whitespace_and_case() {
        let resolved = resolve_language("  #  LANGUAGE:  fr  \nFonctionnalité: X\n", &default());
        assert_eq!(resolved.unwrap().name(), "fr");
    }

    #[test]
    fn test_no_directive_uses_default() {
        let resolved = resolve_language("Feature: X\n", &default());
        assert_eq!(resolved.unwrap().name(), "en");
    }

    #[test]
    fn test_directive_on_second_line_ignored() {
        let resolved = resolve_language("Feature: X\n# language: de\n", &default());
        assert_eq!(resolved.unwrap().name(), "en");
    }

    #[test]
    fn test_leading_blank_line_defeats_directive() {
        let resolved = resolve_language("\n# language: de\nFeature: X\n", &default());
        assert_eq!(resolved.unwrap().name(), "en");
    }

    #[test]
    fn test_legacy_swedish_spelling() {
        let resolved = resolve_language("# language: se\nEgenskap: X\n", &default());
        assert_eq!(resolved.unwrap().name(), "sv");
    }

    #[test]
    fn test_malformed_tag_is_an_error() {
        let resolved = resolve_language("# language: 123\n", &default());
        assert!(resolved.is_err());
    }

    #[test]
    fn test_canonicalizes_directive_tag() {
        let resolved = resolve_language("# language: pt-br\nFuncionalidade: X\n", &default());
        assert_eq!(resolved.unwrap().name(), "pt-BR");
    }
}
