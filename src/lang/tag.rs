//! Validated spoken-language tags.
//!
//! A [`LanguageTag`] is an immutable identifier like `en`, `en-US` or `sv`.
//! Tags form a finite ancestry: a regional variant parents to its base
//! language, a base language parents to the invariant root, and the root is
//! its own parent. The ancestry is derived structurally from the tag name,
//! so no locale database is consulted.

use smol_str::SmolStr;
use thiserror::Error;

/// A directive named a tag that cannot be interpreted as a language
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid language tag '{tag}': {reason}")]
pub struct InvalidLanguageTag {
    pub tag: String,
    pub reason: &'static str,
}

impl InvalidLanguageTag {
    fn new(tag: &str, reason: &'static str) -> Self {
        Self {
            tag: tag.to_string(),
            reason,
        }
    }
}

/// An immutable spoken-language/locale identifier.
///
/// The stored name is canonical: primary subtag lowercased, two-letter
/// region subtags uppercased, four-letter script subtags titlecased
/// (`en-us` stores as `en-US`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    name: SmolStr,
}

impl LanguageTag {
    /// Validate and canonicalize a tag name.
    ///
    /// Shape rules: a primary subtag of 2-8 ASCII letters, optionally
    /// followed by `-` separated subtags of 1-8 ASCII letters or digits.
    pub fn new(name: impl AsRef<str>) -> Result<Self, InvalidLanguageTag> {
        let raw = name.as_ref();
        if raw.is_empty() {
            return Err(InvalidLanguageTag::new(raw, "tag is empty"));
        }

        let mut canonical = String::with_capacity(raw.len());
        for (index, subtag) in raw.split('-').enumerate() {
            if index == 0 {
                if !(2..=8).contains(&subtag.len())
                    || !subtag.bytes().all(|b| b.is_ascii_alphabetic())
                {
                    return Err(InvalidLanguageTag::new(
                        raw,
                        "primary subtag must be 2-8 ASCII letters",
                    ));
                }
                canonical.extend(subtag.chars().map(|c| c.to_ascii_lowercase()));
            } else {
                if subtag.is_empty()
                    || subtag.len() > 8
                    || !subtag.bytes().all(|b| b.is_ascii_alphanumeric())
                {
                    return Err(InvalidLanguageTag::new(
                        raw,
                        "subtags must be 1-8 ASCII letters or digits",
                    ));
                }
                canonical.push('-');
                match subtag.len() {
                    // Two letters: region (en-US); four: script (sr-Latn)
                    2 => canonical.extend(subtag.chars().map(|c| c.to_ascii_uppercase())),
                    4 => {
                        let mut chars = subtag.chars();
                        if let Some(first) = chars.next() {
                            canonical.push(first.to_ascii_uppercase());
                        }
                        canonical.extend(chars.map(|c| c.to_ascii_lowercase()));
                    }
                    _ => canonical.extend(subtag.chars().map(|c| c.to_ascii_lowercase())),
                }
            }
        }

        Ok(Self {
            name: SmolStr::new(canonical),
        })
    }

    /// The invariant root: the empty tag every ancestry bottoms out at.
    pub fn root() -> Self {
        Self {
            name: SmolStr::default(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// Canonical tag name; empty for the root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The next more general tag: strip the last subtag, or step from a bare
    /// language to the root. The root is its own parent.
    pub fn parent(&self) -> LanguageTag {
        match self.name.rfind('-') {
            Some(idx) => Self {
                name: SmolStr::new(&self.name[..idx]),
            },
            None if !self.is_root() => Self::root(),
            None => self.clone(),
        }
    }

    /// The tag itself followed by each ancestor, ending at the root.
    ///
    /// Built by iterative ascent with an explicit fixed-point check, so the
    /// chain is always finite and has at least one element.
    pub fn parent_chain(&self) -> Vec<LanguageTag> {
        let mut chain = Vec::new();
        let mut current = self.clone();
        loop {
            chain.push(current.clone());
            let parent = current.parent();
            if parent == current {
                break;
            }
            current = parent;
        }
        chain
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
