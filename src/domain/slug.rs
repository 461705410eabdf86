// Copyright (c) 2025 - Cowboy AI, Inc.
//! Slug Value Object with Canonical Normalization
//!
//! A slug is the canonical, URL-safe form of a human-readable name:
//! lowercase ASCII letters and digits separated by single hyphens. Slugs are
//! the building blocks for TRN segments, so every identifier derived from a
//! display name goes through [`slugify`].
//!
//! Normalization is total: it never fails, and running it twice yields the
//! same result as running it once.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in transliteration table, applied after lowercasing
///
/// German umlauts expand to their two-letter spellings; the remaining
/// entries fold common accented Latin letters onto their ASCII base.
/// Characters not covered here and outside `[a-z0-9]` are treated as
/// separators.
const TRANSLITERATIONS: &[(char, &str)] = &[
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('ß', "ss"),
    ('à', "a"),
    ('á', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('å', "a"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ì', "i"),
    ('í', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ò', "o"),
    ('ó', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ø', "o"),
    ('ù', "u"),
    ('ú', "u"),
    ('û', "u"),
    ('ç', "c"),
    ('ñ', "n"),
];

/// Normalize a string into its slug form using the built-in replacements
///
/// Lowercases the input, transliterates known accented characters, replaces
/// every run of remaining non-`[a-z0-9]` characters with a single hyphen and
/// strips leading/trailing hyphens. Empty or all-punctuation input yields an
/// empty string; this is accepted behavior, not an error.
///
/// # Examples
///
/// ```rust
/// use rail_catalog::domain::slugify;
///
/// assert_eq!(slugify("hello World"), "hello-world");
/// assert_eq!(slugify("Märklìn Modellbahnen"), "maerklin-modellbahnen");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(input: &str) -> String {
    slugify_with(input, |ch| {
        TRANSLITERATIONS
            .iter()
            .find(|(from, _)| *from == ch)
            .map(|(_, to)| *to)
    })
}

fn slugify_with<'a>(input: &str, replacement: impl Fn(char) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_separator = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        let mapped = replacement(ch);
        if mapped.is_none() && !ch.is_ascii_alphanumeric() {
            pending_separator = true;
            continue;
        }

        if pending_separator && !out.is_empty() {
            out.push('-');
        }
        pending_separator = false;

        match mapped {
            Some(to) => out.push_str(to),
            None => out.push(ch),
        }
    }

    out
}

/// Configurable slugifier
///
/// Carries the built-in transliteration table plus any custom replacements
/// registered by the caller. Custom entries win over the built-in table.
///
/// # Examples
///
/// ```rust
/// use rail_catalog::domain::Slugifier;
///
/// let slugifier = Slugifier::new().with_replacement('&', "and");
/// assert_eq!(slugifier.slugify("Track & Field"), "track-and-field");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Slugifier {
    custom: Vec<(char, String)>,
}

impl Slugifier {
    /// Create a slugifier with the built-in transliteration table only
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an additional character replacement
    ///
    /// The replacement string is inserted verbatim, so it should itself be
    /// within the slug alphabet.
    pub fn with_replacement(mut self, from: char, to: impl Into<String>) -> Self {
        let to = to.into();
        if let Some(entry) = self.custom.iter_mut().find(|(ch, _)| *ch == from) {
            entry.1 = to;
        } else {
            self.custom.push((from, to));
        }
        self
    }

    /// Normalize a string into its slug form
    pub fn slugify(&self, input: &str) -> String {
        slugify_with(input, |ch| {
            self.custom
                .iter()
                .find(|(from, _)| *from == ch)
                .map(|(_, to)| to.as_str())
                .or_else(|| {
                    TRANSLITERATIONS
                        .iter()
                        .find(|(from, _)| *from == ch)
                        .map(|(_, to)| *to)
                })
        })
    }
}

/// Slug value object
///
/// Holds the normalized form of a name. Construction always normalizes, so
/// a `Slug` can never contain anything outside the slug grammar; equality
/// and ordering are by the normalized string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Slug(String);

impl Slug {
    /// Create a slug from any string, normalizing it
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(slugify(value.as_ref()))
    }

    /// Get the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether normalization produced an empty slug
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Slug {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Slug {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_strings() {
        assert_eq!(Slug::new("hello World").as_str(), "hello-world");
        assert_eq!(Slug::new("Brand 1").as_str(), "brand-1");
        assert_eq!(Slug::new("ACME  &  Co.").as_str(), "acme-co");
    }

    #[test]
    fn test_slug_with_custom_replacements() {
        let slug = Slug::new("Märklìn Modellbahnen");
        assert_eq!(slug.as_str(), "maerklin-modellbahnen");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(slugify("a -- b__c"), "a-b-c");
        assert_eq!(slugify("--leading and trailing--"), "leading-and-trailing");
    }

    #[test]
    fn test_degenerate_input_yields_empty_slug() {
        assert!(Slug::new("").is_empty());
        assert!(Slug::new("!!!").is_empty());
        assert!(Slug::new("   ").is_empty());
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for input in ["hello World", "Märklìn Modellbahnen", "a--b", "123"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_registered_replacement_wins() {
        let slugifier = Slugifier::new().with_replacement('ä', "a");
        assert_eq!(slugifier.slugify("Märklin"), "marklin");
    }

    #[test]
    fn test_display() {
        assert_eq!(Slug::new("hello World").to_string(), "hello-world");
    }
}
