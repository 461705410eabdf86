// Copyright (c) 2025 - Cowboy AI, Inc.
//! Train Resource Name (TRN) Value Object
//!
//! A **Train Resource Name** is a URN-style structured identifier used to
//! name every catalog entity:
//!
//! ```text
//! trn:<namespace-identifier>:<segment>[:<segment>...]
//! ```
//!
//! TRNs are persistent identifiers assigned within defined namespaces; they
//! are not locators and need not be resolvable. The textual form above is
//! what appears in response bodies and storage records, so parsing and
//! formatting must round-trip byte-for-byte.
//!
//! # Grammar
//!
//! - the scheme token `trn` is matched case-insensitively
//! - the namespace identifier matches `[A-Za-z0-9_-]+`
//! - the namespace-specific string is one or more segments matching the
//!   same alphabet, joined by `:`
//!
//! Namespace and segment tokens are matched case-sensitively: the grammar
//! admits uppercase letters, but producers are expected to emit lowercase
//! via the slugifier. The TRN itself does not re-normalize case.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::slug::slugify;
use crate::errors::{CatalogError, CatalogResult};

/// The TRN scheme token
const SCHEME: &str = "trn";

/// Train Resource Name
///
/// Immutable pair of a namespace identifier and a namespace-specific
/// string. Created either by parsing a canonical string (validated) or by
/// composition from raw name parts (always valid, since every part is
/// slugified first).
///
/// # Examples
///
/// ```rust
/// use rail_catalog::domain::Trn;
///
/// let trn = Trn::parse("trn:brand:maerklin").unwrap();
/// assert_eq!(trn.namespace_identifier(), "brand");
/// assert_eq!(trn.namespace_specific_string(), "maerklin");
/// assert_eq!(trn.to_string(), "trn:brand:maerklin");
///
/// let composed = Trn::compose_pair("catalog-item", "Märklin", "123456");
/// assert_eq!(composed.to_string(), "trn:catalog-item:maerklin:123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Trn {
    namespace_identifier: String,
    namespace_specific_string: String,
}

impl Trn {
    /// Compose a TRN from a namespace and one raw name part
    ///
    /// The raw part is slugified, so the result is always within the
    /// grammar. A blank or all-punctuation part slugifies to an empty
    /// segment; the composition stays total and accepts it.
    pub fn compose(namespace: impl Into<String>, raw_part: &str) -> Self {
        Self {
            namespace_identifier: namespace.into(),
            namespace_specific_string: slugify(raw_part),
        }
    }

    /// Compose a TRN from a namespace and two raw name parts
    ///
    /// Each part is slugified independently before joining with `:`.
    pub fn compose_pair(namespace: impl Into<String>, first: &str, second: &str) -> Self {
        Self {
            namespace_identifier: namespace.into(),
            namespace_specific_string: format!("{}:{}", slugify(first), slugify(second)),
        }
    }

    /// Try to parse the given string as a TRN
    ///
    /// Total function: returns `None` on any grammar violation, including
    /// fewer than three colon-separated tokens.
    pub fn try_parse(value: &str) -> Option<Self> {
        let tokens: Vec<&str> = value.split(':').collect();

        let (scheme, rest) = tokens.split_first()?;
        if !scheme.eq_ignore_ascii_case(SCHEME) {
            return None;
        }

        let (namespace, segments) = rest.split_first()?;
        if !is_grammar_token(namespace) {
            return None;
        }

        if segments.is_empty() || !segments.iter().all(|segment| is_grammar_token(segment)) {
            return None;
        }

        Some(Self {
            namespace_identifier: (*namespace).to_string(),
            namespace_specific_string: segments.join(":"),
        })
    }

    /// Parse the given string as a TRN
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidFormat`] when the value does not match the
    /// grammar; the message carries the offending value verbatim.
    pub fn parse(value: &str) -> CatalogResult<Self> {
        Self::try_parse(value)
            .ok_or_else(|| CatalogError::invalid_format(format!("Invalid TRN value: {value}")))
    }

    /// Check if the given string is a valid TRN
    pub fn is_valid(value: &str) -> bool {
        Self::try_parse(value).is_some()
    }

    /// Parse and additionally enforce the expected namespace identifier
    ///
    /// The namespace comparison is exact (case-sensitive).
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidFormat`] with the supplied message when the
    /// value does not parse, or parses into a different namespace.
    pub fn require_valid(
        value: &str,
        expected_namespace: &str,
        message: impl Into<String>,
    ) -> CatalogResult<Self> {
        let message = message.into();
        let trn =
            Self::try_parse(value).ok_or_else(|| CatalogError::InvalidFormat(message.clone()))?;
        if trn.namespace_identifier != expected_namespace {
            return Err(CatalogError::InvalidFormat(message));
        }
        Ok(trn)
    }

    /// Get the namespace identifier
    pub fn namespace_identifier(&self) -> &str {
        &self.namespace_identifier
    }

    /// Get the namespace-specific string
    pub fn namespace_specific_string(&self) -> &str {
        &self.namespace_specific_string
    }

    /// Get the namespace-specific string split back into its segments
    pub fn namespace_specific_strings(&self) -> Vec<&str> {
        self.namespace_specific_string.split(':').collect()
    }
}

/// Check a namespace or segment token against `[A-Za-z0-9_-]+`
fn is_grammar_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}

impl fmt::Display for Trn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{SCHEME}:{}:{}",
            self.namespace_identifier, self.namespace_specific_string
        )
    }
}

impl FromStr for Trn {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Trn {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Trn {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Trn> for String {
    fn from(trn: Trn) -> Self {
        trn.to_string()
    }
}
