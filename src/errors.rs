// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for catalog domain operations

use thiserror::Error;

/// Errors that can occur while validating catalog values
///
/// The taxonomy is deliberately small: a required value was missing, or a
/// value failed to match its expected format. Both are deterministic and
/// reproducible from identical input; there is no transient failure mode
/// anywhere in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A required value was missing or blank
    ///
    /// Raised before any parsing is attempted.
    #[error("The {0} value cannot be blank")]
    NullValue(String),

    /// A value does not match its expected format
    ///
    /// The message carries the offending value verbatim.
    #[error("{0}")]
    InvalidFormat(String),
}

impl CatalogError {
    /// Build a [`CatalogError::NullValue`] for the named value
    pub fn null_value(what: impl Into<String>) -> Self {
        Self::NullValue(what.into())
    }

    /// Build a [`CatalogError::InvalidFormat`] with the given message
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
