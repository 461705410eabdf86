// Copyright (c) 2025 - Cowboy AI, Inc.
//! Namespace-Scoped Typed Identifiers
//!
//! Each identifier wraps the canonical string form of a TRN fixed to one
//! namespace: [`BrandId`] (`brand`), [`RailwayId`] (`railway`), [`ScaleId`]
//! (`scale`) and [`CatalogItemId`] (`catalog-item`). Two construction
//! paths exist:
//!
//! - the validating constructor `new`, used when rehydrating a stored
//!   canonical string; it rejects blank input, then requires a TRN in the
//!   type's namespace and stores the parsed TRN's own canonical form
//! - `from_name`, which slugifies a human-readable name and composes the
//!   TRN; it is infallible and idempotent
//!
//! Collaborators treat these as opaque validated strings: equality,
//! hashing and ordering are by the stored canonical value, and the only
//! ways to obtain one are the two constructors above.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::trn::Trn;
use crate::errors::{CatalogError, CatalogResult};

/// Validate a raw identifier value against the given namespace
///
/// Blank input is rejected before any parsing; everything else goes
/// through [`Trn::require_valid`] and comes back as the parsed TRN's
/// canonical string.
fn validated(kind: &str, namespace: &str, value: String) -> CatalogResult<String> {
    if value.trim().is_empty() {
        return Err(CatalogError::null_value(format!("{kind} ID")));
    }
    let trn = Trn::require_valid(&value, namespace, format!("Invalid {kind} ID value: {value}"))?;
    Ok(trn.to_string())
}

/// A **Brand ID** is a unique identifier for a brand.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BrandId(String);

impl BrandId {
    /// The TRN namespace for brand identifiers
    pub const NAMESPACE: &'static str = "brand";

    /// Create a brand ID from a canonical TRN string, validating it
    ///
    /// # Errors
    ///
    /// [`CatalogError::NullValue`] on blank input,
    /// [`CatalogError::InvalidFormat`] when the value is not a TRN in the
    /// `brand` namespace.
    pub fn new(value: impl Into<String>) -> CatalogResult<Self> {
        validated("brand", Self::NAMESPACE, value.into()).map(Self)
    }

    /// Create a brand ID from a human-readable brand name
    ///
    /// The name is slugified, so this never fails and calling it on an
    /// already-slugified name changes nothing.
    pub fn from_name(name: &str) -> Self {
        Self(Trn::compose(Self::NAMESPACE, name).to_string())
    }

    /// Get the canonical identifier value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A **Railway ID** is a unique identifier for a railway company.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RailwayId(String);

impl RailwayId {
    /// The TRN namespace for railway identifiers
    pub const NAMESPACE: &'static str = "railway";

    /// Create a railway ID from a canonical TRN string, validating it
    pub fn new(value: impl Into<String>) -> CatalogResult<Self> {
        validated("railway", Self::NAMESPACE, value.into()).map(Self)
    }

    /// Create a railway ID from a human-readable railway name
    pub fn from_name(name: &str) -> Self {
        Self(Trn::compose(Self::NAMESPACE, name).to_string())
    }

    /// Get the canonical identifier value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A **Scale ID** is a unique identifier for a modelling scale.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScaleId(String);

impl ScaleId {
    /// The TRN namespace for scale identifiers
    pub const NAMESPACE: &'static str = "scale";

    /// Create a scale ID from a canonical TRN string, validating it
    pub fn new(value: impl Into<String>) -> CatalogResult<Self> {
        validated("scale", Self::NAMESPACE, value.into()).map(Self)
    }

    /// Create a scale ID from a human-readable scale name
    pub fn from_name(name: &str) -> Self {
        Self(Trn::compose(Self::NAMESPACE, name).to_string())
    }

    /// Get the canonical identifier value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A **Catalog item ID** is a unique identifier for a catalog item.
///
/// Catalog items are scoped by brand, so the specific string has two
/// segments: the brand slug and the item number slug.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CatalogItemId(String);

impl CatalogItemId {
    /// The TRN namespace for catalog item identifiers
    pub const NAMESPACE: &'static str = "catalog-item";

    /// Create a catalog item ID from a canonical TRN string, validating it
    pub fn new(value: impl Into<String>) -> CatalogResult<Self> {
        validated("catalog item", Self::NAMESPACE, value.into()).map(Self)
    }

    /// Create a catalog item ID from a brand name and an item number
    ///
    /// Both parts are slugified independently:
    ///
    /// ```rust
    /// use rail_catalog::domain::CatalogItemId;
    ///
    /// let id = CatalogItemId::from_parts("Marklin", "123456");
    /// assert_eq!(id.to_string(), "trn:catalog-item:marklin:123456");
    /// ```
    pub fn from_parts(brand_name: &str, item_number: &str) -> Self {
        Self(Trn::compose_pair(Self::NAMESPACE, brand_name, item_number).to_string())
    }

    /// Get the canonical identifier value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! identifier_conversions {
    ($($id:ident),+) => {
        $(
            impl fmt::Display for $id {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl AsRef<str> for $id {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl FromStr for $id {
                type Err = CatalogError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::new(s)
                }
            }

            impl TryFrom<String> for $id {
                type Error = CatalogError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }

            impl From<$id> for String {
                fn from(id: $id) -> Self {
                    id.0
                }
            }
        )+
    };
}

identifier_conversions!(BrandId, RailwayId, ScaleId, CatalogItemId);
