// Copyright (c) 2025 - Cowboy AI, Inc.
//! Brand Entity
//!
//! A brand is a manufacturer or a company that produces model railways.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::address::{Address, ContactInfo};
use crate::domain::ids::BrandId;
use crate::domain::metadata::Metadata;
use crate::domain::organization::OrganizationEntityType;
use crate::domain::slug::Slug;
use crate::errors::{CatalogError, CatalogResult};

/// Kind of brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrandKind {
    /// Series production manufacturer
    Industrial,
    /// Small-series brass models maker
    BrassModels,
}

impl BrandKind {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Industrial => "industrial",
            Self::BrassModels => "brass_models",
        }
    }
}

impl fmt::Display for BrandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "industrial" => Ok(Self::Industrial),
            "brass_models" => Ok(Self::BrassModels),
            _ => Err(CatalogError::invalid_format(format!(
                "Unknown brand kind: {s}"
            ))),
        }
    }
}

/// Activity status of a brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrandStatus {
    /// The brand is still producing
    Active,
    /// The brand ceased operations
    OutOfBusiness,
}

impl BrandStatus {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::OutOfBusiness => "out_of_business",
        }
    }
}

impl fmt::Display for BrandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "out_of_business" => Ok(Self::OutOfBusiness),
            _ => Err(CatalogError::invalid_format(format!(
                "Unknown brand status: {s}"
            ))),
        }
    }
}

/// Brand entity
///
/// The slug is always derived from the name, so the two cannot drift
/// apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Brand identifier
    pub id: BrandId,

    /// Brand name
    pub name: String,

    /// Slug derived from the name
    pub slug: Slug,

    /// Kind of brand
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<BrandKind>,

    /// Activity status
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<BrandStatus>,

    /// Company address
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<Address>,

    /// Legal form of the company
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub organization_entity_type: Option<OrganizationEntityType>,

    /// Contact information
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contact_info: Option<ContactInfo>,

    /// Resource metadata
    pub metadata: Metadata,
}

impl Brand {
    /// Create a brand
    ///
    /// # Errors
    ///
    /// [`CatalogError::NullValue`] when the name is blank.
    pub fn new(id: BrandId, name: impl Into<String>, metadata: Metadata) -> CatalogResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::null_value("brand name"));
        }
        let slug = Slug::new(&name);

        Ok(Self {
            id,
            name,
            slug,
            kind: None,
            status: None,
            address: None,
            organization_entity_type: None,
            contact_info: None,
            metadata,
        })
    }

    /// Set the brand kind
    pub fn with_kind(mut self, kind: BrandKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the activity status
    pub fn with_status(mut self, status: BrandStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the company address
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Set the legal form
    pub fn with_organization_entity_type(mut self, entity_type: OrganizationEntityType) -> Self {
        self.organization_entity_type = Some(entity_type);
        self
    }

    /// Set the contact information
    pub fn with_contact_info(mut self, contact_info: ContactInfo) -> Self {
        self.contact_info = Some(contact_info);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn metadata() -> Metadata {
        let now: DateTime<Utc> = "2024-05-22T17:20:38Z".parse().unwrap();
        Metadata::created_at(now)
    }

    #[test]
    fn test_brand_derives_its_slug_from_the_name() {
        let brand = Brand::new(BrandId::from_name("ACME"), "ACME", metadata()).unwrap();
        assert_eq!(brand.slug.as_str(), "acme");
        assert_eq!(brand.id.to_string(), "trn:brand:acme");
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let err = Brand::new(BrandId::from_name("x"), "  ", metadata()).unwrap_err();
        assert_eq!(err.to_string(), "The brand name value cannot be blank");
    }

    #[test]
    fn test_optional_fields_are_set_fluently() {
        let brand = Brand::new(BrandId::from_name("Märklin"), "Märklin", metadata())
            .unwrap()
            .with_kind(BrandKind::Industrial)
            .with_status(BrandStatus::Active);
        assert_eq!(brand.kind, Some(BrandKind::Industrial));
        assert_eq!(brand.status, Some(BrandStatus::Active));
        assert_eq!(brand.slug.as_str(), "maerklin");
    }
}
