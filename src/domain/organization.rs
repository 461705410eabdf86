// Copyright (c) 2025 - Cowboy AI, Inc.
//! Organization Entity Type Taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CatalogError;

/// Legal form of a company appearing in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationEntityType {
    /// Civil law partnership
    CivilLawPartnership,
    /// Entrepreneurial company
    EntrepreneurialCompany,
    /// Global partnership
    GlobalPartnership,
    /// Limited company
    LimitedCompany,
    /// Limited partnership
    LimitedPartnership,
    /// Other / unclassified
    Other,
    /// Public institution
    PublicInstitution,
    /// Registered sole trader
    RegisteredSoleTrader,
    /// Sole trader
    SoleTrader,
    /// State owned enterprise
    StateOwnedEnterprise,
}

impl OrganizationEntityType {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CivilLawPartnership => "civil_law_partnership",
            Self::EntrepreneurialCompany => "entrepreneurial_company",
            Self::GlobalPartnership => "global_partnership",
            Self::LimitedCompany => "limited_company",
            Self::LimitedPartnership => "limited_partnership",
            Self::Other => "other",
            Self::PublicInstitution => "public_institution",
            Self::RegisteredSoleTrader => "registered_sole_trader",
            Self::SoleTrader => "sole_trader",
            Self::StateOwnedEnterprise => "state_owned_enterprise",
        }
    }
}

impl fmt::Display for OrganizationEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrganizationEntityType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "civil_law_partnership" => Ok(Self::CivilLawPartnership),
            "entrepreneurial_company" => Ok(Self::EntrepreneurialCompany),
            "global_partnership" => Ok(Self::GlobalPartnership),
            "limited_company" => Ok(Self::LimitedCompany),
            "limited_partnership" => Ok(Self::LimitedPartnership),
            "other" => Ok(Self::Other),
            "public_institution" => Ok(Self::PublicInstitution),
            "registered_sole_trader" => Ok(Self::RegisteredSoleTrader),
            "sole_trader" => Ok(Self::SoleTrader),
            "state_owned_enterprise" => Ok(Self::StateOwnedEnterprise),
            _ => Err(CatalogError::invalid_format(format!(
                "Unknown organization entity type: {s}"
            ))),
        }
    }
}
