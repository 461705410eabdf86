// Copyright (c) 2025 - Cowboy AI, Inc.
//! Railway Company Entity
//!
//! A railway company operates a network during a period of activity. The
//! period is modeled as a tagged value: active railways only carry the
//! date they started operating, inactive ones also carry the date they
//! stopped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::address::{Address, ContactInfo, CountryCode};
use crate::domain::ids::RailwayId;
use crate::domain::metadata::Metadata;
use crate::domain::organization::OrganizationEntityType;
use crate::domain::slug::Slug;
use crate::errors::{CatalogError, CatalogResult};

/// Activity status of a railway company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RailwayStatus {
    /// Currently operating
    Active,
    /// No longer operating
    Inactive,
}

impl RailwayStatus {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for RailwayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RailwayStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(CatalogError::invalid_format(format!(
                "Unknown railway status: {s}"
            ))),
        }
    }
}

/// Period of activity for a railway company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PeriodOfActivity {
    /// The railway is still operating
    Active {
        /// Date when the railway started its operation
        operating_since: NaiveDate,
    },
    /// The railway ended its operation
    Inactive {
        /// Date when the railway started its operation
        operating_since: NaiveDate,
        /// Date when the railway ended its operation
        operating_until: NaiveDate,
    },
}

impl PeriodOfActivity {
    /// Period of activity for an active railway
    pub fn active_railway(operating_since: NaiveDate) -> Self {
        Self::Active { operating_since }
    }

    /// Period of activity for a railway that ceased operation
    pub fn inactive_railway(operating_since: NaiveDate, operating_until: NaiveDate) -> Self {
        Self::Inactive {
            operating_since,
            operating_until,
        }
    }

    /// Get the activity status
    pub fn status(&self) -> RailwayStatus {
        match self {
            Self::Active { .. } => RailwayStatus::Active,
            Self::Inactive { .. } => RailwayStatus::Inactive,
        }
    }

    /// Date when the railway started its operation
    pub fn operating_since(&self) -> NaiveDate {
        match self {
            Self::Active { operating_since } | Self::Inactive { operating_since, .. } => {
                *operating_since
            }
        }
    }

    /// Date when the railway ended its operation, if it did
    pub fn operating_until(&self) -> Option<NaiveDate> {
        match self {
            Self::Active { .. } => None,
            Self::Inactive {
                operating_until, ..
            } => Some(*operating_until),
        }
    }
}

/// Railway company entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Railway {
    /// Railway identifier
    pub id: RailwayId,

    /// Name of the railway company
    pub name: String,

    /// Slug derived from the name
    pub slug: Slug,

    /// Abbreviated name (e.g. "FS", "DB")
    pub abbreviation: String,

    /// Country where the railway company operates
    pub country: CountryCode,

    /// Period of activity
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub period_of_activity: Option<PeriodOfActivity>,

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

impl Railway {
    /// Create a railway company
    ///
    /// # Errors
    ///
    /// [`CatalogError::NullValue`] when the name or the abbreviation is
    /// blank.
    pub fn new(
        id: RailwayId,
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        country: CountryCode,
        metadata: Metadata,
    ) -> CatalogResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::null_value("railway name"));
        }
        let abbreviation = abbreviation.into();
        if abbreviation.trim().is_empty() {
            return Err(CatalogError::null_value("railway abbreviation"));
        }
        let slug = Slug::new(&name);

        Ok(Self {
            id,
            name,
            slug,
            abbreviation,
            country,
            period_of_activity: None,
            address: None,
            organization_entity_type: None,
            contact_info: None,
            metadata,
        })
    }

    /// Set the period of activity
    pub fn with_period_of_activity(mut self, period: PeriodOfActivity) -> Self {
        self.period_of_activity = Some(period);
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

    fn date(value: &str) -> NaiveDate {
        value.parse().unwrap()
    }

    #[test]
    fn test_railway_creation() {
        let railway = Railway::new(
            RailwayId::from_name("Ferrovie dello Stato"),
            "Ferrovie dello Stato",
            "FS",
            CountryCode::new("IT").unwrap(),
            metadata(),
        )
        .unwrap();
        assert_eq!(railway.id.to_string(), "trn:railway:ferrovie-dello-stato");
        assert_eq!(railway.slug.as_str(), "ferrovie-dello-stato");
    }

    #[test]
    fn test_blank_name_and_abbreviation_are_rejected() {
        let country = CountryCode::new("IT").unwrap();
        assert!(Railway::new(
            RailwayId::from_name("x"),
            "",
            "FS",
            country.clone(),
            metadata()
        )
        .is_err());
        assert!(
            Railway::new(RailwayId::from_name("x"), "FS", " ", country, metadata()).is_err()
        );
    }

    #[test]
    fn test_active_period_of_activity() {
        let period = PeriodOfActivity::active_railway(date("1905-07-01"));
        assert_eq!(period.status(), RailwayStatus::Active);
        assert_eq!(period.operating_since(), date("1905-07-01"));
        assert_eq!(period.operating_until(), None);
    }

    #[test]
    fn test_inactive_period_of_activity() {
        let period = PeriodOfActivity::inactive_railway(date("1905-07-01"), date("1992-08-12"));
        assert_eq!(period.status(), RailwayStatus::Inactive);
        assert_eq!(period.operating_until(), Some(date("1992-08-12")));
    }
}
