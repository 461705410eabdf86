// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog Item Entity
//!
//! An item in a manufacturer's catalog: a specific product identified by
//! brand and item number, classified by scale, epoch, category and power
//! method.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::epoch::Epoch;
use crate::domain::ids::{BrandId, CatalogItemId, ScaleId};
use crate::domain::metadata::Metadata;
use crate::errors::{CatalogError, CatalogResult};

/// Item number assigned by the manufacturer
///
/// Opaque, non-blank string; stored as provided.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemNumber(String);

impl ItemNumber {
    /// Create an item number
    ///
    /// # Errors
    ///
    /// [`CatalogError::NullValue`] when the value is blank.
    pub fn new(value: impl Into<String>) -> CatalogResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CatalogError::null_value("item number"));
        }
        Ok(Self(value))
    }

    /// Get the item number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ItemNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemNumber {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemNumber {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemNumber> for String {
    fn from(item_number: ItemNumber) -> Self {
        item_number.0
    }
}

/// Category of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogItemCategory {
    /// Single locomotives
    Locomotives,
    /// Complete train sets
    TrainSets,
    /// Starter sets with track and controller
    StarterSets,
    /// Freight cars
    FreightCars,
    /// Passenger cars
    PassengerCars,
    /// Electric multiple units
    ElectricMultipleUnits,
    /// Railcars
    Railcars,
}

impl CatalogItemCategory {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locomotives => "locomotives",
            Self::TrainSets => "train_sets",
            Self::StarterSets => "starter_sets",
            Self::FreightCars => "freight_cars",
            Self::PassengerCars => "passenger_cars",
            Self::ElectricMultipleUnits => "electric_multiple_units",
            Self::Railcars => "railcars",
        }
    }
}

impl fmt::Display for CatalogItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogItemCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "locomotives" => Ok(Self::Locomotives),
            "train_sets" => Ok(Self::TrainSets),
            "starter_sets" => Ok(Self::StarterSets),
            "freight_cars" => Ok(Self::FreightCars),
            "passenger_cars" => Ok(Self::PassengerCars),
            "electric_multiple_units" => Ok(Self::ElectricMultipleUnits),
            "railcars" => Ok(Self::Railcars),
            _ => Err(CatalogError::invalid_format(format!(
                "Unknown catalog item category: {s}"
            ))),
        }
    }
}

/// Power method of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerMethod {
    /// Alternating current (three-rail)
    Ac,
    /// Direct current (two-rail)
    Dc,
}

impl PowerMethod {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ac => "ac",
            Self::Dc => "dc",
        }
    }
}

impl fmt::Display for PowerMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerMethod {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ac" => Ok(Self::Ac),
            "dc" => Ok(Self::Dc),
            _ => Err(CatalogError::invalid_format(format!(
                "Unknown power method: {s}"
            ))),
        }
    }
}

/// Catalog item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Catalog item identifier
    pub id: CatalogItemId,

    /// Brand producing the item
    pub brand_id: BrandId,

    /// Scale of the item
    pub scale_id: ScaleId,

    /// Manufacturer item number
    pub item_number: ItemNumber,

    /// Epoch the item belongs to
    pub epoch: Epoch,

    /// Item category
    pub category: CatalogItemCategory,

    /// Power method
    pub power_method: PowerMethod,

    /// Number of rolling stock pieces in the item, when more than one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<u32>,

    /// Resource metadata
    pub metadata: Metadata,
}

impl CatalogItem {
    /// Create a catalog item
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CatalogItemId,
        brand_id: BrandId,
        scale_id: ScaleId,
        item_number: ItemNumber,
        epoch: Epoch,
        category: CatalogItemCategory,
        power_method: PowerMethod,
        metadata: Metadata,
    ) -> Self {
        Self {
            id,
            brand_id,
            scale_id,
            item_number,
            epoch,
            category,
            power_method,
            count: None,
            metadata,
        }
    }

    /// Set the rolling stock count
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
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

    fn catalog_item() -> CatalogItem {
        CatalogItem::new(
            CatalogItemId::from_parts("Märklin", "29000"),
            BrandId::from_name("Märklin"),
            ScaleId::from_name("H0"),
            ItemNumber::new("29000").unwrap(),
            Epoch::parse("III").unwrap(),
            CatalogItemCategory::StarterSets,
            PowerMethod::Ac,
            metadata(),
        )
    }

    #[test]
    fn test_item_id_is_scoped_by_brand() {
        let item = catalog_item();
        assert_eq!(item.id.to_string(), "trn:catalog-item:maerklin:29000");
        assert_eq!(item.brand_id.to_string(), "trn:brand:maerklin");
    }

    #[test]
    fn test_blank_item_numbers_are_rejected() {
        let err = ItemNumber::new("  ").unwrap_err();
        assert_eq!(err.to_string(), "The item number value cannot be blank");
    }

    #[test]
    fn test_count_is_optional() {
        let item = catalog_item();
        assert_eq!(item.count, None);
        assert_eq!(item.with_count(3).count, Some(3));
    }

    #[test]
    fn test_serialization_uses_canonical_identifier_strings() {
        let json = serde_json::to_value(catalog_item()).unwrap();
        assert_eq!(json["id"], "trn:catalog-item:maerklin:29000");
        assert_eq!(json["brand_id"], "trn:brand:maerklin");
        assert_eq!(json["scale_id"], "trn:scale:h0");
        assert_eq!(json["epoch"], "III");
        assert_eq!(json["category"], "starter_sets");
        assert_eq!(json["power_method"], "ac");
    }
}
