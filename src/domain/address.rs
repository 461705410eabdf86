// Copyright (c) 2025 - Cowboy AI, Inc.
//! Postal Address and Contact Information Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CatalogError, CatalogResult};

/// ISO 3166-1 alpha-2 country code
///
/// Two ASCII letters, stored uppercase. Only the shape is validated; the
/// code is not checked against the assigned-codes registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, validating the alpha-2 shape
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidFormat`] when the value is not exactly two
    /// ASCII letters.
    pub fn new(code: &str) -> CatalogResult<Self> {
        if code.len() == 2 && code.chars().all(|ch| ch.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(CatalogError::invalid_format(format!(
                "Invalid country code: {code}"
            )))
        }
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CountryCode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

/// Postal address of a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// ISO country code
    pub country: CountryCode,

    /// City or town
    pub city: String,

    /// Street address
    pub street_address: String,

    /// Extended information for the address
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extended_address: Option<String>,

    /// Region code, for example the state or province
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub region: Option<String>,

    /// Postal code (ZIP code)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub postal_code: Option<String>,
}

impl Address {
    /// Create an address with the required fields
    ///
    /// # Errors
    ///
    /// [`CatalogError::NullValue`] when city or street address is blank.
    pub fn new(
        country: CountryCode,
        city: impl Into<String>,
        street_address: impl Into<String>,
    ) -> CatalogResult<Self> {
        let city = city.into();
        let street_address = street_address.into();
        if city.trim().is_empty() {
            return Err(CatalogError::null_value("city"));
        }
        if street_address.trim().is_empty() {
            return Err(CatalogError::null_value("street address"));
        }

        Ok(Self {
            country,
            city,
            street_address,
            extended_address: None,
            region: None,
            postal_code: None,
        })
    }

    /// Set the extended address
    pub fn with_extended_address(mut self, extended_address: impl Into<String>) -> Self {
        self.extended_address = Some(extended_address.into());
        self
    }

    /// Set the region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the postal code
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }
}

/// Contact information for a company
///
/// All fields are optional; values are stored as provided.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,

    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,

    /// Website URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_codes_are_stored_uppercase() {
        assert_eq!(CountryCode::new("de").unwrap().as_str(), "DE");
        assert_eq!(CountryCode::new("IT").unwrap().as_str(), "IT");
    }

    #[test]
    fn test_malformed_country_codes_are_rejected() {
        for code in ["", "D", "DEU", "D1", "??"] {
            let err = CountryCode::new(code).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid country code: {code}"));
        }
    }

    #[test]
    fn test_address_requires_city_and_street() {
        let country = CountryCode::new("DE").unwrap();
        assert!(Address::new(country.clone(), "", "Somestrasse 1").is_err());
        assert!(Address::new(country.clone(), "Berlin", "  ").is_err());

        let address = Address::new(country, "Berlin", "Somestrasse 1")
            .unwrap()
            .with_postal_code("10115");
        assert_eq!(address.postal_code.as_deref(), Some("10115"));
    }
}
