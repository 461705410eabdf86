// Copyright (c) 2025 - Cowboy AI, Inc.
//! Modelling Scale Entity
//!
//! A scale is the ratio between the size of a model and the size of the
//! real object, e.g. H0 is 1:87.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::ids::ScaleId;
use crate::domain::metadata::Metadata;
use crate::domain::slug::Slug;
use crate::errors::{CatalogError, CatalogResult};

/// Track gauge bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackGauge {
    /// Wider than standard gauge
    Broad,
    /// Between narrow and standard
    Medium,
    /// The smallest modelled gauges
    Minimum,
    /// Narrower than standard gauge
    Narrow,
    /// Standard gauge (1435 mm prototype)
    Standard,
}

impl TrackGauge {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Broad => "broad",
            Self::Medium => "medium",
            Self::Minimum => "minimum",
            Self::Narrow => "narrow",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for TrackGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackGauge {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "broad" => Ok(Self::Broad),
            "medium" => Ok(Self::Medium),
            "minimum" => Ok(Self::Minimum),
            "narrow" => Ok(Self::Narrow),
            "standard" => Ok(Self::Standard),
            _ => Err(CatalogError::invalid_format(format!(
                "Unknown track gauge: {s}"
            ))),
        }
    }
}

/// Modelling scale entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    /// Scale identifier
    pub id: ScaleId,

    /// Scale name (e.g. "H0", "N")
    pub name: String,

    /// Slug derived from the name
    pub slug: Slug,

    /// Ratio denominator: a value of 87.0 means 1:87
    pub ratio: f64,

    /// Track gauge bracket
    pub track_gauge: TrackGauge,

    /// Resource metadata
    pub metadata: Metadata,
}

impl Scale {
    /// Create a scale
    ///
    /// # Errors
    ///
    /// [`CatalogError::NullValue`] when the name is blank,
    /// [`CatalogError::InvalidFormat`] when the ratio is not a positive
    /// finite number.
    pub fn new(
        id: ScaleId,
        name: impl Into<String>,
        ratio: f64,
        track_gauge: TrackGauge,
        metadata: Metadata,
    ) -> CatalogResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::null_value("scale name"));
        }
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(CatalogError::invalid_format(format!(
                "Invalid scale ratio: {ratio}"
            )));
        }
        let slug = Slug::new(&name);

        Ok(Self {
            id,
            name,
            slug,
            ratio,
            track_gauge,
            metadata,
        })
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (1:{})", self.name, self.ratio)
    }
}
