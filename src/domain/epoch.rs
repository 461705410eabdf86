// Copyright (c) 2025 - Cowboy AI, Inc.
//! Model Railway Epoch Classification
//!
//! The model railway industry groups rolling stock into historical time
//! brackets ("epochs") so that locomotives, coaches and wagons can be
//! matched to a period. This module follows the European epoch system:
//! six main epochs written as Roman numerals, several of them refined
//! into sub-periods (`IIa`, `Vm`, ...).
//!
//! Exact dates differ country by country, so the codes are treated as an
//! opaque closed vocabulary: parsing is an exact, case-sensitive match
//! against the fifteen single codes plus the two transition codes `IV/V`
//! and `V/VI`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CatalogError, CatalogResult};

/// Model railway epoch
///
/// Either a single canonical code or a transition period spanning two
/// epochs. The parser only recognizes the `IV/V` and `V/VI` transitions;
/// other pairs can be built through [`Epoch::multiple`] but have no
/// parseable text form of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Epoch {
    /// Steam era up to ca. 1920
    I,
    /// Between the wars
    II,
    IIa,
    IIb,
    /// Post-war rebuild
    III,
    IIIa,
    IIIb,
    /// Computer numbering, pre-liberalization
    IV,
    IVa,
    IVb,
    /// Liberalization of the European railways
    V,
    Va,
    Vb,
    Vm,
    /// Current era
    VI,
    /// Transition period spanning two epochs
    Multiple(Box<Epoch>, Box<Epoch>),
}

impl Epoch {
    /// All single epoch codes, in canonical progression order
    ///
    /// Transition codes are excluded; this is the list collaborators use
    /// to enumerate the vocabulary.
    pub const ALL: [Epoch; 15] = [
        Epoch::I,
        Epoch::II,
        Epoch::IIa,
        Epoch::IIb,
        Epoch::III,
        Epoch::IIIa,
        Epoch::IIIb,
        Epoch::IV,
        Epoch::IVa,
        Epoch::IVb,
        Epoch::V,
        Epoch::Va,
        Epoch::Vb,
        Epoch::Vm,
        Epoch::VI,
    ];

    /// Build a transition epoch from two epochs
    ///
    /// Bypasses the parser; any pair is accepted.
    pub fn multiple(first: Epoch, second: Epoch) -> Self {
        Epoch::Multiple(Box::new(first), Box::new(second))
    }

    /// Parse an epoch code
    ///
    /// Exact, case-sensitive match against the fifteen single codes and
    /// the two transition codes. No fuzzy matching.
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidFormat`] naming the rejected value.
    pub fn parse(value: &str) -> CatalogResult<Self> {
        match value {
            "I" => Ok(Epoch::I),
            "II" => Ok(Epoch::II),
            "IIa" => Ok(Epoch::IIa),
            "IIb" => Ok(Epoch::IIb),
            "III" => Ok(Epoch::III),
            "IIIa" => Ok(Epoch::IIIa),
            "IIIb" => Ok(Epoch::IIIb),
            "IV" => Ok(Epoch::IV),
            "IVa" => Ok(Epoch::IVa),
            "IVb" => Ok(Epoch::IVb),
            "IV/V" => Ok(Epoch::multiple(Epoch::IV, Epoch::V)),
            "V" => Ok(Epoch::V),
            "Va" => Ok(Epoch::Va),
            "Vb" => Ok(Epoch::Vb),
            "Vm" => Ok(Epoch::Vm),
            "V/VI" => Ok(Epoch::multiple(Epoch::V, Epoch::VI)),
            "VI" => Ok(Epoch::VI),
            _ => Err(CatalogError::invalid_format(format!(
                "Invalid epoch value: {value}"
            ))),
        }
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Epoch::I => f.write_str("I"),
            Epoch::II => f.write_str("II"),
            Epoch::IIa => f.write_str("IIa"),
            Epoch::IIb => f.write_str("IIb"),
            Epoch::III => f.write_str("III"),
            Epoch::IIIa => f.write_str("IIIa"),
            Epoch::IIIb => f.write_str("IIIb"),
            Epoch::IV => f.write_str("IV"),
            Epoch::IVa => f.write_str("IVa"),
            Epoch::IVb => f.write_str("IVb"),
            Epoch::V => f.write_str("V"),
            Epoch::Va => f.write_str("Va"),
            Epoch::Vb => f.write_str("Vb"),
            Epoch::Vm => f.write_str("Vm"),
            Epoch::VI => f.write_str("VI"),
            Epoch::Multiple(first, second) => write!(f, "{first}/{second}"),
        }
    }
}

impl FromStr for Epoch {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Epoch {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Epoch> for String {
    fn from(epoch: Epoch) -> Self {
        epoch.to_string()
    }
}
