//! Supported census schemas
//!
//! Every load call names its schema explicitly; the file content is never
//! used to guess which adapter applies.

use crate::{Error, Result};
use crate::schema::SchemaDescriptor;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Schema identifier - selects the header shape, delimiter and row mapping
/// used for a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Country {
    /// Indian state census: population, area and density per state
    IndiaCensus,
    /// Indian state code table: serial number, TIN and two-letter code
    IndiaStateCode,
    /// US census: population, housing and area figures per state
    UsCensus,
}

impl Country {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::IndiaCensus => "india-census",
            Country::IndiaStateCode => "india-state-code",
            Country::UsCensus => "us-census",
        }
    }

    /// Get all supported schemas
    pub fn all() -> &'static [Country] {
        &[Country::IndiaCensus, Country::IndiaStateCode, Country::UsCensus]
    }

    /// Canonical header columns for this schema
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Country::IndiaCensus => &["State", "Population", "AreaInSqKm", "DensityPerSqKm"],
            Country::IndiaStateCode => &["SrNo", "State Name", "TIN", "StateCode"],
            Country::UsCensus => &[
                "State Id",
                "State",
                "Population",
                "Housing units",
                "Total area",
                "Water area",
                "Land area",
                "Population Density",
                "Housing Density",
            ],
        }
    }

    /// Index of the column holding the unique record key
    pub fn key_column(&self) -> usize {
        match self {
            Country::IndiaCensus => 0,
            Country::IndiaStateCode | Country::UsCensus => 1,
        }
    }

    /// Schema descriptor with the canonical header
    pub fn descriptor(&self) -> SchemaDescriptor {
        SchemaDescriptor::for_country(*self)
    }
}

impl FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "india-census" | "india" | "in" => Ok(Country::IndiaCensus),
            "india-state-code" | "india-code" | "state-code" | "code" => Ok(Country::IndiaStateCode),
            "us-census" | "us" | "usa" => Ok(Country::UsCensus),
            _ => Err(Error::UnknownSchema(s.to_string())),
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
