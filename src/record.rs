//! Census records - the normalized form every adapter produces
//!
//! Row shapes differ per schema, so the schema-specific figures live in
//! `CensusData`, a closed set of variants. `CensusRecord` adds what every row
//! has in common: the schema it came from and the state it describes.

use crate::country::Country;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Schema-specific figures of a census row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schema", rename_all = "kebab-case")]
pub enum CensusData {
    IndiaCensus {
        population: u64,
        area_in_sq_km: u64,
        density_per_sq_km: u64,
    },
    IndiaStateCode {
        sr_no: u32,
        tin: u32,
        state_code: String,
    },
    UsCensus {
        state_id: String,
        population: u64,
        housing_units: u64,
        total_area: f64,
        water_area: f64,
        land_area: f64,
        population_density: f64,
        housing_density: f64,
    },
}

/// One normalized census row.
///
/// Fields are private; a record is immutable once an adapter has built it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CensusRecord {
    country: Country,
    state: String,
    data: CensusData,
}

impl CensusRecord {
    /// Create a record for `state`
    pub fn new(country: Country, state: impl Into<String>, data: CensusData) -> Self {
        Self {
            country,
            state: state.into(),
            data,
        }
    }

    /// Schema this record was loaded with
    pub fn country(&self) -> Country {
        self.country
    }

    /// State (region) name - the record key for every built-in schema
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Schema-specific figures
    pub fn data(&self) -> &CensusData {
        &self.data
    }

    pub fn population(&self) -> Option<u64> {
        match &self.data {
            CensusData::IndiaCensus { population, .. } | CensusData::UsCensus { population, .. } => {
                Some(*population)
            }
            CensusData::IndiaStateCode { .. } => None,
        }
    }

    /// Total area (square kilometres for India, as published for the US)
    pub fn area(&self) -> Option<f64> {
        match &self.data {
            CensusData::IndiaCensus { area_in_sq_km, .. } => Some(*area_in_sq_km as f64),
            CensusData::UsCensus { total_area, .. } => Some(*total_area),
            CensusData::IndiaStateCode { .. } => None,
        }
    }

    pub fn density(&self) -> Option<f64> {
        match &self.data {
            CensusData::IndiaCensus { density_per_sq_km, .. } => Some(*density_per_sq_km as f64),
            CensusData::UsCensus { population_density, .. } => Some(*population_density),
            CensusData::IndiaStateCode { .. } => None,
        }
    }

    /// Short state code (`AP`, `AL`, ...) where the schema carries one
    pub fn state_code(&self) -> Option<&str> {
        match &self.data {
            CensusData::IndiaStateCode { state_code, .. } => Some(state_code.as_str()),
            CensusData::UsCensus { state_id, .. } => Some(state_id.as_str()),
            CensusData::IndiaCensus { .. } => None,
        }
    }
}

/// Records of one load call, keyed by their unique key.
///
/// Inserting an existing key replaces the previous record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection {
    records: HashMap<String, CensusRecord>,
}

impl RecordCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced (if any)
    pub fn insert(&mut self, key: impl Into<String>, record: CensusRecord) -> Option<CensusRecord> {
        self.records.insert(key.into(), record)
    }

    pub fn get(&self, key: &str) -> Option<&CensusRecord> {
        self.records.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.records.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CensusRecord)> {
        self.records.iter()
    }

    /// Records sorted by key, for stable display
    pub fn sorted(&self) -> Vec<(&String, &CensusRecord)> {
        let mut entries: Vec<_> = self.records.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn into_inner(self) -> HashMap<String, CensusRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = (&'a String, &'a CensusRecord);
    type IntoIter = std::collections::hash_map::Iter<'a, String, CensusRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
