//! Indian state census adapter
//!
//! Layout: `State,Population,AreaInSqKm,DensityPerSqKm`, keyed by `State`.

use crate::Result;
use crate::country::Country;
use crate::record::{CensusData, CensusRecord};
use crate::source::SourceLine;
use super::framework::{CensusAdapter, Fields};

/// Indian state census adapter
#[derive(Debug, Default)]
pub struct IndiaCensusAdapter;

impl IndiaCensusAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl CensusAdapter for IndiaCensusAdapter {
    fn country(&self) -> Country {
        Country::IndiaCensus
    }

    fn parse(&self, line: &SourceLine, delimiter: char) -> Result<CensusRecord> {
        let fields = Fields::split(line, delimiter, self.columns())?;

        Ok(CensusRecord::new(
            self.country(),
            fields.key(self.key_column())?,
            CensusData::IndiaCensus {
                population: fields.parse(1)?,
                area_in_sq_km: fields.parse(2)?,
                density_per_sq_km: fields.parse(3)?,
            },
        ))
    }
}
