//! US census adapter
//!
//! Nine columns per state: the two-letter state id, the state name (the
//! key), population and housing counts, and area/density figures which
//! are published with decimals.

use crate::Result;
use crate::country::Country;
use crate::record::{CensusData, CensusRecord};
use crate::source::SourceLine;
use super::framework::{CensusAdapter, Fields};

/// US census adapter
#[derive(Debug, Default)]
pub struct UsCensusAdapter;

impl UsCensusAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl CensusAdapter for UsCensusAdapter {
    fn country(&self) -> Country {
        Country::UsCensus
    }

    fn parse(&self, line: &SourceLine, delimiter: char) -> Result<CensusRecord> {
        let fields = Fields::split(line, delimiter, self.columns())?;

        Ok(CensusRecord::new(
            self.country(),
            fields.key(self.key_column())?,
            CensusData::UsCensus {
                state_id: fields.text(0).to_string(),
                population: fields.parse(2)?,
                housing_units: fields.parse(3)?,
                total_area: fields.figure(4)?,
                water_area: fields.figure(5)?,
                land_area: fields.figure(6)?,
                population_density: fields.figure(7)?,
                housing_density: fields.figure(8)?,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_parse_row() {
        let adapter = UsCensusAdapter::new();
        let line = SourceLine::new(2, "AL,Alabama,4779736,2171853,135767.43,4593.33,131174.1,36.44,16.56");
        let record = adapter.parse(&line, ',').unwrap();

        assert_eq!(adapter.key_of(&record), "Alabama");
        assert_eq!(record.state_code(), Some("AL"));
        assert_eq!(record.population(), Some(4779736));
        assert!((record.area().unwrap() - 135767.43).abs() < 1e-6);
        assert!((record.density().unwrap() - 36.44).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_area_rejected() {
        let adapter = UsCensusAdapter::new();
        for row in [
            "AL,Alabama,4779736,2171853,NaN,4593.33,131174.1,36.44,16.56",
            "AL,Alabama,4779736,2171853,135767.43,inf,131174.1,36.44,16.56",
            "AL,Alabama,4779736,2171853,135767.43,4593.33,131174.1,-36.44,16.56",
        ] {
            let err = adapter.parse(&SourceLine::new(5, row), ',').unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidField, "{row}");
        }
    }

    #[test]
    fn test_short_row() {
        let err = UsCensusAdapter::new()
            .parse(&SourceLine::new(2, "AL,Alabama,4779736"), ',')
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncorrectDelimiter);
    }
}
