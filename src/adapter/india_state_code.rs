//! Indian state code adapter

use crate::Result;
use crate::country::Country;
use crate::record::{CensusData, CensusRecord};
use crate::source::SourceLine;
use super::framework::{CensusAdapter, Fields};

/// Adapter for `SrNo,State Name,TIN,StateCode` tables, keyed by `State Name`
#[derive(Debug, Default)]
pub struct IndiaStateCodeAdapter;

impl IndiaStateCodeAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl CensusAdapter for IndiaStateCodeAdapter {
    fn country(&self) -> Country {
        Country::IndiaStateCode
    }

    fn parse(&self, line: &SourceLine, delimiter: char) -> Result<CensusRecord> {
        let fields = Fields::split(line, delimiter, self.columns())?;

        Ok(CensusRecord::new(
            self.country(),
            fields.key(self.key_column())?,
            CensusData::IndiaStateCode {
                sr_no: fields.parse(0)?,
                tin: fields.parse(2)?,
                state_code: fields.text(3).to_string(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row() {
        let adapter = IndiaStateCodeAdapter::new();
        let record = adapter
            .parse(&SourceLine::new(3, "2,Andhra Pradesh,28,AP"), ',')
            .unwrap();

        assert_eq!(adapter.key_of(&record), "Andhra Pradesh");
        assert_eq!(record.state_code(), Some("AP"));
        assert_eq!(
            record.data(),
            &CensusData::IndiaStateCode {
                sr_no: 2,
                tin: 28,
                state_code: "AP".to_string(),
            }
        );
    }
}
