//! Schema descriptors - what a candidate file must look like before its rows
//! are trusted.

use crate::country::Country;

/// Accepted file extension for census tables
pub const CSV_EXTENSION: &str = "csv";

/// Delimiter used by every built-in schema
pub const DEFAULT_DELIMITER: char = ',';

/// Expected header, delimiter and file type for one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescriptor {
    /// Schema the descriptor belongs to
    pub country: Country,
    /// Header column names, in order
    pub columns: Vec<String>,
    /// Field delimiter
    pub delimiter: char,
    /// Accepted file extension (without the dot)
    pub extension: &'static str,
}

impl SchemaDescriptor {
    /// Descriptor with the canonical header of `country`
    pub fn for_country(country: Country) -> Self {
        Self {
            country,
            columns: country.columns().iter().map(|c| c.to_string()).collect(),
            delimiter: DEFAULT_DELIMITER,
            extension: CSV_EXTENSION,
        }
    }

    /// Replace the expected columns with a caller-declared header line.
    ///
    /// The header is split on this descriptor's delimiter; column names are
    /// kept verbatim so the header check stays exact.
    pub fn with_expected_header(mut self, header: &str) -> Self {
        self.columns = header.split(self.delimiter).map(str::to_string).collect();
        self
    }

    /// The header line a valid file must start with
    pub fn header_line(&self) -> String {
        let delimiter = self.delimiter.to_string();
        self.columns.join(delimiter.as_str())
    }

    /// Number of columns in the expected header
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of fields a data row of this schema splits into.
    ///
    /// Fixed by the schema's adapter layout, whatever header the caller declared.
    pub fn field_count(&self) -> usize {
        self.country.columns().len()
    }
}
