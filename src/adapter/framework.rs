//! Core adapter framework
//!
//! Defines the trait every schema adapter implements, the registry that maps
//! a `Country` to its adapter, and the field splitting shared by all of them.

use crate::Result;
use crate::country::Country;
use crate::record::CensusRecord;
use crate::source::SourceLine;
use crate::Error;
use std::collections::HashMap;
use std::str::FromStr;

/// Trait for schema adapters
///
/// Each adapter is responsible for:
/// 1. Declaring the fixed column layout of its schema
/// 2. Turning one validated line into a `CensusRecord`
/// 3. Naming the key a record is stored under
pub trait CensusAdapter: Send + Sync {
    /// Schema this adapter handles
    fn country(&self) -> Country;

    /// Expected columns, in file order
    fn columns(&self) -> &'static [&'static str] {
        self.country().columns()
    }

    fn column_count(&self) -> usize {
        self.columns().len()
    }

    /// Index of the unique key column
    fn key_column(&self) -> usize {
        self.country().key_column()
    }

    /// Parse a validated data line into a record
    fn parse(&self, line: &SourceLine, delimiter: char) -> Result<CensusRecord>;

    /// Key a record is stored under in a `RecordCollection`
    fn key_of(&self, record: &CensusRecord) -> String {
        record.state().to_string()
    }
}

/// Fields of one data line, split and checked against a column layout
#[derive(Debug)]
pub struct Fields<'a> {
    line: usize,
    columns: &'a [&'a str],
    values: Vec<String>,
}

impl<'a> Fields<'a> {
    /// Split `line` on `delimiter`; the field count must match `columns` exactly.
    pub fn split(line: &SourceLine, delimiter: char, columns: &'a [&'a str]) -> Result<Self> {
        let values = split_line(&line.text, delimiter);
        if values.len() != columns.len() {
            return Err(Error::IncorrectDelimiter {
                line: line.number,
                delimiter,
                expected_fields: columns.len(),
                found_fields: values.len(),
            });
        }
        Ok(Self {
            line: line.number,
            columns,
            values,
        })
    }

    /// Raw (trimmed) text of field `idx`
    pub fn text(&self, idx: usize) -> &str {
        &self.values[idx]
    }

    /// Field `idx` as a non-empty key
    pub fn key(&self, idx: usize) -> Result<String> {
        let value = self.text(idx);
        if value.is_empty() {
            return Err(self.invalid(idx));
        }
        Ok(value.to_string())
    }

    /// Field `idx` parsed as `T`
    pub fn parse<T: FromStr>(&self, idx: usize) -> Result<T> {
        self.text(idx).parse().map_err(|_| self.invalid(idx))
    }

    /// Field `idx` as a published measurement: finite and not negative
    pub fn figure(&self, idx: usize) -> Result<f64> {
        let value: f64 = self.parse(idx)?;
        if !value.is_finite() || value < 0.0 {
            return Err(self.invalid(idx));
        }
        Ok(value)
    }

    fn invalid(&self, idx: usize) -> Error {
        Error::InvalidField {
            line: self.line,
            column: self.columns[idx].to_string(),
            value: self.values[idx].clone(),
        }
    }
}

/// Split one line with the csv reader so quoted fields keep embedded
/// delimiters. Delimiters outside ASCII fall back to a plain split.
fn split_line(text: &str, delimiter: char) -> Vec<String> {
    if !delimiter.is_ascii() {
        return text.split(delimiter).map(|f| f.trim().to_string()).collect();
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter as u8)
        .from_reader(text.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        // An unterminated quote is the only way a single line fails here;
        // report it as an unsplittable line.
        _ => Vec::new(),
    }
}

/// Registry of schema adapters, keyed by `Country`
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: HashMap<Country, Box<dyn CensusAdapter>>,
}

impl AdapterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter, replacing any adapter for the same country
    pub fn register(&mut self, adapter: impl CensusAdapter + 'static) {
        self.adapters.insert(adapter.country(), Box::new(adapter));
    }

    /// Find the adapter for a country
    pub fn find_adapter(&self, country: Country) -> Option<&dyn CensusAdapter> {
        self.adapters.get(&country).map(|a| a.as_ref())
    }

    /// Like `find_adapter`, but a missing adapter is an error
    pub fn adapter(&self, country: Country) -> Result<&dyn CensusAdapter> {
        self.find_adapter(country)
            .ok_or(Error::AdapterNotRegistered(country))
    }

    /// Countries with a registered adapter, in declaration order
    pub fn countries(&self) -> Vec<Country> {
        let mut countries: Vec<Country> = self.adapters.keys().copied().collect();
        countries.sort();
        countries
    }
}

/// Create a default registry with all built-in adapters
pub fn default_registry() -> AdapterRegistry {
    let mut registry = AdapterRegistry::new();
    registry.register(super::india_census::IndiaCensusAdapter::new());
    registry.register(super::india_state_code::IndiaStateCodeAdapter::new());
    registry.register(super::us_census::UsCensusAdapter::new());
    registry
}
