//! Census loader - validation and adapters composed into one call
//!
//! A load moves through `Start -> Validating -> Parsing -> Done`. Any failure
//! moves it to `Failed` and the error is returned as-is; no partial
//! collection ever leaves this module.

use crate::adapter::{default_registry, AdapterRegistry, CensusAdapter};
use crate::country::Country;
use crate::record::RecordCollection;
use crate::schema::SchemaDescriptor;
use crate::source::{FileSource, RecordSource, SourceLine};
use crate::validator::Validator;
use crate::Result;
use std::path::Path;
use tracing::{debug, info, warn};

/// Phase of a single load call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Start,
    Validating,
    Parsing,
    Done,
    Failed,
}

impl LoadPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPhase::Start => "start",
            LoadPhase::Validating => "validating",
            LoadPhase::Parsing => "parsing",
            LoadPhase::Done => "done",
            LoadPhase::Failed => "failed",
        }
    }

    /// Whether no further transition can happen
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadPhase::Done | LoadPhase::Failed)
    }
}

impl std::fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Loads census files through a `RecordSource` and an `AdapterRegistry`.
///
/// The loader holds no per-call state; each `load` builds its own
/// `RecordCollection`.
pub struct CensusLoader {
    registry: AdapterRegistry,
    source: Box<dyn RecordSource>,
}

impl Default for CensusLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CensusLoader {
    /// Loader reading from the filesystem with all built-in adapters
    pub fn new() -> Self {
        Self {
            registry: default_registry(),
            source: Box::new(FileSource::new()),
        }
    }

    /// Read files through another source
    pub fn with_source(mut self, source: impl RecordSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Use another adapter registry
    pub fn with_registry(mut self, registry: AdapterRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    /// Load `path` as `country`, requiring its first line to equal `expected_header`.
    pub fn load(
        &self,
        country: Country,
        path: impl AsRef<Path>,
        expected_header: &str,
    ) -> Result<RecordCollection> {
        let descriptor = country.descriptor().with_expected_header(expected_header);
        self.load_with_descriptor(&descriptor, path.as_ref())
    }

    /// Load `path` as `country`, requiring the schema's canonical header.
    pub fn load_default(&self, country: Country, path: impl AsRef<Path>) -> Result<RecordCollection> {
        self.load_with_descriptor(&country.descriptor(), path.as_ref())
    }

    /// Load `path` against an explicit descriptor
    pub fn load_with_descriptor(
        &self,
        descriptor: &SchemaDescriptor,
        path: &Path,
    ) -> Result<RecordCollection> {
        let mut phase = LoadPhase::Start;
        debug!(country = %descriptor.country, path = %path.display(), %phase, "load requested");

        let result = self.run(descriptor, path, &mut phase);
        match &result {
            Ok(records) => {
                phase = LoadPhase::Done;
                info!(
                    country = %descriptor.country,
                    path = %path.display(),
                    records = records.len(),
                    %phase,
                    "census data loaded"
                );
            }
            Err(e) => {
                let failed_in = phase;
                phase = LoadPhase::Failed;
                warn!(
                    country = %descriptor.country,
                    path = %path.display(),
                    %failed_in,
                    %phase,
                    kind = %e.kind(),
                    "load failed: {}", e
                );
            }
        }
        result
    }

    fn run(
        &self,
        descriptor: &SchemaDescriptor,
        path: &Path,
        phase: &mut LoadPhase,
    ) -> Result<RecordCollection> {
        // Resolve the adapter before touching the file.
        let adapter = self.registry.adapter(descriptor.country)?;

        *phase = LoadPhase::Validating;
        debug!(%phase);
        let lines = Validator::new(descriptor).validate(self.source.as_ref(), path)?;

        *phase = LoadPhase::Parsing;
        debug!(%phase, rows = lines.len());
        collect_records(adapter, &lines, descriptor.delimiter)
    }
}

fn collect_records(
    adapter: &dyn CensusAdapter,
    lines: &[SourceLine],
    delimiter: char,
) -> Result<RecordCollection> {
    let mut records = RecordCollection::new();
    for line in lines {
        let record = adapter.parse(line, delimiter)?;
        let key = adapter.key_of(&record);
        if records.insert(key.clone(), record).is_some() {
            debug!(key = %key, line = line.number, "duplicate key replaced");
        }
    }
    Ok(records)
}

/// Load a census file from disk with the built-in adapters.
pub fn load_census_data(
    country: Country,
    path: impl AsRef<Path>,
    expected_header: &str,
) -> Result<RecordCollection> {
    CensusLoader::new().load(country, path, expected_header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use crate::ErrorKind;

    const HEADER: &str = "State,Population,AreaInSqKm,DensityPerSqKm";

    fn loader(files: &[(&str, &str)]) -> CensusLoader {
        let mut source = MemorySource::new();
        for (path, content) in files {
            source.insert(*path, *content);
        }
        CensusLoader::new().with_source(source)
    }

    #[test]
    fn test_load_counts_rows() {
        let loader = loader(&[(
            "census.csv",
            "State,Population,AreaInSqKm,DensityPerSqKm\nGoa,1458545,3702,394\nSikkim,610577,7096,86\n",
        )]);
        let records = loader.load(Country::IndiaCensus, "census.csv", HEADER).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.contains_key("Goa"));
        assert!(records.contains_key("Sikkim"));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let loader = loader(&[(
            "census.csv",
            "State,Population,AreaInSqKm,DensityPerSqKm\nGoa,1,3702,394\nGoa,2,3702,394\n",
        )]);
        let records = loader.load(Country::IndiaCensus, "census.csv", HEADER).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records.get("Goa").unwrap().population(), Some(2));
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let loader = loader(&[("census.csv", HEADER)]);
        let records = loader.load_default(Country::IndiaCensus, "census.csv").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_caller_header_is_authoritative() {
        let loader = loader(&[("census.csv", HEADER)]);
        let err = loader
            .load(Country::IndiaCensus, "census.csv", "SrNo,State Name,TIN,StateCode")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncorrectHeader);
    }

    #[test]
    fn test_parse_failure_is_atomic() {
        let loader = loader(&[(
            "census.csv",
            "State,Population,AreaInSqKm,DensityPerSqKm\nGoa,1458545,3702,394\nSikkim,lots,7096,86\n",
        )]);
        let err = loader.load(Country::IndiaCensus, "census.csv", HEADER).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidField);
    }

    #[test]
    fn test_missing_adapter() {
        let loader = loader(&[("census.csv", HEADER)]).with_registry(AdapterRegistry::new());
        let err = loader.load(Country::IndiaCensus, "census.csv", HEADER).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AdapterNotRegistered);
    }

    #[test]
    fn test_load_phase_terminal() {
        assert!(LoadPhase::Done.is_terminal());
        assert!(LoadPhase::Failed.is_terminal());
        assert!(!LoadPhase::Parsing.is_terminal());
        assert_eq!(LoadPhase::Validating.to_string(), "validating");
    }
}
