use crate::country::Country;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Defaults for the `census` command, read from `census.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CensusConfig {
    /// Schema identifier, e.g. `india-census`
    pub country: Option<String>,
    /// Census file to load
    pub path: Option<String>,
    /// Expected header line; the schema's canonical header when absent
    pub header: Option<String>,
}

/// A fully resolved `census load` invocation
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub country: Country,
    pub path: PathBuf,
    pub header: String,
}

impl CensusConfig {
    /// Combine command-line flags with this config; flags win.
    pub fn resolve(
        &self,
        country: Option<&str>,
        path: Option<&Path>,
        header: Option<&str>,
    ) -> anyhow::Result<LoadRequest> {
        let country = country
            .or(self.country.as_deref())
            .context("no schema given (pass --country or set `country` in census.toml)")?;
        let country: Country = country.parse()?;

        let path = path
            .map(Path::to_path_buf)
            .or_else(|| self.path.as_ref().map(PathBuf::from))
            .context("no file given (pass --path or set `path` in census.toml)")?;

        // The configured header describes the configured schema only.
        let configured = self
            .country
            .as_deref()
            .and_then(|c| c.parse::<Country>().ok());
        let config_header = self.header.clone().filter(|_| configured == Some(country));
        let header = header
            .map(str::to_string)
            .or(config_header)
            .unwrap_or_else(|| country.descriptor().header_line());

        Ok(LoadRequest { country, path, header })
    }

    /// Template written by `census init`
    pub fn template() -> Self {
        let country = Country::IndiaCensus;
        Self {
            country: Some(country.as_str().to_string()),
            path: Some("IndiaStateCensusData.csv".to_string()),
            header: Some(country.descriptor().header_line()),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("census.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<CensusConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: CensusConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &CensusConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("census.toml"))).unwrap().is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("census.toml");
        let config = CensusConfig {
            country: Some("india-state-code".into()),
            path: Some("data/IndiaStateCode.csv".into()),
            header: None,
        };

        write_config(&path, &config, false).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), Some(config.clone()));

        assert!(write_config(&path, &config, false).is_err());
        assert!(write_config(&path, &config, true).is_ok());
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let config = CensusConfig::template();

        let request = config.resolve(None, None, None).unwrap();
        assert_eq!(request.country, Country::IndiaCensus);
        assert_eq!(request.path, PathBuf::from("IndiaStateCensusData.csv"));
        assert_eq!(request.header, "State,Population,AreaInSqKm,DensityPerSqKm");

        let request = config
            .resolve(Some("state-code"), Some(Path::new("codes.csv")), None)
            .unwrap();
        assert_eq!(request.country, Country::IndiaStateCode);
        assert_eq!(request.path, PathBuf::from("codes.csv"));
        assert_eq!(request.header, "SrNo,State Name,TIN,StateCode");

        let request = config
            .resolve(Some("state-code"), None, Some("SrNo;State Name"))
            .unwrap();
        assert_eq!(request.header, "SrNo;State Name");
    }

    #[test]
    fn test_config_header_kept_for_same_schema_alias() {
        let config = CensusConfig {
            country: Some("india-census".into()),
            path: Some("census.csv".into()),
            header: Some("State,Population".into()),
        };

        let request = config.resolve(Some("India"), None, None).unwrap();
        assert_eq!(request.country, Country::IndiaCensus);
        assert_eq!(request.header, "State,Population");

        let request = config.resolve(Some("us"), None, None).unwrap();
        assert_eq!(request.header, Country::UsCensus.descriptor().header_line());
    }

    #[test]
    fn test_resolve_defaults_to_canonical_header() {
        let config = CensusConfig::default();
        let request = config
            .resolve(Some("us"), Some(Path::new("us.csv")), None)
            .unwrap();
        assert_eq!(request.header, Country::UsCensus.descriptor().header_line());

        assert!(config.resolve(None, Some(Path::new("us.csv")), None).is_err());
        assert!(config.resolve(Some("us"), None, None).is_err());
        assert!(config.resolve(Some("mars"), Some(Path::new("us.csv")), None).is_err());
    }
}
