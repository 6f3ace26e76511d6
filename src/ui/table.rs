use crate::country::Country;
use crate::record::{CensusRecord, RecordCollection};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct RecordRow {
    #[tabled(rename = "State")]
    pub state: String,
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Population")]
    pub population: String,
    #[tabled(rename = "Area")]
    pub area: String,
    #[tabled(rename = "Density")]
    pub density: String,
}

impl From<&CensusRecord> for RecordRow {
    fn from(record: &CensusRecord) -> Self {
        let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
        Self {
            state: record.state().to_string(),
            code: or_dash(record.state_code().map(str::to_string)),
            population: or_dash(record.population().map(|p| p.to_string())),
            area: or_dash(record.area().map(|a| format!("{:.2}", a))),
            density: or_dash(record.density().map(|d| format!("{:.2}", d))),
        }
    }
}

#[derive(Tabled)]
pub struct SchemaRow {
    #[tabled(rename = "Schema")]
    pub schema: String,
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Header")]
    pub header: String,
}

/// Render records sorted by key, at most `limit` rows
pub fn records_table(records: &RecordCollection, limit: Option<usize>) -> String {
    let rows: Vec<RecordRow> = records
        .sorted()
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|(_, record)| RecordRow::from(record))
        .collect();

    if rows.is_empty() {
        return String::new();
    }

    Table::new(&rows).with(Style::rounded()).to_string()
}

pub fn schemas_table(countries: &[Country]) -> String {
    let rows: Vec<SchemaRow> = countries
        .iter()
        .map(|country| SchemaRow {
            schema: country.as_str().to_string(),
            key: country.columns()[country.key_column()].to_string(),
            header: country.descriptor().header_line(),
        })
        .collect();

    Table::new(&rows).with(Style::rounded()).to_string()
}
