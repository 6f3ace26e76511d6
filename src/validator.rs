//! Structural validation of candidate census files
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. the path resolves to a readable file
//! 2. the extension is the accepted tabular type
//! 3. the first line equals the expected header
//! 4. every non-empty data line contains the delimiter
//!
//! Only when all four pass are the data lines handed to an adapter.

use crate::schema::SchemaDescriptor;
use crate::source::{RecordSource, SourceLine};
use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

const BOM: char = '\u{feff}';

/// Applies the structural checks of a `SchemaDescriptor` to a file.
pub struct Validator<'a> {
    descriptor: &'a SchemaDescriptor,
}

impl<'a> Validator<'a> {
    pub fn new(descriptor: &'a SchemaDescriptor) -> Self {
        Self { descriptor }
    }

    /// Validate `path` and return its data lines (header and blank lines removed)
    pub fn validate(&self, source: &dyn RecordSource, path: &Path) -> Result<Vec<SourceLine>> {
        if !source.exists(path) {
            return Err(Error::file_not_found(path, None));
        }
        debug!(path = %path.display(), "file exists");

        self.check_extension(path)?;
        debug!(path = %path.display(), extension = self.descriptor.extension, "file type accepted");

        let content = source
            .read_to_string(path)
            .map_err(|e| Error::file_not_found(path, Some(e)))?;

        let mut lines = content.lines();
        let header = lines.next().unwrap_or("");
        self.check_header(header)?;
        debug!(header, "header matched");

        let data = self.check_delimiter(lines)?;
        debug!(rows = data.len(), delimiter = %self.descriptor.delimiter, "delimiter consistent");
        Ok(data)
    }

    fn check_extension(&self, path: &Path) -> Result<()> {
        let accepted = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.descriptor.extension));

        if accepted {
            Ok(())
        } else {
            Err(Error::InvalidFileType {
                path: path.to_path_buf(),
                expected: self.descriptor.extension.to_string(),
            })
        }
    }

    fn check_header(&self, header: &str) -> Result<()> {
        let header = header.strip_prefix(BOM).unwrap_or(header);
        let expected = self.descriptor.header_line();
        if header == expected {
            Ok(())
        } else {
            Err(Error::IncorrectHeader {
                expected,
                found: header.to_string(),
            })
        }
    }

    fn check_delimiter<'l>(&self, lines: impl Iterator<Item = &'l str>) -> Result<Vec<SourceLine>> {
        let delimiter = self.descriptor.delimiter;
        let mut data = Vec::new();

        // Header is line 1.
        for (idx, line) in lines.enumerate() {
            let number = idx + 2;
            if line.trim().is_empty() {
                continue;
            }
            if !line.contains(delimiter) {
                return Err(Error::IncorrectDelimiter {
                    line: number,
                    delimiter,
                    expected_fields: self.descriptor.field_count(),
                    found_fields: 1,
                });
            }
            data.push(SourceLine::new(number, line));
        }

        Ok(data)
    }
}
