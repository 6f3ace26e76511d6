//! Record sources - where the raw text of a census file comes from
//!
//! The pipeline never touches the filesystem directly; it asks a
//! `RecordSource`. `FileSource` reads from disk, `MemorySource` serves text
//! registered up front (fixtures, embedded tables).

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// One data line of a source, with its 1-based position in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Turns a path into the text of a tabular file.
pub trait RecordSource: Send + Sync {
    /// Whether `path` resolves to a readable file
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file as text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads files from the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl FileSource {
    pub fn new() -> Self {
        Self
    }
}

impl RecordSource for FileSource {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    /// Bytes that are not valid UTF-8 are replaced rather than failing the
    /// read; only real I/O failures are errors.
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Serves file contents from memory
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    /// Create a new empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `path`
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl RecordSource for MemorySource {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} is not registered", path.display()))
        })
    }
}
