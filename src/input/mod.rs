//! Raw input records
//!
//! An input file is reduced to an ordered sequence of key/value records
//! before any validation takes place. Record order is significant: the
//! layout validator checks ordering constraints against it.

mod csv;

pub use csv::CsvFileParser;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where a record was read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub filename: String,
    /// 1-based line number
    pub line: usize,
}

impl SourceLocation {
    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

/// A single key/value record as read from input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub key: String,
    pub value: String,
    pub location: SourceLocation,
}

impl RawField {
    pub fn new(key: impl Into<String>, value: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            location,
        }
    }
}

/// Ordered records of one input document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawData {
    fields: Vec<RawField>,
}

impl RawData {
    pub fn new(fields: Vec<RawField>) -> Self {
        Self { fields }
    }

    /// All records, in input order.
    pub fn fields(&self) -> &[RawField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if any record carries `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.fields.iter().any(|f| f.key == key)
    }

    /// Every record carrying `key`, in input order.
    pub fn fields_by_key(&self, key: &str) -> Vec<&RawField> {
        self.fields.iter().filter(|f| f.key == key).collect()
    }

    /// Sequence positions of every record carrying `key`, ascending.
    pub fn positions_of(&self, key: &str) -> Vec<usize> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.key == key)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Errors raised while reading an input document.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for input parsing
pub type InputResult<T> = Result<T, InputError>;

/// Turns an input document into `RawData`.
pub trait FileParser {
    fn parse(&self, path: &Path) -> InputResult<RawData>;
}
