//! Line-oriented CSV record reader
//!
//! Each non-blank line becomes one `RawField`. The first cell is the key
//! and the remaining cells, rejoined with commas, are the value.
//!
//! Cell rules:
//! - commas inside double quotes do not split
//! - unquoted whitespace around a cell is dropped
//! - a doubled quote inside a quoted cell collapses to one quote
//! - the enclosing quotes themselves are kept

use std::fs;
use std::path::Path;

use super::{FileParser, InputError, InputResult, RawData, RawField, SourceLocation};

/// Reads `key,value[,value...]` lines into `RawData`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFileParser;

impl CsvFileParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses already-loaded content, attributing records to `filename`.
    pub fn parse_str(&self, content: &str, filename: &str) -> RawData {
        let mut fields = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut cells = split_cells(line).into_iter();
            let key = cells.next().unwrap_or_default();
            let value = cells.collect::<Vec<_>>().join(",");

            fields.push(RawField::new(
                key,
                value,
                SourceLocation::new(filename, index + 1),
            ));
        }

        RawData::new(fields)
    }
}

impl FileParser for CsvFileParser {
    fn parse(&self, path: &Path) -> InputResult<RawData> {
        let content = fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.parse_str(&content, &path.display().to_string()))
    }
}

fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => {
                in_quotes = !in_quotes;
                current.push('"');
            }
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            c => current.push(c),
        }
    }
    cells.push(current.trim().to_string());

    cells
}
