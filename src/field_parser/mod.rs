//! Splitting record values into sub-values
//!
//! Rule validation works on `ParsedData`: the same records as `RawData`,
//! with each value split into an ordered list of `RawValue`s.

use crate::input::{RawData, RawField, SourceLocation};

/// One sub-value of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValue {
    pub value: String,
    pub location: SourceLocation,
}

impl RawValue {
    pub fn new(value: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            value: value.into(),
            location,
        }
    }
}

/// A record whose value has been split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedField {
    pub key: String,
    pub values: Vec<RawValue>,
}

impl ParsedField {
    pub fn new(key: impl Into<String>, values: Vec<RawValue>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }
}

/// Parsed records, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedData {
    fields: Vec<ParsedField>,
}

impl ParsedData {
    pub fn new(fields: Vec<ParsedField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[ParsedField] {
        &self.fields
    }

    /// Every parsed record carrying `key`, in input order.
    pub fn fields_by_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a ParsedField> + 'a {
        self.fields.iter().filter(move |f| f.key == key)
    }
}

/// Splits one record value into sub-values.
pub trait FieldParser {
    fn parse_field(&self, field: &RawField) -> ParsedField;
}

/// Splits on every comma; every sub-value shares the record's location.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFieldParser;

impl FieldParser for CsvFieldParser {
    fn parse_field(&self, field: &RawField) -> ParsedField {
        let values = field
            .value
            .split(',')
            .map(|part| RawValue::new(part, field.location.clone()))
            .collect();

        ParsedField::new(field.key.clone(), values)
    }
}

/// Applies a `FieldParser` to every record of a document.
pub struct ParsedDataBuilder {
    parser: Box<dyn FieldParser>,
}

impl ParsedDataBuilder {
    pub fn new(parser: Box<dyn FieldParser>) -> Self {
        Self { parser }
    }

    pub fn build(&self, raw: &RawData) -> ParsedData {
        ParsedData::new(
            raw.fields()
                .iter()
                .map(|field| self.parser.parse_field(field))
                .collect(),
        )
    }
}

impl Default for ParsedDataBuilder {
    fn default() -> Self {
        Self::new(Box::new(CsvFieldParser))
    }
}
