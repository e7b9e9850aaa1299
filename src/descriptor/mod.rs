//! Application descriptor resolution
//!
//! Before any specification can be resolved, the input has to say which
//! application and version it was produced by. A resolver reads that
//! from the raw records. The CSV resolver here covers the bundled input
//! format; other formats bring their own `ApplicationDescriptorResolver`.

use serde::Serialize;
use std::fmt;

use crate::input::RawData;
use crate::observability::{log_event_with_fields, Event};
use crate::version::Version;

/// Record key holding the application name
pub const APPLICATION_NAME_KEY: &str = "ApplicationName";

/// Record key holding the application version
pub const APPLICATION_VERSION_KEY: &str = "ApplicationVersion";

/// Name and version of the application an input belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationDescriptor {
    name: String,
    version: Version,
}

impl ApplicationDescriptor {
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Version {
        self.version
    }
}

/// Kind of resolution failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveErrorCode {
    MissingRequiredField,
    DuplicateField,
    ParsingError,
    UnknownError,
}

impl ResolveErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ResolveErrorCode::MissingRequiredField => "DATALINT_DESCRIPTOR_MISSING_FIELD",
            ResolveErrorCode::DuplicateField => "DATALINT_DESCRIPTOR_DUPLICATE_FIELD",
            ResolveErrorCode::ParsingError => "DATALINT_DESCRIPTOR_PARSING_ERROR",
            ResolveErrorCode::UnknownError => "DATALINT_DESCRIPTOR_UNKNOWN_ERROR",
        }
    }
}

/// One problem found while resolving a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveError {
    pub code: ResolveErrorCode,
    pub field: String,
    pub message: Option<String>,
}

impl ResolveError {
    pub fn new(code: ResolveErrorCode, field: impl Into<String>) -> Self {
        Self {
            code,
            field: field.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            ResolveErrorCode::MissingRequiredField => {
                write!(f, "Missing required field: {}", self.field)?
            }
            ResolveErrorCode::DuplicateField => write!(
                f,
                "Found more than one match for: {}\nThis should be unique",
                self.field
            )?,
            ResolveErrorCode::ParsingError => write!(f, "Failed to parse: {}", self.field)?,
            ResolveErrorCode::UnknownError => write!(f, "Unknown error for field: {}", self.field)?,
        }
        if let Some(message) = &self.message {
            write!(f, " ({})", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ResolveError {}

/// Outcome of a resolution attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveResult {
    pub descriptor: Option<ApplicationDescriptor>,
    pub errors: Vec<ResolveError>,
}

impl ResolveResult {
    pub fn resolved(descriptor: ApplicationDescriptor) -> Self {
        Self {
            descriptor: Some(descriptor),
            errors: Vec::new(),
        }
    }

    pub fn failed(error: ResolveError) -> Self {
        Self {
            descriptor: None,
            errors: vec![error],
        }
    }

    /// A descriptor was produced and no error was recorded.
    pub fn success(&self) -> bool {
        self.errors.is_empty() && self.descriptor.is_some()
    }

    pub fn into_result(self) -> Result<ApplicationDescriptor, Vec<ResolveError>> {
        match self.descriptor {
            Some(descriptor) if self.errors.is_empty() => Ok(descriptor),
            _ => Err(self.errors),
        }
    }
}

/// Reads the application descriptor out of raw records.
pub trait ApplicationDescriptorResolver {
    fn resolve(&self, raw: &RawData) -> ResolveResult;
}

/// Resolver for the bundled CSV format.
///
/// Requires exactly one `ApplicationName` and one `ApplicationVersion`
/// record and uses the first comma-separated cell of each value. Stops
/// at the first problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCsvApplicationDescriptorResolver;

impl DefaultCsvApplicationDescriptorResolver {
    pub fn new() -> Self {
        Self
    }

    fn resolve_inner(&self, raw: &RawData) -> Result<ApplicationDescriptor, ResolveError> {
        for key in [APPLICATION_NAME_KEY, APPLICATION_VERSION_KEY] {
            if !raw.has_key(key) {
                return Err(ResolveError::new(ResolveErrorCode::MissingRequiredField, key));
            }
        }

        let name = single_value(raw, APPLICATION_NAME_KEY)?;
        let version = single_value(raw, APPLICATION_VERSION_KEY)?;

        let version = Version::parse(first_cell(version)).map_err(|e| {
            ResolveError::new(ResolveErrorCode::ParsingError, APPLICATION_VERSION_KEY)
                .with_message(e.to_string())
        })?;

        Ok(ApplicationDescriptor::new(first_cell(name), version))
    }
}

impl ApplicationDescriptorResolver for DefaultCsvApplicationDescriptorResolver {
    fn resolve(&self, raw: &RawData) -> ResolveResult {
        match self.resolve_inner(raw) {
            Ok(descriptor) => {
                let version = descriptor.version().to_string();
                log_event_with_fields(
                    Event::DescriptorResolved,
                    &[("name", descriptor.name()), ("version", version.as_str())],
                );
                ResolveResult::resolved(descriptor)
            }
            Err(error) => {
                log_event_with_fields(
                    Event::DescriptorRejected,
                    &[("code", error.code.code()), ("field", error.field.as_str())],
                );
                ResolveResult::failed(error)
            }
        }
    }
}

fn single_value<'a>(raw: &'a RawData, key: &str) -> Result<&'a str, ResolveError> {
    let matches = raw.fields_by_key(key);
    match matches.as_slice() {
        [] => Err(ResolveError::new(ResolveErrorCode::MissingRequiredField, key)),
        [only] => Ok(only.value.as_str()),
        _ => Err(ResolveError::new(ResolveErrorCode::DuplicateField, key)),
    }
}

fn first_cell(value: &str) -> &str {
    value.split(',').next().unwrap_or(value)
}
