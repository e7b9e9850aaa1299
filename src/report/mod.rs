//! Validation findings
//!
//! Validators never fail on bad data. Each problem becomes an `ErrorLog`
//! appended to a caller-owned `ErrorCollector`; an `ErrorProcessor` then
//! decides where the findings go.

mod processor;

pub use processor::{ErrorProcessor, FileOutputErrorProcessor};

use serde::Serialize;
use std::fmt;

/// One reported finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorLog {
    subject: String,
    body: String,
}

impl ErrorLog {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.body)
    }
}

/// Append-only list of findings. Duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct ErrorCollector {
    logs: Vec<ErrorLog>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, log: ErrorLog) {
        self.logs.push(log);
    }

    pub fn logs(&self) -> &[ErrorLog] {
        &self.logs
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.logs.is_empty()
    }

    /// Findings appended at or after `mark`, a previous `len()`.
    pub fn since(&self, mark: usize) -> &[ErrorLog] {
        self.logs.get(mark..).unwrap_or(&[])
    }

    pub fn into_logs(self) -> Vec<ErrorLog> {
        self.logs
    }
}
