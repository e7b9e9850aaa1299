//! datalint - versioned layout and value validation for key/value input
//!
//! An application's accepted input evolves release over release. Instead
//! of restating the full schema per version, datalint folds the patches
//! whose version range covers the input's version into a layout
//! specification and a rule specification, then checks the input against
//! both and reports every finding.

pub mod cli;
pub mod descriptor;
pub mod field_parser;
pub mod input;
pub mod layout;
pub mod lint;
pub mod manifest;
pub mod observability;
pub mod report;
pub mod rules;
pub mod version;
