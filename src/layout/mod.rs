//! Layout specification subsystem
//!
//! A layout specification declares which fields an input may contain, how
//! often each may occur, and which fields must come before which. It is
//! never written out in full: each application version resolves it by
//! folding the patches whose range covers that version.
//!
//! # Design Principles
//!
//! - Patches apply in caller order; nothing is sorted or deduplicated
//! - Authoring mistakes abort the fold (`LayoutError`)
//! - Data problems are findings, never errors
//! - Validation runs every pass to completion

mod builder;
mod errors;
mod patch;
mod types;
mod validator;

pub use builder::LayoutSpecificationBuilder;
pub use errors::{LayoutError, LayoutResult};
pub use patch::{LayoutPatch, LayoutPatchOperation};
pub use types::{ExpectedField, FieldOrderingConstraint, FieldUpdate, LayoutSpecification};
pub use validator::{subjects, LayoutSpecificationValidator, UnexpectedFieldStrictness};
