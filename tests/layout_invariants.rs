//! Layout Invariant Tests
//!
//! Tests for layout specification invariants:
//! - Cardinality bounds are never silently adjusted
//! - Patches apply only inside their version range, in caller order
//! - Every validation pass runs to completion
//! - Strictness only controls undeclared-field reporting

use datalint::input::{RawData, RawField, SourceLocation};
use datalint::layout::{
    subjects, ExpectedField, FieldUpdate, LayoutError, LayoutPatch, LayoutPatchOperation,
    LayoutSpecificationBuilder, LayoutSpecificationValidator, UnexpectedFieldStrictness,
};
use datalint::report::{ErrorCollector, ErrorLog};
use datalint::version::{Version, VersionRange};

// =============================================================================
// Helper Functions
// =============================================================================

fn v(major: u32, minor: u32, patch: u32) -> Version {
    Version::new(major, minor, patch)
}

fn raw(pairs: &[(&str, &str)]) -> RawData {
    RawData::new(
        pairs
            .iter()
            .enumerate()
            .map(|(i, (k, val))| RawField::new(*k, *val, SourceLocation::new("input.csv", i + 1)))
            .collect(),
    )
}

fn patch(name: &str, range: VersionRange, ops: Vec<LayoutPatchOperation>) -> LayoutPatch {
    LayoutPatch::new(name, range, ops).unwrap()
}

fn count(collector: &ErrorCollector, subject: &str) -> usize {
    collector.logs().iter().filter(|l| l.subject() == subject).count()
}

// =============================================================================
// Cardinality Tests
// =============================================================================

/// max < min is rejected on construction and on every mutation path.
#[test]
fn test_cardinality_never_clamped() {
    assert_eq!(
        ExpectedField::new(5, Some(4)).unwrap_err(),
        LayoutError::InvalidCardinality { min: 5, max: 4 }
    );

    let patches = vec![patch(
        "narrow",
        VersionRange::all(),
        vec![
            LayoutPatchOperation::add_field("F", ExpectedField::new(2, Some(4)).unwrap()),
            LayoutPatchOperation::modify_field("F", FieldUpdate::SetMaxCount(Some(1))),
        ],
    )];

    let err = LayoutSpecificationBuilder::new().build(&v(1, 0, 0), &patches).unwrap_err();
    assert_eq!(err.root(), &LayoutError::InvalidCardinality { min: 2, max: 1 });
}

// =============================================================================
// Patch Folding Tests
// =============================================================================

/// A patch for [2.0.0, 3.0.0] contributes nothing at 1.5.0 and its field at 2.5.0.
#[test]
fn test_patch_filtering_by_version() {
    let patches = vec![patch(
        "v2",
        VersionRange::between(v(2, 0, 0), v(3, 0, 0)).unwrap(),
        vec![LayoutPatchOperation::add_field("Field1", ExpectedField::default())],
    )];
    let builder = LayoutSpecificationBuilder::new();

    assert_eq!(builder.build(&v(1, 5, 0), &patches).unwrap().fields().len(), 0);

    let spec = builder.build(&v(2, 5, 0), &patches).unwrap();
    assert_eq!(spec.fields().len(), 1);
    assert!(spec.field("Field1").is_some());
}

/// Both range ends are inclusive.
#[test]
fn test_range_boundaries_inclusive() {
    let patches = vec![patch(
        "bounded",
        VersionRange::between(v(2, 0, 0), v(3, 0, 0)).unwrap(),
        vec![LayoutPatchOperation::add_field("F", ExpectedField::default())],
    )];
    let builder = LayoutSpecificationBuilder::new();

    assert!(builder.build(&v(2, 0, 0), &patches).unwrap().has_field("F"));
    assert!(builder.build(&v(3, 0, 0), &patches).unwrap().has_field("F"));
    assert!(!builder.build(&v(3, 0, 1), &patches).unwrap().has_field("F"));
    assert!(!builder.build(&v(1, 99, 99), &patches).unwrap().has_field("F"));
}

/// Add then remove leaves the field undeclared.
#[test]
fn test_add_then_remove_round_trip() {
    let patches = vec![
        patch(
            "add",
            VersionRange::all(),
            vec![LayoutPatchOperation::add_field("F", ExpectedField::default())],
        ),
        patch("remove", VersionRange::all(), vec![LayoutPatchOperation::remove_field("F")]),
    ];

    for version in [v(0, 0, 1), v(1, 0, 0), v(42, 7, 3)] {
        let spec = LayoutSpecificationBuilder::new().build(&version, &patches).unwrap();
        assert!(!spec.has_field("F"));
    }
}

/// Reversing patch order turns a valid fold into a failing one.
#[test]
fn test_patch_order_is_caller_order() {
    let add = patch(
        "add",
        VersionRange::all(),
        vec![LayoutPatchOperation::add_field("F", ExpectedField::default())],
    );
    let modify = patch(
        "modify",
        VersionRange::all(),
        vec![LayoutPatchOperation::modify_field("F", FieldUpdate::SetMinCount(0))],
    );
    let builder = LayoutSpecificationBuilder::new();

    let ok = builder.build(&v(1, 0, 0), &[add.clone(), modify.clone()]).unwrap();
    assert_eq!(ok.field("F").unwrap().min_count(), 0);

    let err = builder.build(&v(1, 0, 0), &[modify, add]).unwrap_err();
    assert!(matches!(err, LayoutError::Patch { ref patch, .. } if patch == "modify"));
}

/// Removing a field keeps ordering constraints that mention it.
#[test]
fn test_remove_field_keeps_orderings() {
    let patches = vec![patch(
        "all",
        VersionRange::all(),
        vec![
            LayoutPatchOperation::add_field("A", ExpectedField::default()),
            LayoutPatchOperation::add_field("B", ExpectedField::default()),
            LayoutPatchOperation::add_ordering("A", "B"),
            LayoutPatchOperation::remove_field("B"),
        ],
    )];

    let spec = LayoutSpecificationBuilder::new().build(&v(1, 0, 0), &patches).unwrap();
    assert_eq!(spec.ordering_constraints().len(), 1);

    // B no longer declared and absent from input: constraint is skipped
    let mut collector = ErrorCollector::new();
    assert!(LayoutSpecificationValidator::default().validate(&spec, &raw(&[("A", "")]), &mut collector));
}

// =============================================================================
// Validation Tests
// =============================================================================

/// Field2 before Field1 under constraint Field1 -> Field2 is one violation.
#[test]
fn test_ordering_violation_reported_once() {
    let patches = vec![patch(
        "base",
        VersionRange::all(),
        vec![
            LayoutPatchOperation::add_field("Field1", ExpectedField::at_least(1)),
            LayoutPatchOperation::add_field("Field2", ExpectedField::at_least(1)),
            LayoutPatchOperation::add_ordering("Field1", "Field2"),
        ],
    )];
    let spec = LayoutSpecificationBuilder::new().build(&v(1, 0, 0), &patches).unwrap();

    let mut collector = ErrorCollector::new();
    let ok = LayoutSpecificationValidator::default().validate(
        &spec,
        &raw(&[("Field2", "A"), ("Field1", "B")]),
        &mut collector,
    );

    assert!(!ok);
    assert_eq!(collector.len(), 1);
    assert_eq!(count(&collector, subjects::FIELD_ORDERING_VIOLATION), 1);
    let body = collector.logs()[0].body();
    assert!(body.contains("Field1") && body.contains("Field2"));
}

/// Strict reports exactly one undeclared key; permissive reports none.
#[test]
fn test_strictness() {
    let patches = vec![patch(
        "base",
        VersionRange::all(),
        vec![LayoutPatchOperation::add_field("Known", ExpectedField::default())],
    )];
    let spec = LayoutSpecificationBuilder::new().build(&v(1, 0, 0), &patches).unwrap();
    let data = raw(&[("Known", "1"), ("Stranger", "2")]);

    let mut strict = ErrorCollector::new();
    LayoutSpecificationValidator::new(UnexpectedFieldStrictness::Strict).validate(&spec, &data, &mut strict);
    assert_eq!(count(&strict, subjects::UNEXPECTED_FIELD), 1);

    let mut permissive = ErrorCollector::new();
    LayoutSpecificationValidator::new(UnexpectedFieldStrictness::Permissive)
        .validate(&spec, &data, &mut permissive);
    assert_eq!(count(&permissive, subjects::UNEXPECTED_FIELD), 0);
}

/// One call reports every problem, not just the first.
#[test]
fn test_all_findings_reported() {
    let patches = vec![patch(
        "base",
        VersionRange::all(),
        vec![
            LayoutPatchOperation::add_field("Once", ExpectedField::exactly_once()),
            LayoutPatchOperation::add_field("Needed", ExpectedField::at_least(1)),
            LayoutPatchOperation::add_field("Also", ExpectedField::at_least(3)),
        ],
    )];
    let spec = LayoutSpecificationBuilder::new().build(&v(1, 0, 0), &patches).unwrap();

    let mut collector = ErrorCollector::new();
    let ok = LayoutSpecificationValidator::new(UnexpectedFieldStrictness::Strict).validate(
        &spec,
        &raw(&[("Once", "1"), ("Once", "2"), ("X", ""), ("Y", "")]),
        &mut collector,
    );

    assert!(!ok);
    assert_eq!(count(&collector, subjects::DUPLICATE_FIELD), 1);
    assert_eq!(count(&collector, subjects::MISSING_REQUIRED_FIELD), 2);
    assert_eq!(count(&collector, subjects::UNEXPECTED_FIELD), 2);
}

/// Pre-existing findings do not taint a clean call.
#[test]
fn test_verdict_scoped_to_call() {
    let spec = LayoutSpecificationBuilder::new().build(&v(1, 0, 0), &[]).unwrap();
    let mut collector = ErrorCollector::new();
    collector.add(ErrorLog::new("Earlier", "finding"));

    assert!(LayoutSpecificationValidator::default().validate(&spec, &raw(&[("A", "1")]), &mut collector));
    assert_eq!(collector.len(), 1);
}

/// Same input validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let patches = vec![patch(
        "base",
        VersionRange::all(),
        vec![
            LayoutPatchOperation::add_field("B", ExpectedField::exactly_once()),
            LayoutPatchOperation::add_field("A", ExpectedField::exactly_once()),
        ],
    )];
    let spec = LayoutSpecificationBuilder::new().build(&v(1, 0, 0), &patches).unwrap();
    let data = raw(&[("Z", ""), ("B", ""), ("B", "")]);

    let mut first = ErrorCollector::new();
    LayoutSpecificationValidator::new(UnexpectedFieldStrictness::Strict).validate(&spec, &data, &mut first);

    for _ in 0..20 {
        let mut again = ErrorCollector::new();
        LayoutSpecificationValidator::new(UnexpectedFieldStrictness::Strict).validate(&spec, &data, &mut again);
        assert_eq!(again.logs(), first.logs());
    }
}
