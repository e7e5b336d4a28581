//! Integration tests for catalog lifecycle and validation

use chrono::{TimeZone, Utc};
use coursebook_foundation::{EntityRef, ErrorKind, Field, FixedClock};
use coursebook_storage::Catalog;

fn catalog() -> Catalog {
    Catalog::with_clock(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap(),
    ))
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn beginner_piano_alice() {
    let mut cat = catalog();
    let beginner = cat.add_course_type("Beginner").unwrap();
    let piano = cat.add_course("Piano").unwrap();
    let offering = cat.create_offering(beginner, piano).unwrap();
    assert_eq!(cat.offering(offering).unwrap().name, "Beginner - Piano");

    let alice = cat.register_student("Alice", offering).unwrap();
    let listed: Vec<_> = cat.list_by_offering(offering).map(|r| r.id).collect();
    assert_eq!(listed, vec![alice]);
    assert_eq!(
        cat.registration(alice).unwrap().registered_at_iso(),
        "2024-02-01T09:00:00.000Z"
    );

    cat.delete_offering(offering).unwrap();
    assert_eq!(cat.list_by_offering(offering).count(), 0);
    assert!(cat.list_all().all(|v| v.registration.student_name != "Alice"));
    assert!(cat.registration(alice).is_none());
    assert!(cat.dangling_references().is_empty());
}

// =============================================================================
// Empty input
// =============================================================================

#[test]
fn empty_names_leave_catalog_unchanged() {
    let mut cat = catalog();
    let t = cat.add_course_type("Beginner").unwrap();
    let c = cat.add_course("Piano").unwrap();
    let o = cat.create_offering(t, c).unwrap();

    let before = format!("{:?}", cat.snapshot());
    assert_eq!(
        cat.add_course_type("").unwrap_err().kind,
        ErrorKind::ValidationEmpty(Field::CourseTypeName)
    );
    assert_eq!(
        cat.add_course(" \t ").unwrap_err().kind,
        ErrorKind::ValidationEmpty(Field::CourseName)
    );
    assert_eq!(
        cat.register_student("\n", o).unwrap_err().kind,
        ErrorKind::ValidationEmpty(Field::StudentName)
    );
    assert_eq!(format!("{:?}", cat.snapshot()), before);
}

#[test]
fn rejected_input_does_not_consume_ids() {
    let mut cat = catalog();
    cat.add_course_type("").unwrap_err();
    assert_eq!(cat.add_course_type("Beginner").unwrap().to_string(), "t1");
}

// =============================================================================
// Renames
// =============================================================================

#[test]
fn rename_keeps_offering_snapshot() {
    let mut cat = catalog();
    let t = cat.add_course_type("A").unwrap();
    let c = cat.add_course("B").unwrap();
    let o = cat.create_offering(t, c).unwrap();

    cat.rename_course_type(t, "Z").unwrap();
    cat.rename_course(c, "Y").unwrap();

    assert_eq!(cat.course_type(t).unwrap().name, "Z");
    assert_eq!(cat.course(c).unwrap().name, "Y");
    assert_eq!(cat.offering(o).unwrap().name, "A - B");

    let renamed = cat.create_offering(t, c).unwrap();
    assert_eq!(cat.offering(renamed).unwrap().name, "Z - Y");
}

#[test]
fn unknown_ids_are_not_found() {
    let mut cat = catalog();
    let t = cat.add_course_type("A").unwrap();
    let c = cat.add_course("B").unwrap();
    cat.delete_course(c).unwrap();

    let err = cat.create_offering(t, c).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound(EntityRef::Course(c)));
    assert!(cat.rename_course(c, "Again").unwrap_err().is_not_found());
    assert!(cat.delete_course(c).unwrap_err().is_not_found());
    assert!(cat.offerings().is_empty());
}
