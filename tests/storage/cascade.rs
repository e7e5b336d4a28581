//! Integration tests for cascading deletes

use coursebook_storage::Catalog;

#[test]
fn deleting_course_type_removes_its_offerings_and_registrations() {
    let mut cat = Catalog::new();
    let beginner = cat.add_course_type("Beginner").unwrap();
    let advanced = cat.add_course_type("Advanced").unwrap();
    let piano = cat.add_course("Piano").unwrap();
    let o1 = cat.create_offering(beginner, piano).unwrap();
    let o2 = cat.create_offering(advanced, piano).unwrap();
    let r1 = cat.register_student("Alice", o1).unwrap();
    let r2 = cat.register_student("Bob", o2).unwrap();

    let cascade = cat.delete_course_type(beginner).unwrap();

    assert_eq!(cascade.offerings, vec![o1]);
    assert_eq!(cascade.registrations, vec![r1]);
    assert!(cat.offering(o1).is_none());
    assert!(cat.registration(r1).is_none());
    assert!(cat.registration(r2).is_some());
    assert!(cat.course(piano).is_some());
    assert!(cat.dangling_references().is_empty());
}

#[test]
fn deleting_course_spans_every_type() {
    let mut cat = Catalog::new();
    let a = cat.add_course_type("A").unwrap();
    let b = cat.add_course_type("B").unwrap();
    let piano = cat.add_course("Piano").unwrap();
    let violin = cat.add_course("Violin").unwrap();
    cat.create_offering(a, piano).unwrap();
    cat.create_offering(b, piano).unwrap();
    let kept = cat.create_offering(a, violin).unwrap();

    let cascade = cat.delete_course(piano).unwrap();

    assert_eq!(cascade.offerings.len(), 2);
    let remaining: Vec<_> = cat.offerings().iter().map(|o| o.id).collect();
    assert_eq!(remaining, vec![kept]);
    assert_eq!(cat.course_types().len(), 2);
}

#[test]
fn deleting_unused_entity_cascades_nothing() {
    let mut cat = Catalog::new();
    let t = cat.add_course_type("Lonely").unwrap();
    let cascade = cat.delete_course_type(t).unwrap();
    assert!(cascade.is_empty());
    assert!(cat.course_types().is_empty());
}

#[test]
fn surviving_rows_keep_their_order() {
    let mut cat = Catalog::new();
    let t = cat.add_course_type("T").unwrap();
    let c = cat.add_course("C").unwrap();
    let o = cat.create_offering(t, c).unwrap();
    let names = ["Ann", "Ben", "Cat", "Dan"];
    let ids: Vec<_> = names
        .iter()
        .map(|n| cat.register_student(*n, o).unwrap())
        .collect();

    cat.delete_offering(o).unwrap();
    let o = cat.create_offering(t, c).unwrap();
    cat.register_student("Eve", o).unwrap();

    assert!(ids.iter().all(|id| cat.registration(*id).is_none()));
    let students: Vec<_> = cat.list_all().map(|v| v.registration.student_name.clone()).collect();
    assert_eq!(students, vec!["Eve"]);
}
