//! Integration tests for filtered and joined views

use coursebook_storage::Catalog;

#[test]
fn filter_by_type_matches_and_keeps_order() {
    let mut cat = Catalog::new();
    let a = cat.add_course_type("A").unwrap();
    let b = cat.add_course_type("B").unwrap();
    let piano = cat.add_course("Piano").unwrap();
    let violin = cat.add_course("Violin").unwrap();
    let o1 = cat.create_offering(a, piano).unwrap();
    let o2 = cat.create_offering(b, piano).unwrap();
    let o3 = cat.create_offering(a, violin).unwrap();

    let only_a: Vec<_> = cat.filter_by_type(Some(a)).map(|o| o.id).collect();
    assert_eq!(only_a, vec![o1, o3]);

    let all: Vec<_> = cat.filter_by_type(None).map(|o| o.id).collect();
    assert_eq!(all, vec![o1, o2, o3]);
}

#[test]
fn filter_by_unknown_type_is_empty() {
    let mut cat = Catalog::new();
    let a = cat.add_course_type("A").unwrap();
    let c = cat.add_course("C").unwrap();
    cat.create_offering(a, c).unwrap();
    cat.delete_course_type(a).unwrap();
    assert_eq!(cat.filter_by_type(Some(a)).count(), 0);
}

#[test]
fn list_all_joins_offering_names() {
    let mut cat = Catalog::new();
    let a = cat.add_course_type("Beginner").unwrap();
    let piano = cat.add_course("Piano").unwrap();
    let violin = cat.add_course("Violin").unwrap();
    let o1 = cat.create_offering(a, piano).unwrap();
    let o2 = cat.create_offering(a, violin).unwrap();
    cat.register_student("Alice", o2).unwrap();
    cat.register_student("Bob", o1).unwrap();

    let rows: Vec<_> = cat
        .list_all()
        .map(|v| (v.registration.student_name.clone(), v.offering_name().to_string()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Alice".to_string(), "Beginner - Violin".to_string()),
            ("Bob".to_string(), "Beginner - Piano".to_string()),
        ]
    );
}

#[test]
fn list_by_offering_isolates_offerings() {
    let mut cat = Catalog::new();
    let t = cat.add_course_type("T").unwrap();
    let c = cat.add_course("C").unwrap();
    let o1 = cat.create_offering(t, c).unwrap();
    let o2 = cat.create_offering(t, c).unwrap();
    cat.register_student("Alice", o1).unwrap();
    cat.register_student("Bob", o2).unwrap();
    cat.register_student("Alice", o1).unwrap();

    let names: Vec<_> = cat.list_by_offering(o1).map(|r| r.student_name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Alice"]);
    assert_eq!(cat.list_by_offering(o2).count(), 1);
}
