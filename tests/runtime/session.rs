//! Integration tests for session view state

use coursebook::runtime::{EditMode, EditTarget, Session, Tab};
use coursebook::foundation::{ErrorKind, Field};

#[test]
fn form_requires_both_selections() {
    let mut s = Session::new();
    let t = s.add_course_type("Beginner").unwrap();
    s.add_course("Piano").unwrap();

    s.select_course_type(Some(t)).unwrap();
    assert_eq!(
        s.submit_offering().unwrap_err().kind,
        ErrorKind::ValidationEmpty(Field::CourseSelection)
    );
    assert!(s.catalog().offerings().is_empty());
}

#[test]
fn form_resets_after_submit() {
    let mut s = Session::new();
    let t = s.add_course_type("Beginner").unwrap();
    let c = s.add_course("Piano").unwrap();
    s.select_course_type(Some(t)).unwrap();
    s.select_course(Some(c)).unwrap();

    let o = s.submit_offering().unwrap();
    assert_eq!(s.catalog().offering(o).unwrap().name, "Beginner - Piano");
    assert_eq!(s.offering_form().course_type, None);
    assert_eq!(s.offering_form().course, None);
}

#[test]
fn deleting_edited_entity_leaves_edit_mode() {
    let mut s = Session::new();
    let c = s.add_course("Piano").unwrap();
    s.begin_edit(EditTarget::Course(c)).unwrap();
    assert_eq!(s.edit_mode(), EditMode::Editing(EditTarget::Course(c)));

    s.delete_course(c).unwrap();
    assert_eq!(s.edit_mode(), EditMode::Idle);
}

#[test]
fn visible_offerings_follow_filter() {
    let mut s = Session::new();
    let a = s.add_course_type("A").unwrap();
    let b = s.add_course_type("B").unwrap();
    let c = s.add_course("C").unwrap();
    s.create_offering(a, c).unwrap();
    let ob = s.create_offering(b, c).unwrap();

    s.set_type_filter(Some(b)).unwrap();
    let visible: Vec<_> = s.visible_offerings().map(|o| o.id).collect();
    assert_eq!(visible, vec![ob]);

    s.set_type_filter(None).unwrap();
    assert_eq!(s.visible_offerings().count(), 2);
}

#[test]
fn tabs_parse_by_name() {
    for tab in Tab::ALL {
        assert_eq!(tab.name().parse::<Tab>().unwrap(), tab);
    }
    assert!("bogus".parse::<Tab>().is_err());
}
