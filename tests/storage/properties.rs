//! Property tests for catalog invariants across random workloads

use std::collections::HashSet;

use coursebook_foundation::EntityId;
use coursebook_storage::Catalog;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    AddType(String),
    AddCourse(String),
    Offer(usize, usize),
    Register(String, usize),
    DeleteType(usize),
    DeleteCourse(usize),
    DeleteOffering(usize),
}

fn name() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("  ".to_string()), "[A-Za-z]{1,8}"]
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        name().prop_map(Step::AddType),
        name().prop_map(Step::AddCourse),
        (any::<usize>(), any::<usize>()).prop_map(|(t, c)| Step::Offer(t, c)),
        (name(), any::<usize>()).prop_map(|(n, o)| Step::Register(n, o)),
        any::<usize>().prop_map(Step::DeleteType),
        any::<usize>().prop_map(Step::DeleteCourse),
        any::<usize>().prop_map(Step::DeleteOffering),
    ]
}

fn pick<T: Copy>(ids: &[T], i: usize) -> Option<T> {
    (!ids.is_empty()).then(|| ids[i % ids.len()])
}

fn apply(cat: &mut Catalog, step: Step) {
    let types: Vec<_> = cat.course_types().iter().map(|t| t.id).collect();
    let courses: Vec<_> = cat.courses().iter().map(|c| c.id).collect();
    let offerings: Vec<_> = cat.offerings().iter().map(|o| o.id).collect();
    match step {
        Step::AddType(n) => {
            let _ = cat.add_course_type(n);
        }
        Step::AddCourse(n) => {
            let _ = cat.add_course(n);
        }
        Step::Offer(t, c) => {
            if let (Some(t), Some(c)) = (pick(&types, t), pick(&courses, c)) {
                cat.create_offering(t, c).unwrap();
            }
        }
        Step::Register(n, o) => {
            if let Some(o) = pick(&offerings, o) {
                let _ = cat.register_student(n, o);
            }
        }
        Step::DeleteType(i) => {
            if let Some(t) = pick(&types, i) {
                cat.delete_course_type(t).unwrap();
            }
        }
        Step::DeleteCourse(i) => {
            if let Some(c) = pick(&courses, i) {
                cat.delete_course(c).unwrap();
            }
        }
        Step::DeleteOffering(i) => {
            if let Some(o) = pick(&offerings, i) {
                cat.delete_offering(o).unwrap();
            }
        }
    }
}

proptest! {
    #[test]
    fn workload_preserves_invariants(steps in prop::collection::vec(step(), 0..60)) {
        let mut cat = Catalog::new();
        for s in steps {
            apply(&mut cat, s);
        }

        prop_assert!(cat.dangling_references().is_empty());

        let mut seen: HashSet<EntityId> = HashSet::new();
        for id in cat.course_types().iter().map(|r| r.id.entity())
            .chain(cat.courses().iter().map(|r| r.id.entity()))
            .chain(cat.offerings().iter().map(|r| r.id.entity()))
            .chain(cat.registrations().iter().map(|r| r.id.entity()))
        {
            prop_assert!(seen.insert(id), "duplicate id {}", id);
        }

        prop_assert!(cat.course_types().iter().all(|t| !t.name.trim().is_empty()));
        prop_assert!(cat.courses().iter().all(|c| !c.name.trim().is_empty()));
        prop_assert!(cat.registrations().iter().all(|r| !r.student_name.trim().is_empty()));
        prop_assert!(cat.list_all().all(|v| v.offering.is_some()));
    }
}
