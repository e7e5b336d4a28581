//! Integration tests for typed entity ids

use std::collections::HashSet;

use coursebook_foundation::{
    CourseId, CourseTypeId, EntityId, EntityKind, EntityRef, OfferingId, RegistrationId,
};

#[test]
fn typed_ids_share_the_entity_space() {
    let raw = EntityId::new(5);
    let t = CourseTypeId::new(raw);
    let c = CourseId::new(raw);

    assert_eq!(t.entity(), c.entity());
    assert_eq!(EntityId::from(t), raw);
    assert_ne!(EntityRef::from(t), EntityRef::from(c));
}

#[test]
fn prefixes_distinguish_kinds() {
    let raw = EntityId::new(8);
    let rendered: Vec<String> = vec![
        CourseTypeId::new(raw).to_string(),
        CourseId::new(raw).to_string(),
        OfferingId::new(raw).to_string(),
        RegistrationId::new(raw).to_string(),
    ];
    assert_eq!(rendered, vec!["t8", "c8", "o8", "r8"]);
}

#[test]
fn parse_error_names_expected_prefix() {
    let err = "x1".parse::<OfferingId>().unwrap_err();
    assert_eq!(err.kind, EntityKind::Offering);
    assert_eq!(err.prefix, 'o');
    assert_eq!(err.to_string(), "invalid offering id: \"x1\" (expected o<number>)");
}

#[test]
fn ids_hash_by_value() {
    let set: HashSet<_> = [1, 2, 2, 3]
        .into_iter()
        .map(|n| CourseId::new(EntityId::new(n)))
        .collect();
    assert_eq!(set.len(), 3);
}
