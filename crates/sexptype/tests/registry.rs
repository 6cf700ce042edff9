//! Integration tests for the public registry, classifier and dispatch API.

use std::thread;

use rhizome_sexptype::{
    Arms, SexpError, SexpType, TagKey, TagSchema, all, classify, dispatch, dispatch_value,
    lookup_by_id, lookup_by_name, registry,
};
use serde_json::json;

#[test]
fn test_unknown_names_fail() {
    for name in ["numeric", "vector", "function ", "Double", "object"] {
        match lookup_by_name(name) {
            Err(SexpError::UnknownTag(TagKey::Name(got))) => assert_eq!(got, name),
            other => panic!("{}: unexpected {:?}", name, other),
        }
    }
}

#[test]
fn test_unknown_ids_fail() {
    let known: Vec<u32> = all().map(|tag| u32::from(tag.id())).collect();
    for id in 0..=128u32 {
        assert_eq!(lookup_by_id(id).is_ok(), known.contains(&id), "id {}", id);
    }
}

#[test]
fn test_error_messages() {
    let err = lookup_by_name("vector").unwrap_err();
    assert_eq!(err.to_string(), "unknown tag: name 'vector'");
    let err = lookup_by_id(12).unwrap_err();
    assert_eq!(err.to_string(), "unknown tag: id 12");
}

#[test]
fn test_json_host_never_yields_memory_management_tags() {
    let values = [
        json!(null),
        json!(false),
        json!(0),
        json!(u64::MAX),
        json!(-1.5),
        json!(""),
        json!([]),
        json!([null, 1, "x"]),
        json!({}),
        json!({"nested": {"a": [1.0]}}),
    ];
    for value in &values {
        let tag = classify(value).unwrap();
        assert!(!tag.is_memory_management(), "{} -> {}", value, tag);
    }
}

#[test]
fn test_json_integers_outside_int32_are_double() {
    assert_eq!(classify(&json!(3_000_000_000i64)).unwrap(), SexpType::Double);
    assert_eq!(classify(&json!(u64::MAX)).unwrap(), SexpType::Double);
    assert_eq!(classify(&json!(-3_000_000_000i64)).unwrap(), SexpType::Double);
    assert_eq!(classify(&json!(2_000_000_000)).unwrap(), SexpType::Integer);
}

#[test]
fn test_dispatch_value_on_json() {
    let size: Arms<&str> = [("list", "container"), ("character", "text")]
        .into_iter()
        .collect();
    assert_eq!(dispatch_value(&json!({"a": 1}), &size, "scalar"), "container");
    assert_eq!(dispatch_value(&json!("hi"), &size, "scalar"), "text");
    assert_eq!(dispatch_value(&json!(3), &size, "scalar"), "scalar");
}

#[test]
fn test_concurrent_reads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let arms: Arms<u8> = [("double", 8)].into_iter().collect();
                all()
                    .map(|tag| dispatch(tag, &arms, 0) as u32 + u32::from(tag.id()))
                    .sum::<u32>()
            })
        })
        .collect();
    let sums: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(sums.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_grouped_listing_covers_registry() {
    let grouped: usize = registry::by_group().values().map(Vec::len).sum();
    assert_eq!(grouped, all().count());
    assert_eq!(registry::by_group().keys().count(), 4);
}

#[test]
fn test_shipped_schema() {
    let schema = TagSchema::load_default().unwrap();
    schema.check().unwrap();
    assert_eq!(schema, TagSchema::from_registry());
    let entry = schema.find("double").unwrap();
    assert_eq!(lookup_by_id(entry.id).unwrap(), SexpType::Double);
}
