//! Round-trip behaviour of the codec through its public API

mod common;

use common::{codec, elements, init_tracing, registry, roundtrip, wrapper_codec, Order, A};
use polycache_codec::{Cacheable, Codec, CollectionKind, Error, MapKind, TypeRegistry, Value};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[test]
fn test_null_is_zero_bytes() {
    let codec = codec();
    let bytes = codec.encode(&Value::Null).unwrap();
    assert!(bytes.is_empty());
    assert!(codec.decode(&bytes).unwrap().is_null());
}

#[test]
fn test_two_field_list_scenario() {
    let codec = codec();
    let list = Value::list([Value::object(A::new(1, "x")), Value::object(A::new(2, "y"))]);

    let bytes = codec.encode(&list).unwrap();
    assert_eq!(
        String::from_utf8(bytes.clone()).unwrap(),
        r#"[{"@class":"demo.A","id":1,"name":"x"},{"@class":"demo.A","id":2,"name":"y"}]"#
    );

    let decoded = codec.decode(&bytes).unwrap();
    let items = elements(&decoded);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].downcast_ref::<A>(), Some(&A::new(1, "x")));
    assert_eq!(items[1].downcast_ref::<A>(), Some(&A::new(2, "y")));
}

#[test]
fn test_complex_object_keeps_type_and_fields() {
    init_tracing();
    let codec = codec();
    let order = Order {
        number: 42,
        lines: vec![A::new(1, "bolt"), A::new(2, "nut")],
        note: None,
        total: 19.75,
    };

    let bytes = codec.encode(&Value::object(order.clone())).unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.starts_with(r#"{"@class":"demo.Order","#), "{text}");

    let decoded = codec.decode(&bytes).unwrap();
    assert_eq!(decoded.downcast_ref::<Order>(), Some(&order));
}

#[test]
fn test_list_of_objects_keeps_length_types_and_order() {
    let codec = codec();
    let originals: Vec<A> = (0..25).map(|i| A::new(i, &format!("item-{i}"))).collect();
    let list = Value::list(originals.iter().cloned().map(Value::object));

    let decoded = roundtrip(&codec, &list);
    let items = elements(&decoded);
    assert_eq!(items.len(), originals.len());
    for (item, original) in items.iter().zip(&originals) {
        assert_eq!(item.downcast_ref::<A>(), Some(original));
    }
}

#[test]
fn test_list_members_that_are_null_are_skipped() {
    let codec = codec();
    let list = Value::list([Value::from(1), Value::Null, Value::from(2)]);
    assert_eq!(codec.encode(&list).unwrap(), b"[1,2]");
}

#[rstest]
#[case("AllowList")]
#[case("Set")]
#[case("DataSet")]
#[case("Vec")]
#[case("SiteMap")]
#[case("demo.Missing")]
fn test_labelled_pairs_round_trip_unchanged(#[case] label: &str) {
    let codec = codec();
    let pair = Value::list([Value::from(label), Value::list([1, 2, 2])]);
    assert_eq!(roundtrip(&codec, &pair), pair);

    let tagged = Value::list([Value::list([
        Value::from(label),
        Value::map([("id", 1)]),
    ])]);
    assert_eq!(roundtrip(&codec, &tagged), tagged);
}

#[test]
fn test_set_keeps_size_and_membership() {
    let codec = codec();
    let set = Value::collection(
        CollectionKind::UnorderedSet,
        [A::new(1, "x"), A::new(2, "y"), A::new(3, "z")].map(Value::object),
    );

    let decoded = roundtrip(&codec, &set);
    let collection = decoded.as_collection().unwrap();
    assert_eq!(collection.len(), 3);
    for member in set.as_collection().unwrap().iter() {
        assert!(collection.contains(member), "missing {member:?}");
    }
}

#[test]
fn test_set_subtype_is_not_preserved_in_legacy_form() {
    let codec = codec();
    let sorted = Value::collection(CollectionKind::SortedSet, ["b", "a"]);
    let decoded = roundtrip(&codec, &sorted);
    assert_eq!(decoded.as_collection().unwrap().kind(), CollectionKind::List);
    assert_eq!(decoded, Value::list(["a", "b"]));
}

#[test]
fn test_wrapper_emission_preserves_set_subtype() {
    let codec = wrapper_codec();
    let sorted = Value::collection(CollectionKind::SortedSet, ["b", "a"]);

    let bytes = codec.encode(&sorted).unwrap();
    assert_eq!(bytes, br#"["std::collections::BTreeSet",["a","b"]]"#);
    assert_eq!(codec.decode(&bytes).unwrap(), sorted);

    // default-kind lists stay in legacy form
    let list = Value::list([1, 2]);
    assert_eq!(codec.encode(&list).unwrap(), b"[1,2]");
}

#[test]
fn test_legacy_and_wrapper_forms_decode_to_equivalent_elements() {
    let codec = codec();
    let legacy = br#"[{"@class":"demo.A","id":1,"name":"x"},{"@class":"demo.A","id":2,"name":"y"}]"#;
    let wrapper = br#"["java.util.ArrayList",[{"@class":"demo.A","id":1,"name":"x"},{"@class":"demo.A","id":2,"name":"y"}]]"#;

    let from_legacy = codec.decode(legacy).unwrap();
    let from_wrapper = codec.decode(wrapper).unwrap();
    assert_eq!(elements(&from_legacy), elements(&from_wrapper));
    assert_eq!(from_legacy, from_wrapper);
}

#[test]
fn test_map_keeps_keys_and_never_exposes_discriminator() {
    let codec = codec();
    let map = Value::map([
        ("first", Value::object(A::new(1, "x"))),
        ("second", Value::from(2)),
        ("third", Value::list(["a", "b"])),
    ]);

    let bytes = codec.encode(&map).unwrap();
    assert!(!String::from_utf8_lossy(&bytes).contains("@class"));

    let decoded = roundtrip(&codec, &map);
    let decoded = decoded.as_map().unwrap();
    let mut keys = decoded.keys();
    keys.sort();
    assert_eq!(keys, ["first", "second", "third"]);
    assert!(!decoded.contains_key("@class"));
    assert_eq!(decoded.get("second"), Some(Value::from(2)));
    assert_eq!(decoded.get("third"), Some(Value::list(["a", "b"])));
}

#[test]
fn test_map_values_come_back_generic_unless_read_typed() {
    let codec = codec();
    let map = Value::map([("a", Value::object(A::new(1, "x")))]);
    let bytes = codec.encode(&map).unwrap();

    let untyped = codec.decode(&bytes).unwrap();
    let value = untyped.as_map().unwrap().get("a").unwrap();
    assert!(value.downcast_ref::<A>().is_none());
    assert_eq!(value, Value::map([("id", Value::from(1)), ("name", Value::from("x"))]));

    let typed: HashMap<String, A> = codec.decode_map::<String, A, _>(&bytes).unwrap().unwrap();
    assert_eq!(typed.get("a"), Some(&A::new(1, "x")));
}

#[test]
fn test_tagged_map_elements_keep_their_kind() {
    let codec = codec();
    let list = Value::list([
        Value::map_of(MapKind::InsertionOrdered, [("z", 1), ("a", 2)]),
        Value::map_of(MapKind::Concurrent, [("k", "v")]),
    ]);

    let bytes = codec.encode(&list).unwrap();
    assert!(String::from_utf8_lossy(&bytes).starts_with(r#"[{"@class":"indexmap::IndexMap","z":1,"a":2}"#));

    let decoded = codec.decode(&bytes).unwrap();
    let items = elements(&decoded);
    assert_eq!(items[0].as_map().unwrap().kind(), MapKind::InsertionOrdered);
    assert_eq!(items[0].as_map().unwrap().keys(), ["z", "a"]);
    assert_eq!(items[1].as_map().unwrap().kind(), MapKind::Concurrent);
    assert_eq!(decoded, list);
}

#[test]
fn test_unknown_types_degrade_without_failing() {
    init_tracing();
    let writer = codec();
    let reader = Codec::new(TypeRegistry::new());

    let list = Value::list([Value::object(A::new(1, "x")), Value::from("plain")]);
    let bytes = writer.encode(&list).unwrap();

    let decoded = reader.decode(&bytes).unwrap();
    let items = elements(&decoded);
    assert_eq!(
        items[0],
        Value::map([("id", Value::from(1)), ("name", Value::from("x"))])
    );
    assert_eq!(items[1], Value::from("plain"));
}

#[test]
fn test_renamed_type_reads_through_alias() {
    let mut registry = registry();
    registry.register_alias::<A>("demo.LegacyA");
    let codec = Codec::new(registry);

    let decoded = codec
        .decode(br#"[{"@class":"demo.LegacyA","id":7,"name":"old"}]"#)
        .unwrap();
    assert_eq!(elements(&decoded)[0].downcast_ref::<A>(), Some(&A::new(7, "old")));

    // writes always use the canonical name
    let bytes = codec.encode(&Value::object(A::new(7, "old"))).unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains(r#""@class":"demo.A""#));
}

#[test]
fn test_malformed_input_is_rejected() {
    let codec = codec();
    let inputs: [&[u8]; 5] = [b"[{", b"{]", b"\xff\xfe", b"tru", b"[1,2,]"];
    for input in inputs {
        match codec.decode(input) {
            Err(Error::MalformedDocument { .. }) => {}
            other => panic!("{input:?} decoded to {other:?}"),
        }
    }
}

#[test]
fn test_non_finite_floats_fail_to_encode() {
    let codec = codec();
    let err = codec.encode(&Value::list([1.0, f64::NAN])).unwrap_err();
    assert!(matches!(err, Error::EncodingFailure { .. }));
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Celsius(f64);

impl Cacheable for Celsius {}

#[test]
fn test_object_without_fields_cannot_carry_a_tag() {
    let codec = codec();
    let err = codec.encode(&Value::object(Celsius(21.5))).unwrap_err();
    match err {
        Error::EncodingFailure { type_name, .. } => {
            assert!(type_name.ends_with("Celsius"), "{type_name}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_scalars_encode_bare() {
    let codec = codec();
    assert_eq!(codec.encode(&Value::from("hi")).unwrap(), br#""hi""#);
    assert_eq!(codec.encode(&Value::from(12)).unwrap(), b"12");
    assert_eq!(codec.encode(&Value::from(false)).unwrap(), b"false");
}

#[test]
fn test_typed_collection_retrieval() {
    let codec = codec();
    let list = Value::list([A::new(1, "x"), A::new(2, "y"), A::new(1, "x")].map(Value::object));
    let bytes = codec.encode(&list).unwrap();

    let as_vec: Vec<A> = codec.decode_collection::<A, _>(&bytes).unwrap().unwrap();
    assert_eq!(as_vec, vec![A::new(1, "x"), A::new(2, "y"), A::new(1, "x")]);

    let as_set: HashSet<A> = codec.decode_collection::<A, _>(&bytes).unwrap().unwrap();
    assert_eq!(as_set.len(), 2);

    // unregistered element types still read through the typed call
    let reader = Codec::new(TypeRegistry::new());
    let via_generic: Vec<A> = reader.decode_collection::<A, _>(&bytes).unwrap().unwrap();
    assert_eq!(via_generic, as_vec);
}

#[test]
fn test_typed_retrieval_of_null_and_mismatches() {
    let codec = codec();
    assert!(codec.decode_collection::<A, Vec<A>>(&[]).unwrap().is_none());
    assert!(codec
        .decode_map::<String, u32, HashMap<String, u32>>(&[])
        .unwrap()
        .is_none());

    let err = codec
        .decode_collection::<u32, Vec<u32>>(br#"{"a":1}"#)
        .unwrap_err();
    assert!(matches!(err, Error::Conversion { .. }));

    let err = codec
        .decode_map::<String, u32, HashMap<String, u32>>(b"[1,2]")
        .unwrap_err();
    assert!(matches!(err, Error::Conversion { .. }));
}

#[test]
fn test_typed_map_with_numeric_keys() {
    let codec = codec();
    let map = Value::map([("1", "one"), ("2", "two")]);
    let bytes = codec.encode(&map).unwrap();

    let typed: HashMap<u32, String> = codec.decode_map::<u32, String, _>(&bytes).unwrap().unwrap();
    assert_eq!(typed.get(&1).map(String::as_str), Some("one"));
    assert_eq!(typed.get(&2).map(String::as_str), Some("two"));
}

#[test]
fn test_codec_is_shared_across_threads() {
    let codec = Arc::new(codec());

    std::thread::scope(|scope| {
        for worker in 0..8u32 {
            let codec = Arc::clone(&codec);
            scope.spawn(move || {
                for i in 0..50 {
                    let original = A::new(worker * 1000 + i, &format!("w{worker}-{i}"));
                    let list = Value::list([Value::object(original.clone())]);
                    let decoded = roundtrip(&codec, &list);
                    assert_eq!(elements(&decoded)[0].downcast_ref::<A>(), Some(&original));
                }
            });
        }
    });
}
