#![cfg(feature = "json")]

use plainjson::{Number, Options, PlainValue};
use serde_json::json;

#[test]
fn json_values_flow_through_the_writer() {
    let v = json!({"a": 1, "s": "hi", "n": null, "list": [true, 2.5]});
    let out = plainjson::stringify(&v, &Options::default()).unwrap();
    assert_eq!(out, r#"{"a":1,"s":"hi","n":null,"list":[true,2.5]}"#);
}

#[test]
fn object_insertion_order_is_preserved() {
    let v = json!({"z": 1, "a": 2});
    let out = plainjson::stringify(&v, &Options::default()).unwrap();
    assert_eq!(out, r#"{"z":1,"a":2}"#);
    let sorted = Options {
        sort_keys: true,
        ..Options::default()
    };
    assert_eq!(
        plainjson::stringify(&v, &sorted).unwrap(),
        r#"{"a":2,"z":1}"#
    );
}

#[test]
fn json_values_parse_into_plain_trees() {
    let v = json!({"s": "hi", "n": 1, "gap": null});
    let tree = plainjson::parse(&v, &Options::default()).unwrap();
    assert_eq!(
        tree,
        PlainValue::Map(vec![
            ("s".to_string(), PlainValue::Text("hi".to_string())),
            ("n".to_string(), PlainValue::Number(Number::Double(1.0))),
            ("gap".to_string(), PlainValue::Null),
        ])
    );
}

#[test]
fn plain_trees_serialize_through_serde() {
    let v = json!({"s": "hi", "flag": true, "gap": null});
    let tree = plainjson::parse(&v, &Options::default()).unwrap();
    let round = serde_json::to_value(&tree).unwrap();
    assert_eq!(round["s"], json!("hi"));
    assert_eq!(round["flag"], json!(true));
    assert_eq!(round["gap"], json!(null));
}

#[test]
fn large_u64_keeps_its_width_in_direct_emission() {
    let v = json!(u64::MAX);
    let out = plainjson::stringify(&v, &Options::default()).unwrap();
    assert_eq!(out, "18446744073709551615");
}
