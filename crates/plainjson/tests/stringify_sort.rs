use plainjson::Options;
use plainjson::dynamic::{Dynamic, Member, ObjectMap, Record};

fn sorted() -> Options {
    Options {
        sort_keys: true,
        ..Options::default()
    }
}

fn sample() -> ObjectMap {
    let mut m = ObjectMap::new();
    m.set("zebra", 1i32);
    m.set("apple", 2i32);
    m.set("mango", 3i32);
    m
}

#[test]
fn insertion_order_is_the_default() {
    let out = plainjson::stringify(&sample(), &Options::default()).unwrap();
    assert_eq!(out, r#"{"zebra":1,"apple":2,"mango":3}"#);
}

#[test]
fn sort_keys_orders_ordinally() {
    let out = plainjson::stringify(&sample(), &sorted()).unwrap();
    assert_eq!(out, r#"{"apple":2,"mango":3,"zebra":1}"#);
}

#[test]
fn ordinal_order_is_case_sensitive() {
    let mut m = ObjectMap::new();
    m.set("b", 1i32);
    m.set("A", 2i32);
    m.set("a", 3i32);
    // Byte-wise: uppercase sorts before lowercase.
    let out = plainjson::stringify(&m, &sorted()).unwrap();
    assert_eq!(out, r#"{"A":2,"a":3,"b":1}"#);
}

#[test]
fn sorting_applies_to_nested_maps() {
    let mut inner = ObjectMap::new();
    inner.set("z", 1i32);
    inner.set("a", 2i32);
    let mut outer = ObjectMap::new();
    outer.set("wrap", inner);
    let out = plainjson::stringify(&outer, &sorted()).unwrap();
    assert_eq!(out, r#"{"wrap":{"a":2,"z":1}}"#);
}

#[test]
fn sorting_does_not_disturb_the_source() {
    let m = sample();
    let _ = plainjson::stringify(&m, &sorted()).unwrap();
    let out = plainjson::stringify(&m, &Options::default()).unwrap();
    assert_eq!(out, r#"{"zebra":1,"apple":2,"mango":3}"#);
}

struct TwoFields {
    b: i32,
    a: i32,
}

impl Dynamic for TwoFields {
    fn type_name(&self) -> &str {
        "TwoFields"
    }

    fn as_record(&self) -> Option<&dyn Record> {
        Some(self)
    }
}

impl Record for TwoFields {
    fn fields(&self) -> Vec<Member<'_>> {
        vec![Member::new("b", &self.b), Member::new("a", &self.a)]
    }
}

#[test]
fn records_sort_like_any_map() {
    let r = TwoFields { b: 1, a: 2 };
    assert_eq!(
        plainjson::stringify(&r, &Options::default()).unwrap(),
        r#"{"b":1,"a":2}"#
    );
    assert_eq!(
        plainjson::stringify(&r, &sorted()).unwrap(),
        r#"{"a":2,"b":1}"#
    );
}
