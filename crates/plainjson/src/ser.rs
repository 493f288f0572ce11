//! Serde integration: built plain trees serialize into any serde sink.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::{Number, PlainValue};

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Number::Double(d) => serializer.serialize_f64(*d),
            // Decimals carry more precision than f64; emit the canonical
            // string form rather than rounding.
            Number::Decimal(d) => serializer.serialize_str(&d.to_string()),
        }
    }
}

impl Serialize for PlainValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PlainValue::Null => serializer.serialize_unit(),
            PlainValue::Text(s) => serializer.serialize_str(s),
            PlainValue::Number(n) => n.serialize(serializer),
            PlainValue::Bool(b) => serializer.serialize_bool(*b),
            PlainValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            PlainValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
