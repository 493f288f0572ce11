//! `serde_json::Value` as a host value, so existing JSON trees flow
//! through classification unchanged. Objects keep insertion order via the
//! `preserve_order` feature.

use serde_json::Value;

use crate::dynamic::{Dynamic, DynamicMap, OrderedList, Scalar};

impl Dynamic for Value {
    fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::String(s) => Some(Scalar::Str(s)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Scalar::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Some(Scalar::U64(u))
                } else {
                    n.as_f64().map(Scalar::F64)
                }
            }
            _ => None,
        }
    }

    fn as_list(&self) -> Option<&dyn OrderedList> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    fn as_dynamic_map(&self) -> Option<&dyn DynamicMap> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    fn fallback_text(&self) -> String {
        self.to_string()
    }
}

impl DynamicMap for serde_json::Map<String, Value> {
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a dyn Dynamic)> + 'a> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v as &dyn Dynamic)))
    }
}
