//! The plain-value tree: the closed, type-neutral result of conversion.

use rust_decimal::Decimal;

use crate::dynamic::{Dynamic, DynamicMap, OrderedList, Scalar};

/// Numeric payload of a plain value. The variant is chosen by the numeric
/// mode of the conversion call, not by the source type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Double(f64),
    Decimal(Decimal),
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::Double(d) => write!(f, "{}", d),
            Number::Decimal(d) => write!(f, "{}", d),
        }
    }
}

/// A converted value. Maps preserve insertion order and hold unique keys.
/// The tree is acyclic by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum PlainValue {
    Null,
    Text(String),
    Number(Number),
    Bool(bool),
    List(Vec<PlainValue>),
    Map(Vec<(String, PlainValue)>),
}

impl PlainValue {
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            PlainValue::Null | PlainValue::Text(_) | PlainValue::Number(_) | PlainValue::Bool(_)
        )
    }
}

/// A built tree classifies as its own shape, so re-parsing is a fixed point
/// and the writer accepts plain trees and raw values through one path.
impl Dynamic for PlainValue {
    fn type_name(&self) -> &str {
        match self {
            PlainValue::Null => "null",
            PlainValue::Text(_) => "String",
            PlainValue::Number(Number::Double(_)) => "f64",
            PlainValue::Number(Number::Decimal(_)) => "Decimal",
            PlainValue::Bool(_) => "bool",
            PlainValue::List(_) => "List",
            PlainValue::Map(_) => "Map",
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, PlainValue::Null)
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self {
            PlainValue::Text(s) => Some(Scalar::Str(s)),
            PlainValue::Number(Number::Double(d)) => Some(Scalar::F64(*d)),
            PlainValue::Number(Number::Decimal(d)) => Some(Scalar::Decimal(*d)),
            PlainValue::Bool(b) => Some(Scalar::Bool(*b)),
            _ => None,
        }
    }

    fn as_list(&self) -> Option<&dyn OrderedList> {
        match self {
            PlainValue::List(items) => Some(items),
            _ => None,
        }
    }

    fn as_dynamic_map(&self) -> Option<&dyn DynamicMap> {
        match self {
            PlainValue::Map(entries) => Some(entries),
            _ => None,
        }
    }
}
