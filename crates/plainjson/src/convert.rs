//! Recursive conversion from runtime values into the plain-value tree.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::classify::{Class, classify};
use crate::dynamic::{
    Dynamic, DynamicMap as _, OrderedList as _, Record as _, Scalar, TypedMap as _,
    UntypedMap as _, unwrap_or_export,
};
use crate::error::{Error, Result};
use crate::options::{NumberMode, Options};
use crate::value::{Number, PlainValue};

/// Per-node hook applied to every converted value, null and scalars
/// included, before it is placed in its parent container. Receives the
/// value's pre-hook runtime type name.
pub trait NodeTransform {
    fn transform(&self, value: PlainValue, orig_type_name: &str) -> PlainValue;
}

/// The default transform: returns the value unchanged.
pub struct Identity;

impl NodeTransform for Identity {
    fn transform(&self, value: PlainValue, _orig_type_name: &str) -> PlainValue {
        value
    }
}

pub struct Converter<'t> {
    options: Options,
    transform: &'t dyn NodeTransform,
}

impl Converter<'static> {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            transform: &Identity,
        }
    }
}

impl<'t> Converter<'t> {
    pub fn with_transform(options: Options, transform: &'t dyn NodeTransform) -> Self {
        Self { options, transform }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Convert a runtime value into a plain-value tree.
    pub fn parse(&self, value: &dyn Dynamic) -> Result<PlainValue> {
        self.parse_node(value)
    }

    /// Emit JSON text for a runtime value or an already-built plain tree.
    pub fn stringify(&self, value: &dyn Dynamic) -> Result<String> {
        crate::json::write_to_string(value, &self.options)
    }

    fn parse_node(&self, x: &dyn Dynamic) -> Result<PlainValue> {
        // The seam sees the type name from before any hook fires.
        let orig_type = x.type_name();
        if x.is_null() {
            return Ok(self.transform.transform(PlainValue::Null, orig_type));
        }
        let hooked = unwrap_or_export(x);
        let converted = self.parse_shape(hooked.get())?;
        Ok(self.transform.transform(converted, orig_type))
    }

    fn parse_shape(&self, x: &dyn Dynamic) -> Result<PlainValue> {
        if x.is_null() {
            return Ok(PlainValue::Null);
        }
        match classify(x) {
            Class::Scalar(s) => self.parse_scalar(s),
            Class::DynamicMap(m) => {
                let mut entries = Vec::new();
                for (key, value) in m.entries() {
                    map_insert(&mut entries, key.to_owned(), self.parse_node(value)?);
                }
                Ok(PlainValue::Map(entries))
            }
            Class::List(l) => {
                let mut items = Vec::with_capacity(l.len());
                for i in 0..l.len() {
                    items.push(self.parse_node(l.get(i))?);
                }
                Ok(PlainValue::List(items))
            }
            Class::UntypedMap(m) => {
                let mut entries = Vec::new();
                for (key, value) in m.entries() {
                    // Keys that are not strings are dropped, not an error.
                    let Some(Scalar::Str(key)) = key.as_scalar() else {
                        continue;
                    };
                    map_insert(&mut entries, key.to_owned(), self.parse_node(value)?);
                }
                Ok(PlainValue::Map(entries))
            }
            Class::TypedMap(m) => {
                // A non-string key type empties the whole map.
                let mut entries = Vec::new();
                if m.string_keys() {
                    for (key, value) in m.entries() {
                        map_insert(&mut entries, key.to_owned(), self.parse_node(value)?);
                    }
                }
                Ok(PlainValue::Map(entries))
            }
            Class::Enumerable(iter) => {
                let mut items = Vec::new();
                for item in iter {
                    let item = item?;
                    items.push(self.parse_node(item.get())?);
                }
                Ok(PlainValue::List(items))
            }
            Class::Record(r) => {
                let mut entries = Vec::new();
                for member in r.fields().into_iter().chain(r.properties()) {
                    if member.is_excluded() {
                        continue;
                    }
                    let name = member.output_name().to_owned();
                    let value = member.into_value()?;
                    map_insert(&mut entries, name, self.parse_node(value.get())?);
                }
                Ok(PlainValue::Map(entries))
            }
        }
    }

    fn parse_scalar(&self, s: Scalar<'_>) -> Result<PlainValue> {
        let v = match s {
            Scalar::Str(v) => PlainValue::Text(v.to_owned()),
            Scalar::Char(c) => PlainValue::Text(c.to_string()),
            Scalar::Bool(b) => PlainValue::Bool(b),
            Scalar::I8(v) => PlainValue::Number(self.to_number(Num::I(v as i64))?),
            Scalar::I16(v) => PlainValue::Number(self.to_number(Num::I(v as i64))?),
            Scalar::I32(v) => PlainValue::Number(self.to_number(Num::I(v as i64))?),
            Scalar::I64(v) => PlainValue::Number(self.to_number(Num::I(v))?),
            Scalar::U8(v) => PlainValue::Number(self.to_number(Num::U(v as u64))?),
            Scalar::U16(v) => PlainValue::Number(self.to_number(Num::U(v as u64))?),
            Scalar::U32(v) => PlainValue::Number(self.to_number(Num::U(v as u64))?),
            Scalar::U64(v) => PlainValue::Number(self.to_number(Num::U(v))?),
            Scalar::F32(v) => PlainValue::Number(self.to_number(Num::F32(v))?),
            Scalar::F64(v) => PlainValue::Number(self.to_number(Num::F(v))?),
            Scalar::Decimal(v) => PlainValue::Number(self.to_number(Num::D(v))?),
            Scalar::DateTime(ts) => PlainValue::Text(ts.to_round_trip()),
            Scalar::Duration(d) => PlainValue::Text(d.to_string()),
            Scalar::Guid(g) => PlainValue::Text(g.to_string()),
            Scalar::Enum(label) => PlainValue::Text(label.to_owned()),
        };
        Ok(v)
    }

    fn to_number(&self, n: Num) -> Result<Number> {
        Ok(match self.options.numbers {
            NumberMode::Double => Number::Double(match n {
                Num::I(v) => v as f64,
                Num::U(v) => v as f64,
                Num::F(v) => v,
                Num::F32(v) => v as f64,
                Num::D(v) => v
                    .to_f64()
                    .ok_or_else(|| Error::NumberRange(v.to_string()))?,
            }),
            NumberMode::Decimal => Number::Decimal(match n {
                Num::I(v) => Decimal::from(v),
                Num::U(v) => Decimal::from(v),
                Num::F(v) => {
                    Decimal::from_f64(v).ok_or_else(|| Error::NumberRange(v.to_string()))?
                }
                Num::F32(v) => {
                    Decimal::from_f32(v).ok_or_else(|| Error::NumberRange(v.to_string()))?
                }
                Num::D(v) => v,
            }),
        })
    }
}

enum Num {
    I(i64),
    U(u64),
    F(f64),
    F32(f32),
    D(Decimal),
}

// Dictionary-style insert: a repeated key keeps its original position and
// takes the newest value.
fn map_insert(entries: &mut Vec<(String, PlainValue)>, key: String, value: PlainValue) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => entries.push((key, value)),
    }
}

/// Human-oriented one-line formatter. Strings pass through raw, or
/// backtick-quoted when `show_detail` is set; everything else is rendered
/// as indented JSON, falling back to the value's own textual form if
/// emission fails. With `show_detail`, non-string output is prefixed with
/// the value's type name in angle brackets.
pub fn to_display_string(show_detail: bool, value: &dyn Dynamic, title: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(title) = title {
        out.push_str(title);
        out.push_str(": ");
    }
    let hooked = unwrap_or_export(value);
    let x = hooked.get();
    if x.is_null() {
        out.push_str("null");
        return out;
    }
    if let Some(Scalar::Str(s)) = x.as_scalar() {
        if show_detail {
            out.push('`');
            out.push_str(s);
            out.push('`');
        } else {
            out.push_str(s);
        }
        return out;
    }
    let options = Options {
        indent: true,
        ..Options::default()
    };
    let body = match Converter::new(options).stringify(x) {
        Ok(json) => json,
        Err(_) => x.fallback_text(),
    };
    if show_detail {
        out.push('<');
        out.push_str(x.type_name());
        out.push_str("> ");
    }
    out.push_str(&body);
    out
}
