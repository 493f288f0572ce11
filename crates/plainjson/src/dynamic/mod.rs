//! The runtime-value abstraction consumed by classification.
//!
//! A host value opts into the shapes it supports by answering capability
//! probes. Every probe defaults to "capability absent"; classification
//! consults them in a fixed order (see [`crate::classify`]). Shapes overlap
//! on purpose (a type may be both indexable and enumerable) and the
//! waterfall decides which reading wins.

pub mod adapters;
#[cfg(feature = "json")]
mod json;

pub use adapters::{MapKey, MixedMap, ObjectMap};

use chrono::TimeDelta;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::Result;
use crate::temporal::Timestamp;

/// Terminal scalar shapes. Numeric widths are preserved so the writer can
/// format each one as its own type.
#[derive(Debug, Clone, Copy)]
pub enum Scalar<'a> {
    Str(&'a str),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Bool(bool),
    DateTime(Timestamp),
    Duration(TimeDelta),
    Guid(Uuid),
    /// An enumeration value, carried by symbolic label.
    Enum(&'a str),
}

/// A value produced mid-traversal: either borrowed from the source graph or
/// freshly built by a customization hook or a computed property.
pub enum DynValue<'a> {
    Borrowed(&'a dyn Dynamic),
    Owned(Box<dyn Dynamic + 'a>),
}

impl DynValue<'_> {
    pub fn get(&self) -> &dyn Dynamic {
        match self {
            DynValue::Borrowed(v) => *v,
            DynValue::Owned(b) => b.as_ref(),
        }
    }
}

/// Insertion-ordered, string-keyed open map: a value whose members are
/// attached at runtime rather than declared.
pub trait DynamicMap {
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a dyn Dynamic)> + 'a>;
}

/// Ordered, index-addressable sequence.
pub trait OrderedList {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn get(&self, index: usize) -> &dyn Dynamic;
}

/// Map whose keys are themselves runtime values of arbitrary type. Only
/// keys classifying as strings survive conversion; the rest are dropped.
pub trait UntypedMap {
    fn entries<'a>(&'a self)
    -> Box<dyn Iterator<Item = (&'a dyn Dynamic, &'a dyn Dynamic)> + 'a>;
}

/// Statically keyed map. When the key type is not a string type the whole
/// map renders empty; `entries` is only consulted when `string_keys` holds.
pub trait TypedMap {
    fn string_keys(&self) -> bool;
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a dyn Dynamic)> + 'a>;
}

/// Record-shaped value: stored data fields plus computed properties, merged
/// field-first in declaration order.
pub trait Record {
    fn fields(&self) -> Vec<Member<'_>>;
    fn properties(&self) -> Vec<Member<'_>> {
        Vec::new()
    }
}

/// One readable member of a record. The value slot is fallible so a host
/// accessor that fails surfaces as an error in value position.
pub struct Member<'a> {
    name: &'a str,
    name_hint: Option<&'a str>,
    excluded: bool,
    value: Result<DynValue<'a>>,
}

impl<'a> Member<'a> {
    pub fn new(name: &'a str, value: &'a dyn Dynamic) -> Self {
        Self {
            name,
            name_hint: None,
            excluded: false,
            value: Ok(DynValue::Borrowed(value)),
        }
    }

    /// Member whose value is computed rather than stored.
    pub fn owned(name: &'a str, value: Box<dyn Dynamic + 'a>) -> Self {
        Self {
            name,
            name_hint: None,
            excluded: false,
            value: Ok(DynValue::Owned(value)),
        }
    }

    /// Member whose accessor failed; the error propagates to the caller
    /// when the member is visited.
    pub fn failed(name: &'a str, error: crate::error::Error) -> Self {
        Self {
            name,
            name_hint: None,
            excluded: false,
            value: Err(error),
        }
    }

    /// Override the output name. An empty hint is ignored.
    pub fn renamed(mut self, hint: &'a str) -> Self {
        self.name_hint = Some(hint);
        self
    }

    /// Exclude this member from output.
    pub fn ignored(mut self) -> Self {
        self.excluded = true;
        self
    }

    pub fn is_excluded(&self) -> bool {
        self.excluded
    }

    pub fn output_name(&self) -> &'a str {
        match self.name_hint {
            Some(hint) if !hint.is_empty() => hint,
            _ => self.name,
        }
    }

    pub fn into_value(self) -> Result<DynValue<'a>> {
        self.value
    }
}

/// The runtime-value abstraction.
pub trait Dynamic {
    /// Unqualified runtime type name, reported to the result-transform seam
    /// and by display formatting.
    fn type_name(&self) -> &str;

    fn is_null(&self) -> bool {
        false
    }

    /// Wrapper capability: reveal the inner value before classification.
    fn unwrap_inner(&self) -> Option<&dyn Dynamic> {
        None
    }

    /// Export capability: substitute a plain-form value before
    /// classification. The substitute is classified from scratch.
    fn export_plain(&self) -> Option<Box<dyn Dynamic + '_>> {
        None
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        None
    }

    fn as_dynamic_map(&self) -> Option<&dyn DynamicMap> {
        None
    }

    fn as_list(&self) -> Option<&dyn OrderedList> {
        None
    }

    fn as_untyped_map(&self) -> Option<&dyn UntypedMap> {
        None
    }

    fn as_typed_map(&self) -> Option<&dyn TypedMap> {
        None
    }

    fn as_enumerable<'a>(
        &'a self,
    ) -> Option<Box<dyn Iterator<Item = Result<DynValue<'a>>> + 'a>> {
        None
    }

    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    /// Default textual form, used when JSON emission fails inside display
    /// formatting.
    fn fallback_text(&self) -> String {
        self.type_name().to_string()
    }
}

/// Single-pass hook application: the wrapper capability wins; the export
/// capability is consulted only when no wrapper is present, and the result
/// is never re-processed. A value needing unwrap and then export gets one
/// layer per visit.
pub(crate) fn unwrap_or_export(x: &dyn Dynamic) -> DynValue<'_> {
    if let Some(inner) = x.unwrap_inner() {
        DynValue::Borrowed(inner)
    } else if let Some(exported) = x.export_plain() {
        DynValue::Owned(exported)
    } else {
        DynValue::Borrowed(x)
    }
}

/// The emission path honors the export hook only; wrappers are a
/// conversion-side concern.
pub(crate) fn export_only(x: &dyn Dynamic) -> DynValue<'_> {
    match x.export_plain() {
        Some(exported) => DynValue::Owned(exported),
        None => DynValue::Borrowed(x),
    }
}
