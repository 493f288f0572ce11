//! The ordered shape waterfall shared by conversion and emission.

use crate::dynamic::{
    DynValue, Dynamic, DynamicMap, Member, OrderedList, Record, Scalar, TypedMap, UntypedMap,
};
use crate::error::Result;

/// Shape decision for one runtime value. Produced fresh on every visit and
/// never cached; the same runtime type may appear with instances needing
/// independent traversal.
pub enum Class<'a> {
    Scalar(Scalar<'a>),
    DynamicMap(&'a dyn DynamicMap),
    List(&'a dyn OrderedList),
    UntypedMap(&'a dyn UntypedMap),
    TypedMap(&'a dyn TypedMap),
    Enumerable(Box<dyn Iterator<Item = Result<DynValue<'a>>> + 'a>),
    Record(&'a dyn Record),
}

/// Probe order is significant: container shapes overlap and the first match
/// wins. Scalars first, then the dynamic map, ordered list, untyped map,
/// typed map and plain enumerable capabilities, with the record shape as
/// the final fallback.
pub fn classify(x: &dyn Dynamic) -> Class<'_> {
    if let Some(s) = x.as_scalar() {
        return Class::Scalar(s);
    }
    if let Some(m) = x.as_dynamic_map() {
        return Class::DynamicMap(m);
    }
    if let Some(l) = x.as_list() {
        return Class::List(l);
    }
    if let Some(m) = x.as_untyped_map() {
        return Class::UntypedMap(m);
    }
    if let Some(m) = x.as_typed_map() {
        return Class::TypedMap(m);
    }
    if let Some(e) = x.as_enumerable() {
        return Class::Enumerable(e);
    }
    match x.as_record() {
        Some(r) => Class::Record(r),
        // A value exposing no capability at all is an empty record.
        None => Class::Record(&EmptyRecord),
    }
}

struct EmptyRecord;

impl Record for EmptyRecord {
    fn fields(&self) -> Vec<Member<'_>> {
        Vec::new()
    }
}
