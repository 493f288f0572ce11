//! `Dynamic` implementations for common host-side value shapes.

use std::collections::{BTreeMap, HashMap, VecDeque};

use chrono::TimeDelta;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dynamic::{
    DynValue, Dynamic, DynamicMap, OrderedList, Record, Scalar, TypedMap, UntypedMap,
};
use crate::error::Result;
use crate::temporal::Timestamp;

macro_rules! scalar_dynamic {
    ($($ty:ty => $name:literal, $variant:ident;)*) => {
        $(
            impl Dynamic for $ty {
                fn type_name(&self) -> &str {
                    $name
                }

                fn as_scalar(&self) -> Option<Scalar<'_>> {
                    Some(Scalar::$variant(*self))
                }

                fn fallback_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

scalar_dynamic! {
    i8 => "i8", I8;
    i16 => "i16", I16;
    i32 => "i32", I32;
    i64 => "i64", I64;
    u8 => "u8", U8;
    u16 => "u16", U16;
    u32 => "u32", U32;
    u64 => "u64", U64;
    f32 => "f32", F32;
    f64 => "f64", F64;
    bool => "bool", Bool;
    char => "char", Char;
    Decimal => "Decimal", Decimal;
    Uuid => "Uuid", Guid;
    TimeDelta => "TimeDelta", Duration;
    Timestamp => "Timestamp", DateTime;
}

impl Dynamic for String {
    fn type_name(&self) -> &str {
        "String"
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Str(self))
    }

    fn fallback_text(&self) -> String {
        self.clone()
    }
}

impl Dynamic for str {
    fn type_name(&self) -> &str {
        "str"
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Str(self))
    }

    fn fallback_text(&self) -> String {
        self.to_string()
    }
}

impl<T: Dynamic> Dynamic for Option<T> {
    fn type_name(&self) -> &str {
        match self {
            Some(v) => v.type_name(),
            None => "null",
        }
    }

    fn is_null(&self) -> bool {
        match self {
            Some(v) => v.is_null(),
            None => true,
        }
    }

    fn unwrap_inner(&self) -> Option<&dyn Dynamic> {
        self.as_ref().and_then(|v| v.unwrap_inner())
    }

    fn export_plain(&self) -> Option<Box<dyn Dynamic + '_>> {
        self.as_ref().and_then(|v| v.export_plain())
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        self.as_ref().and_then(|v| v.as_scalar())
    }

    fn as_dynamic_map(&self) -> Option<&dyn DynamicMap> {
        self.as_ref().and_then(|v| v.as_dynamic_map())
    }

    fn as_list(&self) -> Option<&dyn OrderedList> {
        self.as_ref().and_then(|v| v.as_list())
    }

    fn as_untyped_map(&self) -> Option<&dyn UntypedMap> {
        self.as_ref().and_then(|v| v.as_untyped_map())
    }

    fn as_typed_map(&self) -> Option<&dyn TypedMap> {
        self.as_ref().and_then(|v| v.as_typed_map())
    }

    fn as_enumerable<'a>(
        &'a self,
    ) -> Option<Box<dyn Iterator<Item = Result<DynValue<'a>>> + 'a>> {
        self.as_ref().and_then(|v| v.as_enumerable())
    }

    fn as_record(&self) -> Option<&dyn Record> {
        self.as_ref().and_then(|v| v.as_record())
    }

    fn fallback_text(&self) -> String {
        match self {
            Some(v) => v.fallback_text(),
            None => "null".to_string(),
        }
    }
}

impl<T: Dynamic + ?Sized> Dynamic for &T {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn unwrap_inner(&self) -> Option<&dyn Dynamic> {
        (**self).unwrap_inner()
    }

    fn export_plain(&self) -> Option<Box<dyn Dynamic + '_>> {
        (**self).export_plain()
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        (**self).as_scalar()
    }

    fn as_dynamic_map(&self) -> Option<&dyn DynamicMap> {
        (**self).as_dynamic_map()
    }

    fn as_list(&self) -> Option<&dyn OrderedList> {
        (**self).as_list()
    }

    fn as_untyped_map(&self) -> Option<&dyn UntypedMap> {
        (**self).as_untyped_map()
    }

    fn as_typed_map(&self) -> Option<&dyn TypedMap> {
        (**self).as_typed_map()
    }

    fn as_enumerable<'a>(
        &'a self,
    ) -> Option<Box<dyn Iterator<Item = Result<DynValue<'a>>> + 'a>> {
        (**self).as_enumerable()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }

    fn fallback_text(&self) -> String {
        (**self).fallback_text()
    }
}

impl<T: Dynamic + ?Sized> Dynamic for Box<T> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn unwrap_inner(&self) -> Option<&dyn Dynamic> {
        (**self).unwrap_inner()
    }

    fn export_plain(&self) -> Option<Box<dyn Dynamic + '_>> {
        (**self).export_plain()
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        (**self).as_scalar()
    }

    fn as_dynamic_map(&self) -> Option<&dyn DynamicMap> {
        (**self).as_dynamic_map()
    }

    fn as_list(&self) -> Option<&dyn OrderedList> {
        (**self).as_list()
    }

    fn as_untyped_map(&self) -> Option<&dyn UntypedMap> {
        (**self).as_untyped_map()
    }

    fn as_typed_map(&self) -> Option<&dyn TypedMap> {
        (**self).as_typed_map()
    }

    fn as_enumerable<'a>(
        &'a self,
    ) -> Option<Box<dyn Iterator<Item = Result<DynValue<'a>>> + 'a>> {
        (**self).as_enumerable()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }

    fn fallback_text(&self) -> String {
        (**self).fallback_text()
    }
}

impl<T: Dynamic> Dynamic for Vec<T> {
    fn type_name(&self) -> &str {
        "Vec"
    }

    fn as_list(&self) -> Option<&dyn OrderedList> {
        Some(self)
    }
}

impl<T: Dynamic> OrderedList for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> &dyn Dynamic {
        &self[index]
    }
}

impl<V: Dynamic> DynamicMap for Vec<(String, V)> {
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a dyn Dynamic)> + 'a> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v as &dyn Dynamic)))
    }
}

/// Key classification for statically typed maps. Only the string key type
/// carries into output; every other key type renders the whole map empty.
pub trait MapKey {
    const IS_STRING: bool = false;

    fn as_str_key(&self) -> Option<&str> {
        None
    }
}

impl MapKey for String {
    const IS_STRING: bool = true;

    fn as_str_key(&self) -> Option<&str> {
        Some(self)
    }
}

macro_rules! non_string_key {
    ($($ty:ty),*) => {
        $(impl MapKey for $ty {})*
    };
}

non_string_key!(i8, i16, i32, i64, u8, u16, u32, u64, bool, char, Uuid);

impl<K: MapKey, V: Dynamic> Dynamic for HashMap<K, V> {
    fn type_name(&self) -> &str {
        "HashMap"
    }

    fn as_typed_map(&self) -> Option<&dyn TypedMap> {
        Some(self)
    }
}

impl<K: MapKey, V: Dynamic> TypedMap for HashMap<K, V> {
    fn string_keys(&self) -> bool {
        K::IS_STRING
    }

    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a dyn Dynamic)> + 'a> {
        Box::new(
            self.iter()
                .filter_map(|(k, v)| k.as_str_key().map(|k| (k, v as &dyn Dynamic))),
        )
    }
}

impl<K: MapKey, V: Dynamic> Dynamic for BTreeMap<K, V> {
    fn type_name(&self) -> &str {
        "BTreeMap"
    }

    fn as_typed_map(&self) -> Option<&dyn TypedMap> {
        Some(self)
    }
}

impl<K: MapKey, V: Dynamic> TypedMap for BTreeMap<K, V> {
    fn string_keys(&self) -> bool {
        K::IS_STRING
    }

    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a dyn Dynamic)> + 'a> {
        Box::new(
            self.iter()
                .filter_map(|(k, v)| k.as_str_key().map(|k| (k, v as &dyn Dynamic))),
        )
    }
}

impl<T: Dynamic> Dynamic for VecDeque<T> {
    fn type_name(&self) -> &str {
        "VecDeque"
    }

    fn as_enumerable<'a>(
        &'a self,
    ) -> Option<Box<dyn Iterator<Item = Result<DynValue<'a>>> + 'a>> {
        Some(Box::new(
            self.iter().map(|v| Ok(DynValue::Borrowed(v as &dyn Dynamic))),
        ))
    }
}

/// Insertion-ordered, string-keyed open map: the host-side stand-in for a
/// value whose members are attached at runtime.
#[derive(Default)]
pub struct ObjectMap {
    entries: Vec<(String, Box<dyn Dynamic>)>,
}

impl ObjectMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. An existing key keeps its original position and
    /// takes the new value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Dynamic + 'static) -> &mut Self {
        let key = key.into();
        let boxed: Box<dyn Dynamic> = Box::new(value);
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = boxed,
            None => self.entries.push((key, boxed)),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dynamic for ObjectMap {
    fn type_name(&self) -> &str {
        "ObjectMap"
    }

    fn as_dynamic_map(&self) -> Option<&dyn DynamicMap> {
        Some(self)
    }
}

impl DynamicMap for ObjectMap {
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a dyn Dynamic)> + 'a> {
        Box::new(self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref())))
    }
}

/// Map keyed by arbitrary runtime values, the untyped-map shape. Keys that
/// do not classify as strings are dropped during conversion.
#[derive(Default)]
pub struct MixedMap {
    entries: Vec<(Box<dyn Dynamic>, Box<dyn Dynamic>)>,
}

impl MixedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(
        &mut self,
        key: impl Dynamic + 'static,
        value: impl Dynamic + 'static,
    ) -> &mut Self {
        self.entries.push((Box::new(key), Box::new(value)));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dynamic for MixedMap {
    fn type_name(&self) -> &str {
        "MixedMap"
    }

    fn as_untyped_map(&self) -> Option<&dyn UntypedMap> {
        Some(self)
    }
}

impl UntypedMap for MixedMap {
    fn entries<'a>(
        &'a self,
    ) -> Box<dyn Iterator<Item = (&'a dyn Dynamic, &'a dyn Dynamic)> + 'a> {
        Box::new(self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }
}
