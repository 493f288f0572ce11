//! Recursive JSON emission over runtime values.

use core::fmt::Write as _;

use crate::classify::{Class, classify};
use crate::dynamic::{
    DynValue, Dynamic, DynamicMap as _, OrderedList, Record as _, Scalar, TypedMap as _,
    UntypedMap as _, export_only,
};
use crate::error::Result;
use crate::json::primitives;
use crate::options::Options;

/// One emission pass. Formatting policy is fixed for the writer's lifetime;
/// each top-level call owns its buffer.
pub struct JsonWriter {
    out: String,
    indent_cache: String,
    indent: bool,
    sort_keys: bool,
    force_ascii: bool,
}

impl JsonWriter {
    pub fn new(options: &Options) -> Self {
        Self {
            out: String::new(),
            indent_cache: String::new(),
            indent: options.indent,
            sort_keys: options.sort_keys,
            force_ascii: options.force_ascii,
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    pub fn write_value(&mut self, x: &dyn Dynamic, level: usize, cancel_indent: bool) -> Result<()> {
        if !cancel_indent {
            self.write_indent(level);
        }
        if x.is_null() {
            self.out.push_str(primitives::format_null());
            return Ok(());
        }
        let hooked = export_only(x);
        let x = hooked.get();
        if x.is_null() {
            self.out.push_str(primitives::format_null());
            return Ok(());
        }
        match classify(x) {
            Class::Scalar(s) => {
                self.write_scalar(s);
                Ok(())
            }
            Class::DynamicMap(m) => {
                let mut entries = Vec::new();
                for (key, value) in m.entries() {
                    insert_entry(&mut entries, key.to_owned(), DynValue::Borrowed(value));
                }
                self.write_entries(entries, level)
            }
            Class::List(l) => self.write_list(l, level),
            Class::UntypedMap(m) => {
                let mut entries = Vec::new();
                for (key, value) in m.entries() {
                    let Some(Scalar::Str(key)) = key.as_scalar() else {
                        continue;
                    };
                    insert_entry(&mut entries, key.to_owned(), DynValue::Borrowed(value));
                }
                self.write_entries(entries, level)
            }
            Class::TypedMap(m) => {
                if !m.string_keys() {
                    self.out.push_str("{}");
                    return Ok(());
                }
                let mut entries = Vec::new();
                for (key, value) in m.entries() {
                    insert_entry(&mut entries, key.to_owned(), DynValue::Borrowed(value));
                }
                self.write_entries(entries, level)
            }
            Class::Enumerable(iter) => {
                let mut items = Vec::new();
                for item in iter {
                    items.push(item?);
                }
                self.write_list(&DynList(items), level)
            }
            Class::Record(r) => {
                let mut entries = Vec::new();
                for member in r.fields().into_iter().chain(r.properties()) {
                    if member.is_excluded() {
                        continue;
                    }
                    let name = member.output_name().to_owned();
                    insert_entry(&mut entries, name, member.into_value()?);
                }
                self.write_entries(entries, level)
            }
        }
    }

    fn write_scalar(&mut self, s: Scalar<'_>) {
        match s {
            Scalar::Str(v) => self.write_string(v),
            Scalar::Char(c) => self.write_string(&c.to_string()),
            Scalar::I8(v) => {
                let _ = write!(self.out, "{}", v);
            }
            Scalar::I16(v) => {
                let _ = write!(self.out, "{}", v);
            }
            Scalar::I32(v) => {
                let _ = write!(self.out, "{}", v);
            }
            Scalar::I64(v) => {
                let _ = write!(self.out, "{}", v);
            }
            Scalar::U8(v) => {
                let _ = write!(self.out, "{}", v);
            }
            Scalar::U16(v) => {
                let _ = write!(self.out, "{}", v);
            }
            Scalar::U32(v) => {
                let _ = write!(self.out, "{}", v);
            }
            Scalar::U64(v) => {
                let _ = write!(self.out, "{}", v);
            }
            Scalar::F32(v) => {
                let _ = write!(self.out, "{}", v);
            }
            Scalar::F64(v) => {
                let _ = write!(self.out, "{}", v);
            }
            Scalar::Decimal(v) => {
                let _ = write!(self.out, "{}", v);
            }
            Scalar::Bool(b) => self.out.push_str(primitives::format_bool(b)),
            Scalar::DateTime(ts) => self.write_string(&ts.to_round_trip()),
            Scalar::Duration(d) => self.write_string(&d.to_string()),
            Scalar::Guid(g) => self.write_string(&g.to_string()),
            Scalar::Enum(label) => self.write_string(label),
        }
    }

    fn write_list(&mut self, list: &dyn OrderedList, level: usize) -> Result<()> {
        if list.is_empty() {
            self.out.push_str("[]");
            return Ok(());
        }
        self.out.push('[');
        if self.indent {
            self.out.push('\n');
        }
        for i in 0..list.len() {
            if i > 0 {
                self.out.push(',');
                if self.indent {
                    self.out.push('\n');
                }
            }
            self.write_value(list.get(i), level + 1, false)?;
        }
        if self.indent {
            self.out.push('\n');
        }
        self.write_indent(level);
        self.out.push(']');
        Ok(())
    }

    fn write_entries(&mut self, mut entries: Vec<(String, DynValue<'_>)>, level: usize) -> Result<()> {
        if self.sort_keys {
            entries.sort_by(|a, b| a.0.cmp(&b.0));
        }
        self.out.push('{');
        for (i, (key, value)) in entries.iter().enumerate() {
            if i == 0 && self.indent {
                self.out.push('\n');
            }
            if i > 0 {
                self.out.push(',');
                if self.indent {
                    self.out.push('\n');
                }
            }
            self.write_indent(level + 1);
            self.write_string(key);
            self.out.push_str(if self.indent { ": " } else { ":" });
            self.write_value(value.get(), level + 1, true)?;
        }
        if !entries.is_empty() && self.indent {
            self.out.push('\n');
            self.write_indent(level);
        }
        self.out.push('}');
        Ok(())
    }

    fn write_string(&mut self, s: &str) {
        let force_ascii = self.force_ascii;
        primitives::escape_and_quote_into(&mut self.out, s, force_ascii);
    }

    fn write_indent(&mut self, level: usize) {
        if !self.indent {
            return;
        }
        let width = level * 2;
        if self.indent_cache.len() < width {
            let missing = width - self.indent_cache.len();
            self.indent_cache.extend(core::iter::repeat(' ').take(missing));
        }
        self.out.push_str(&self.indent_cache[..width]);
    }
}

// Materialized enumerable items, addressed as a list for emission.
struct DynList<'v>(Vec<DynValue<'v>>);

impl OrderedList for DynList<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, index: usize) -> &dyn Dynamic {
        self.0[index].get()
    }
}

// Same dictionary semantics as conversion: a repeated key keeps its
// original position and takes the newest value.
fn insert_entry<'v>(entries: &mut Vec<(String, DynValue<'v>)>, key: String, value: DynValue<'v>) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => entries.push((key, value)),
    }
}
