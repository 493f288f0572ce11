//! JSON emission over runtime values and plain trees.

pub mod primitives;
pub mod writer;

use crate::dynamic::Dynamic;
use crate::error::Result;
use crate::options::Options;

pub fn write_to_string(value: &dyn Dynamic, options: &Options) -> Result<String> {
    let mut w = writer::JsonWriter::new(options);
    w.write_value(value, 0, false)?;
    Ok(w.into_string())
}
