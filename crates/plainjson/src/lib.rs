#![doc = include_str!("../README.md")]

pub mod classify;
pub mod convert;
pub mod dynamic;
pub mod error;
pub mod json;
pub mod options;
pub mod temporal;
pub mod value;

#[cfg(feature = "serde")]
mod ser;

pub use crate::convert::{Converter, Identity, NodeTransform, to_display_string};
pub use crate::dynamic::Dynamic;
pub use crate::error::{Error, Result};
pub use crate::options::{NumberMode, Options};
pub use crate::temporal::Timestamp;
pub use crate::value::{Number, PlainValue};

use std::io::Write;

/// Convert a runtime value into a plain-value tree.
pub fn parse(value: &dyn Dynamic, options: &Options) -> Result<PlainValue> {
    Converter::new(options.clone()).parse(value)
}

/// Emit JSON text for a runtime value or an already-built plain tree.
pub fn stringify(value: &dyn Dynamic, options: &Options) -> Result<String> {
    crate::json::write_to_string(value, options)
}

pub fn stringify_to_writer<W: Write>(
    mut writer: W,
    value: &dyn Dynamic,
    options: &Options,
) -> Result<()> {
    let s = stringify(value, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
