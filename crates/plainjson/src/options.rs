/// Numeric conversion target applied to every numeric scalar in one
/// conversion call. Global per invocation, never per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberMode {
    /// Convert every numeric scalar to `f64`.
    #[default]
    Double,
    /// Convert every numeric scalar to a fixed-precision decimal.
    Decimal,
}

#[derive(Debug, Clone)]
pub struct Options {
    /// Two-space indentation in emitted JSON.
    pub indent: bool,
    /// Order map keys by ordinal string comparison immediately before
    /// emission. Source order is never mutated.
    pub sort_keys: bool,
    /// Escape every character above 0x7F as `\uXXXX`.
    pub force_ascii: bool,
    /// Numeric conversion target for `parse`.
    pub numbers: NumberMode,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: false,
            sort_keys: false,
            force_ascii: false,
            numbers: NumberMode::default(),
        }
    }
}
