//! Literal and escape helpers for the JSON writer.

use core::fmt::Write as _;

pub fn format_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

pub fn format_null() -> &'static str {
    "null"
}

/// Escape `s` into `out`. Characters below 0x20 always escape to `\uXXXX`;
/// with `force_ascii`, so does everything above 0x7F. The hex escape covers
/// one UTF-16 code unit, so a character outside the BMP emits two
/// independent escapes, one per surrogate.
pub fn escape_into(out: &mut String, s: &str, force_ascii: bool) {
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 || (force_ascii && c as u32 > 0x7F) => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units).iter() {
                    let _ = write!(out, "\\u{:04X}", unit);
                }
            }
            c => out.push(c),
        }
    }
}

pub fn escape_and_quote_into(out: &mut String, s: &str, force_ascii: bool) {
    out.push('"');
    escape_into(out, s, force_ascii);
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(s: &str, force_ascii: bool) -> String {
        let mut out = String::new();
        escape_into(&mut out, s, force_ascii);
        out
    }

    #[test]
    fn named_escapes() {
        assert_eq!(escaped("a\tb\"c\\d", false), "a\\tb\\\"c\\\\d");
        assert_eq!(escaped("\n\r\u{0008}\u{000C}", false), "\\n\\r\\b\\f");
    }

    #[test]
    fn control_chars_use_uppercase_hex() {
        assert_eq!(escaped("\u{0001}\u{001F}", false), "\\u0001\\u001F");
    }

    #[test]
    fn non_ascii_passes_through_by_default() {
        assert_eq!(escaped("héllo", false), "héllo");
    }

    #[test]
    fn force_ascii_escapes_above_7f() {
        assert_eq!(escaped("é", true), "\\u00E9");
        // 0x7F itself is not a named escape and stays literal.
        assert_eq!(escaped("\u{007F}", true), "\u{007F}");
    }

    #[test]
    fn astral_chars_escape_as_surrogate_pairs() {
        assert_eq!(escaped("\u{1F600}", true), "\\uD83D\\uDE00");
    }
}
