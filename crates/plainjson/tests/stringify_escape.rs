use plainjson::Options;
use plainjson::dynamic::ObjectMap;

fn ascii() -> Options {
    Options {
        force_ascii: true,
        ..Options::default()
    }
}

#[test]
fn named_escape_sequences() {
    let s = "a\tb\"c\\d".to_string();
    let out = plainjson::stringify(&s, &Options::default()).unwrap();
    assert_eq!(out, "\"a\\tb\\\"c\\\\d\"");
}

#[test]
fn control_characters_escape_as_uppercase_hex() {
    let s = "\u{0001}x\u{001F}".to_string();
    let out = plainjson::stringify(&s, &Options::default()).unwrap();
    assert_eq!(out, "\"\\u0001x\\u001F\"");
}

#[test]
fn non_ascii_passes_through_by_default() {
    let s = "héllo – ωorld".to_string();
    let out = plainjson::stringify(&s, &Options::default()).unwrap();
    assert_eq!(out, "\"héllo – ωorld\"");
}

#[test]
fn force_ascii_escapes_above_7f() {
    let s = "héllo".to_string();
    let out = plainjson::stringify(&s, &ascii()).unwrap();
    assert_eq!(out, "\"h\\u00E9llo\"");
}

#[test]
fn astral_characters_emit_surrogate_pairs() {
    let s = "\u{1F600}".to_string();
    let out = plainjson::stringify(&s, &ascii()).unwrap();
    assert_eq!(out, "\"\\uD83D\\uDE00\"");
}

#[test]
fn keys_are_escaped_too() {
    let mut m = ObjectMap::new();
    m.set("a\nb", 1i32);
    let out = plainjson::stringify(&m, &Options::default()).unwrap();
    assert_eq!(out, "{\"a\\nb\":1}");
}

#[test]
fn chars_quote_like_strings() {
    assert_eq!(plainjson::stringify(&'q', &Options::default()).unwrap(), "\"q\"");
    assert_eq!(plainjson::stringify(&'\t', &Options::default()).unwrap(), "\"\\t\"");
}
