#[test]
fn options_defaults() {
    let opts = plainjson::Options::default();
    assert!(!opts.indent);
    assert!(!opts.sort_keys);
    assert!(!opts.force_ascii);
    assert!(matches!(opts.numbers, plainjson::NumberMode::Double));
}
