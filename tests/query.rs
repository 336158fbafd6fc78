use uriref::Uri;

#[test]
fn adds_and_removes_query_values() {
    let uri = Uri::default()
        .with_query_value("a", Some("b"))
        .unwrap()
        .with_query_value("c", Some("d"))
        .unwrap()
        .with_query_value("e", None)
        .unwrap();
    assert_eq!(uri.query(), Some("a=b&c=d&e"));

    let uri = uri.without_query_value("c").unwrap();
    assert_eq!(uri.query(), Some("a=b&e"));
    let uri = uri.without_query_value("e").unwrap();
    assert_eq!(uri.query(), Some("a=b"));
    let uri = uri.without_query_value("a").unwrap();
    assert_eq!(uri.query(), None);
    assert_eq!(uri.to_string(), "");
}

#[test]
fn replaces_existing_keys_in_place() {
    let uri = Uri::default()
        .with_query_value("a", Some("b"))
        .unwrap()
        .with_query_value("c", Some("d"))
        .unwrap()
        .with_query_value("a", Some("e"))
        .unwrap();
    assert_eq!(uri.query(), Some("a=e&c=d"));
}

#[test]
fn replacing_a_repeated_key_keeps_a_single_pair() {
    let uri = Uri::default()
        .with_query("a=b&c=d&a=e")
        .unwrap()
        .with_query_value("a", Some("x"))
        .unwrap();
    assert_eq!(uri.query(), Some("a=x&c=d"));
}

#[test]
fn removes_all_pairs_with_the_same_key() {
    let uri = Uri::default()
        .with_query("a=b&c=d&a=e")
        .unwrap()
        .without_query_value("a")
        .unwrap();
    assert_eq!(uri.query(), Some("c=d"));
}

#[test]
fn removing_a_missing_key_changes_nothing() {
    let uri = Uri::default().with_query_value("a", Some("b")).unwrap();
    let uri = uri.without_query_value("c").unwrap();
    assert_eq!(uri.query(), Some("a=b"));
}

#[test]
fn encodes_keys_and_values() {
    let uri = Uri::default()
        .with_query_value("E=mc^2", Some("ein&stein"))
        .unwrap();
    // decoded key/value get encoded
    assert_eq!(uri.query(), Some("E%3Dmc%5E2=ein%26stein"));

    let uri = Uri::default()
        .with_query_value("E%3Dmc%5e2", Some("ein%26stein"))
        .unwrap();
    // already-encoded key/value are not double-encoded
    assert_eq!(uri.query(), Some("E%3Dmc%5E2=ein%26stein"));
}

#[test]
fn matches_keys_in_encoded_or_decoded_form() {
    // the hex case of stored pairs does not matter for matching
    let uri = Uri::default()
        .with_query("E%3dmc%5E2=einstein&foo=bar")
        .unwrap()
        .without_query_value("E=mc^2")
        .unwrap();
    assert_eq!(uri.query(), Some("foo=bar"));

    let uri = Uri::default()
        .with_query("E%3dmc%5E2=einstein&foo=bar")
        .unwrap()
        .without_query_value("E%3Dmc%5e2")
        .unwrap();
    assert_eq!(uri.query(), Some("foo=bar"));
}

#[test]
fn updating_matches_either_spelling_too() {
    let uri = Uri::default()
        .with_query("a%20b=1&c=2")
        .unwrap()
        .with_query_value("a b", Some("3"))
        .unwrap();
    assert_eq!(uri.query(), Some("a%20b=3&c=2"));
}

#[test]
fn preserves_untouched_pairs() {
    let uri = Uri::default()
        .with_query("x=%E2%82%AC&y=2")
        .unwrap()
        .with_query_value("z", Some("3"))
        .unwrap();
    assert_eq!(uri.query(), Some("x=%E2%82%AC&y=2&z=3"));
}

#[test]
fn query_helpers_leave_other_components_alone() {
    let uri = Uri::parse("http://example.com/p#frag")
        .unwrap()
        .with_query_value("a", Some("b"))
        .unwrap();
    assert_eq!(uri.to_string(), "http://example.com/p?a=b#frag");
}
