#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// `UrlBuilder` behavior tests
///
/// This test suite covers:
/// - Round-tripping URLs with and without query strings
/// - Adding and merging query arguments
/// - Sorted rendering
/// - Render cache invalidation
use urlbuild::{Settings, SettingsPatch, SortFlags, UrlBuilder, ValidationError};

fn build(url: &str) -> UrlBuilder {
    UrlBuilder::new(url, Settings::default()).unwrap()
}

#[test]
fn test_round_trip_without_query() {
    let url = build("https://example.com/foo");
    assert_eq!(url.render(), "https://example.com/foo");
}

#[test]
fn test_round_trip_with_query() {
    let url = build("https://example.com/foo?bar=Bar");
    assert_eq!(url.render(), "https://example.com/foo?bar=Bar");
}

#[test]
fn test_round_trip_keeps_raw_characters() {
    let input = "/search?q=hello%20world&tag=a+b&path=/x/y";
    assert_eq!(build(input).render(), input);
}

#[test]
fn test_add_overwrites_in_place() {
    let mut url = build("/foo?bar=Baz");
    url.add_query_argument("bar", "Qux").unwrap();
    assert_eq!(url.render(), "/foo?bar=Qux");

    let mut url = build("/foo?a=1&bar=Baz&z=9");
    url.add_query_argument("bar", "Qux").unwrap();
    assert_eq!(url.render(), "/foo?a=1&bar=Qux&z=9");
}

#[test]
fn test_add_appends_new_keys() {
    let mut url = build("http://example.com/foo?bar=Bar");
    url.add_query_argument("bar", "Baz")
        .unwrap()
        .add_query_argument("new", "N")
        .unwrap();
    assert_eq!(url.render(), "http://example.com/foo?bar=Baz&new=N");
}

#[test]
fn test_add_trims_and_coerces() {
    let mut url = build("/p");
    url.add_query_argument("  page ", 3).unwrap();
    url.add_query_argument("ratio", 0.5).unwrap();
    url.add_query_argument("q", "  spaced  ").unwrap();
    assert_eq!(url.render(), "/p?page=3&ratio=0.5&q=spaced");
}

#[test]
fn test_sorting() {
    let mut url = UrlBuilder::new("/p", Settings::default().with_sort(true)).unwrap();
    url.add_query_argument("z", "z")
        .unwrap()
        .add_query_argument("b", "B")
        .unwrap()
        .add_query_argument("a", "A")
        .unwrap();
    assert_eq!(url.render(), "/p?a=A&b=B&z=z");

    // Insertion order is untouched by sorted rendering
    let keys: Vec<&str> = url.arguments().keys().collect();
    assert_eq!(keys, vec!["z", "b", "a"]);
}

#[test]
fn test_sorting_with_patch_settings() {
    let settings = SettingsPatch::new()
        .with_sort(true)
        .with_sort_flags(SortFlags::Natural);
    let url = UrlBuilder::new("/p?p10=c&p2=b&p1=a", settings).unwrap();
    assert_eq!(url.render(), "/p?p1=a&p2=b&p10=c");
}

#[test]
fn test_sort_flags_ignored_when_sort_is_off() {
    let settings = Settings::default().with_sort_flags(SortFlags::Numeric);
    let url = UrlBuilder::new("/p?b=2&a=1", settings).unwrap();
    assert_eq!(url.render(), "/p?b=2&a=1");
}

#[test]
fn test_no_value_argument() {
    let url = build("/p?flag");
    assert_eq!(url.get("flag"), Some(""));
    assert_eq!(url.arguments().len(), 1);
    assert_eq!(url.render(), "/p?flag=");
}

#[test]
fn test_duplicate_keys_last_wins() {
    let url = build("/p?a=1&b=2&a=3");
    assert_eq!(url.render(), "/p?a=3&b=2");
}

#[test]
fn test_empty_key_rejected() {
    let mut url = build("/p?a=1");
    let err = url.add_query_argument("  ", "x").unwrap_err();
    assert_eq!(err, ValidationError::EmptyKey);
    assert_eq!(url.arguments().len(), 1);
    assert_eq!(url.render(), "/p?a=1");
}

#[test]
fn test_cache_invalidation() {
    let mut url = build("/p?a=1");
    assert_eq!(url.render(), "/p?a=1");
    url.add_query_argument("b", "2").unwrap();
    assert_eq!(url.render(), "/p?a=1&b=2");
    url.add_query_arguments([("c", "3")]).unwrap();
    assert_eq!(url.render(), "/p?a=1&b=2&c=3");
}

#[test]
fn test_idempotent_render() {
    let url = build("/p?b=2&a=1");
    let first = url.render();
    let second = url.render();
    assert_eq!(first, second);
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_add_query_arguments_in_order() {
    let mut url = build("/p?foo=old");
    url.add_query_arguments([("foo", "Foo"), ("bar", "Bar")])
        .unwrap();
    assert_eq!(url.render(), "/p?foo=Foo&bar=Bar");
}

#[test]
fn test_add_query_arguments_mixed_types() {
    let mut url = build("/p");
    let pairs: Vec<(String, u32)> = vec![("limit".into(), 10), ("offset".into(), 20)];
    url.add_query_arguments(pairs).unwrap();
    assert_eq!(url.render(), "/p?limit=10&offset=20");
}

#[test]
fn test_add_query_arguments_is_atomic() {
    let mut url = build("/p?a=1");
    url.render();
    let err = url
        .add_query_arguments([("b", "2"), (" ", "x"), ("c", "3")])
        .unwrap_err();
    assert_eq!(err, ValidationError::EmptyKey);
    assert_eq!(url.get("b"), None);
    assert_eq!(url.render(), "/p?a=1");
}

#[test]
fn test_empty_url_is_rejected() {
    let err = UrlBuilder::new("   ", Settings::default()).unwrap_err();
    assert_eq!(err, ValidationError::MissingUrl);
}

#[test]
fn test_request_url_fallback() {
    let current = || Some("/current?page=1".to_string());
    let mut url = UrlBuilder::with_request_url("", Settings::default(), &current).unwrap();
    url.add_query_argument("page", 2).unwrap();
    assert_eq!(url.render(), "/current?page=2");
}

#[test]
fn test_path_keeps_inner_whitespace() {
    let url = build("  /foo ?a=1  ");
    assert_eq!(url.path(), "/foo ");
    assert_eq!(url.render(), "/foo ?a=1");
}
