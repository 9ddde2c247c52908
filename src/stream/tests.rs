//! Object stream tests

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn owned(objects: &[&str]) -> Vec<String> {
    objects.iter().map(|s| (*s).to_string()).collect()
}

// ============================================================================
// Splitter
// ============================================================================

#[test_case("", &[]; "empty input")]
#[test_case("{\"a\":1}", &["{\"a\":1}"]; "single object")]
#[test_case("{\"a\":1}{\"b\":2}", &["{\"a\":1}", "{\"b\":2}"]; "two objects")]
#[test_case(
    "{\"a\":{\"b\":{\"c\":3}}}{\"d\":4}",
    &["{\"a\":{\"b\":{\"c\":3}}}", "{\"d\":4}"];
    "nested braces"
)]
fn test_split_json_objects(input: &str, expected: &[&str]) {
    assert_eq!(split_json_objects(input), owned(expected));
}

#[test]
fn test_split_concatenation_preserves_originals() {
    let originals = vec![
        "{\"id\":\"1\",\"tags\":[\"a\",\"b\"]}".to_string(),
        "{\"id\":\"2\",\"nested\":{\"x\":true}}".to_string(),
        "{\"id\":\"3\"}".to_string(),
    ];
    let blob: String = originals.concat();

    assert_eq!(split_json_objects(&blob), originals);
}

#[test]
fn test_split_unbalanced_is_lenient() {
    // A truncated trailing object is returned garbled rather than erroring.
    let result = split_json_objects("{\"a\":1}{\"b\":");
    assert_eq!(result[0], "{\"a\":1}");
    assert_eq!(result.len(), 1);
}

#[test]
fn test_split_strict_rejects_unclosed() {
    let err = split_json_objects_strict("{\"a\":1}{\"b\":").unwrap_err();
    assert!(err.to_string().contains("unclosed"));
}

#[test]
fn test_split_strict_rejects_stray_close() {
    let err = split_json_objects_strict("}{\"a\":1}").unwrap_err();
    assert!(err.to_string().contains("unmatched"));
}

#[test]
fn test_split_strict_accepts_balanced() {
    let result = split_json_objects_strict("{\"a\":1}{\"b\":2}").unwrap();
    assert_eq!(result.len(), 2);
}

// ============================================================================
// Pairer
// ============================================================================

#[test]
fn test_pair_without_key_field() {
    let objects = owned(&["{\"a\":1}", "{\"b\":2}", "{\"c\":3}"]);
    let paired = pair_key_values(&objects, None).unwrap();

    assert_eq!(paired.len(), 3);
    for (keyed, original) in paired.iter().zip(&objects) {
        assert_eq!(keyed.key, None);
        assert_eq!(&keyed.value, original);
    }
}

#[test]
fn test_pair_empty_key_field_means_no_keying() {
    let objects = owned(&["{\"a\":1}", "{\"b\":2}"]);
    let paired = pair_key_values(&objects, Some("")).unwrap();
    assert_eq!(paired.len(), 2);
    assert_eq!(paired[0].key, None);
}

#[test]
fn test_pair_splices_key_into_record() {
    let objects = owned(&["{\"ID\": \"7\"}", "{\"id\":\"0\",\"v\":\"x\"}"]);
    let paired = pair_key_values(&objects, Some("ID")).unwrap();

    assert_eq!(paired.len(), 1);
    assert_eq!(paired[0].key.as_deref(), Some("{\"ID\": \"7\"}"));
    // The "id":"0" assignment is replaced by the key text verbatim,
    // key-object spacing and case included.
    assert_eq!(paired[0].value, "{\"ID\": \"7\",\"v\":\"x\"}");
}

#[test]
fn test_pair_matches_case_insensitively() {
    let objects = owned(&["{\"id\":\"42\"}", "{\"Id\": \"0\",\"v\":\"x\"}"]);
    let paired = pair_key_values(&objects, Some("ID")).unwrap();

    assert_eq!(paired[0].value, "{\"id\":\"42\",\"v\":\"x\"}");
}

#[test]
fn test_pair_preserves_record_formatting_outside_span() {
    let objects = owned(&[
        "{\"id\":\"9\"}",
        "{\"id\": \"0\",  \"name\" : \"Ada\" , \"ok\":true}",
    ]);
    let paired = pair_key_values(&objects, Some("id")).unwrap();

    assert_eq!(
        paired[0].value,
        "{\"id\":\"9\",  \"name\" : \"Ada\" , \"ok\":true}"
    );
}

#[test]
fn test_pair_key_with_dollar_sign_is_verbatim() {
    let objects = owned(&["{\"id\":\"$1\"}", "{\"id\":\"0\"}"]);
    let paired = pair_key_values(&objects, Some("id")).unwrap();

    assert_eq!(paired[0].value, "{\"id\":\"$1\"}");
}

#[test]
fn test_pair_drops_odd_leftover() {
    let objects = owned(&["{\"id\":\"1\"}", "{\"id\":\"0\"}", "{\"id\":\"2\"}"]);
    let paired = pair_key_values(&objects, Some("id")).unwrap();

    assert_eq!(paired.len(), 1);
}

#[test]
fn test_pair_record_without_key_assignment_is_untouched() {
    let objects = owned(&["{\"id\":\"1\"}", "{\"other\":\"x\"}"]);
    let paired = pair_key_values(&objects, Some("id")).unwrap();

    assert_eq!(paired[0].value, "{\"other\":\"x\"}");
}
