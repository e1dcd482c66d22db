//! End-to-end tests for the public rendering API.
//!
//! These tests exercise:
//! - hand-built `Value` trees through `render` and `render_into`,
//! - the field visibility rules (unexported, absent, sensitive), and
//! - scalar extraction through `extract_scalar_string` and `string_value`.

use std::collections::{BTreeMap, HashMap};

use outline::{
    extract_scalar_string, render, render_into, string_value, Field, Outline, Record, Value,
    SENSITIVE_MARKER,
};

fn widget() -> Value {
    Record::new("Widget")
        .field("Name", "widget")
        .with(Field::new("Secret", Value::string("tok-123")).sensitive())
        .field("Tags", Value::sequence(["a", "b", "c", "d"]))
        .into()
}

#[test]
fn test_widget_scenario() {
    assert_eq!(
        render(&widget()),
        "{\n  Name: \"widget\",\n  Secret: <sensitive>,\n  Tags: [\n    \"a\",\n    \"b\",\n    \"c\",\n    \"d\"\n  ]\n}"
    );
}

#[test]
fn test_absent_url_has_no_line() {
    let value: Value = Record::new("Endpoint")
        .field("Name", "api")
        .field("Url", None::<String>)
        .into();
    let text = render(&value);
    assert!(!text.contains("Url"));
    assert_eq!(text, "{\n  Name: \"api\"\n}");
}

#[test]
fn test_empty_sequence_is_inline() {
    let text = render(&Value::sequence(Vec::<Value>::new()));
    assert_eq!(text, "[]");
    assert!(!text.contains('\n'));
}

#[test]
fn test_field_lines_match_visible_fields() {
    let value: Value = Record::new("Mixed")
        .field("shown", 1_u8)
        .with(Field::new("hidden", Value::from(2_u8)).exported(false))
        .field("missing", None::<u8>)
        .with(Field::redacted("secret"))
        .with(Field::unexported("internal"))
        .field("nested_missing", Some(None::<u8>))
        .into();
    let text = render(&value);
    let lines: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("  ") && line.contains(": "))
        .collect();
    assert_eq!(lines, ["  shown: 1,", "  secret: <sensitive>"]);
}

#[test]
fn test_sensitive_value_never_leaks() {
    let secret = "hunter2-long-password";
    let value: Value = Record::new("Login")
        .field("user", "ops")
        .with(Field::new("credential", Value::string(secret)).sensitive())
        .into();
    let text = render(&value);
    assert!(text.contains(SENSITIVE_MARKER));
    for start in 0..secret.len() - 3 {
        assert!(!text.contains(&secret[start..start + 4]));
    }
}

#[test]
fn test_sensitive_nested_record_is_not_entered() {
    let inner: Value = Record::new("Credentials")
        .field("key", "AKIA-123")
        .field("secret", "s3cr3t")
        .into();
    let value: Value = Record::new("Account")
        .field("id", 7_i32)
        .with(Field::new("credentials", inner).sensitive())
        .into();
    assert_eq!(
        render(&value),
        "{\n  id: 7,\n  credentials: <sensitive>\n}"
    );
}

#[test]
fn test_sequence_length_threshold() {
    let short = render(&Value::sequence([1, 2, 3]));
    let long = render(&Value::sequence([1, 2, 3, 4]));
    assert_eq!(short, "[1,2,3]");
    assert!(!short.contains('\n'));
    assert!(long.contains('\n'));
    assert_eq!(long, "[\n  1,\n  2,\n  3,\n  4\n]");
}

#[test]
fn test_nested_indentation() {
    let value: Value = Record::new("Outer")
        .field(
            "inner",
            Record::new("Inner").field("items", Value::sequence(["w", "x", "y", "z"])),
        )
        .field("flag", true)
        .into();
    assert_eq!(
        render(&value),
        "{\n  inner: {\n    items: [\n      \"w\",\n      \"x\",\n      \"y\",\n      \"z\"\n    ]\n  },\n  flag: true\n}"
    );
}

#[test]
fn test_mapping_keys_sorted_and_bare() {
    let mut map = HashMap::new();
    map.insert("zeta".to_string(), 1);
    map.insert("alpha".to_string(), 2);
    map.insert("mid".to_string(), 3);
    let text = render(&map.outline());
    assert_eq!(text, "{\n  alpha: 2,\n  mid: 3,\n  zeta: 1\n}");
    assert_eq!(render(&map.outline()), text);
}

#[test]
fn test_mapping_skips_absent_values() {
    let mut map = BTreeMap::new();
    map.insert("set", Some("x"));
    map.insert("unset", None);
    assert_eq!(render(&map.outline()), "{\n  set: \"x\"\n}");
}

#[test]
fn test_empty_record_and_mapping() {
    assert_eq!(render(&Record::new("Empty").into()), "{\n}");
    assert_eq!(render(&BTreeMap::<String, u8>::new().outline()), "{\n}");
    let only_hidden: Value = Record::new("Hidden")
        .with(Field::unexported("x"))
        .field("y", None::<u8>)
        .into();
    assert_eq!(render(&only_hidden), "{\n}");
}

#[test]
fn test_inline_and_empty_forms_are_byte_exact() {
    assert_eq!(render(&Value::sequence(Vec::<Value>::new())), "[]");
    assert_eq!(render(&Value::sequence(["a", "b", "c"])), "[\"a\",\"b\",\"c\"]");
    assert_eq!(
        render(&Value::mapping(Vec::<(String, Value)>::new())),
        "{\n}"
    );

    let value: Value = Record::new("Shapes")
        .field("empty", Value::mapping(Vec::<(String, Value)>::new()))
        .field("short", Value::sequence([1, 2, 3]))
        .field("none", Value::sequence(Vec::<Value>::new()))
        .into();
    assert_eq!(
        render(&value),
        "{\n  empty: {\n  },\n  short: [1,2,3],\n  none: []\n}"
    );
}

#[test]
fn test_absent_sequence_elements_are_skipped() {
    let items = vec![Some(1), None, Some(2), None, Some(3)];
    assert_eq!(render(&items.outline()), "[1,2,3]");
}

#[test]
fn test_render_into_appends() {
    let mut buffer = String::from("value=");
    render_into(&Value::from("x"), &mut buffer).unwrap();
    assert_eq!(buffer, "value=\"x\"");
}

#[test]
fn test_rendering_is_deterministic() {
    let value = widget();
    assert_eq!(render(&value), render(&value));
    assert_eq!(value.to_string(), render(&value));
}

#[test]
fn test_extract_scalar_string() {
    assert_eq!(extract_scalar_string(&Value::string("abc")), "abc");
    assert_eq!(extract_scalar_string(&Value::absent()), "");
    assert_eq!(extract_scalar_string(&Value::from('c')), "c");
    assert_eq!(extract_scalar_string(&Value::from(42_u32)), "42");
    assert_eq!(extract_scalar_string(&Value::literal("x")), "x");
    assert_eq!(extract_scalar_string(&Value::string("")), "");
}

#[test]
fn test_string_value_on_fields() {
    let record = Record::new("App")
        .field("name", "todo-api")
        .field("url", None::<String>)
        .with(Field::redacted("token"))
        .with(Field::unexported("internal"));
    assert_eq!(record.get("name").unwrap().scalar_string(), "todo-api");
    assert_eq!(record.get("url").unwrap().scalar_string(), "");
    assert_eq!(record.get("token").unwrap().scalar_string(), SENSITIVE_MARKER);
    assert_eq!(record.get("internal").unwrap().scalar_string(), "");

    assert_eq!(string_value(&Some("todo-api".to_string())), "todo-api");
    assert_eq!(string_value(&None::<String>), "");
}

#[test]
fn test_field_debug_hides_sensitive_value() {
    let field = Field::new("token", Value::string("tok-123")).sensitive();
    let debug = format!("{field:?}");
    assert!(!debug.contains("tok-123"));
}
