//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `to_rendered_text()` emits the same text as `render`
//! - The derived `slog::Value` implementation works with slog's serialization API
//! - Sensitive fields reach the serializer as the marker only

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use outline::{render, slog::ToRenderedText, Field, Outline, Record, Value, SENSITIVE_MARKER};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Other(String),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Other(val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.into()));
        Ok(())
    }
}

/// Helper function to serialize a slog::Value into any Serializer.
fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

#[derive(Clone, Outline)]
struct Credentials {
    user: String,
    #[outline(sensitive)]
    token: String,
    scopes: Vec<String>,
}

fn credentials() -> Credentials {
    Credentials {
        user: "ops".into(),
        token: "tok-123".into(),
        scopes: vec!["read".into(), "write".into()],
    }
}

#[test]
fn test_to_rendered_text_matches_render() {
    let creds = credentials();
    let rendered = creds.to_rendered_text();
    assert_eq!(rendered.as_str(), render(&creds.outline()));
    assert_eq!(
        rendered.as_str(),
        "{\n  user: \"ops\",\n  token: <sensitive>,\n  scopes: [\"read\",\"write\"]\n}"
    );
}

#[test]
fn test_derived_value_emits_rendered_string() {
    let creds = credentials();
    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&creds, "creds", &mut serializer);

    let Some(CapturedValue::Str(text)) = serializer.get("creds") else {
        panic!("expected a string value");
    };
    assert!(text.contains(SENSITIVE_MARKER));
    assert!(!text.contains("tok-123"));
    assert!(text.contains("user: \"ops\""));
}

#[test]
fn test_value_tree_implements_slog_value() {
    let value: Value = Record::new("Request")
        .field("path", "/apps")
        .with(Field::new("authorization", Value::string("Bearer abc")).sensitive())
        .into();
    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&value, "request", &mut serializer);
    assert_eq!(
        serializer.get("request"),
        Some(CapturedValue::Str(
            "{\n  path: \"/apps\",\n  authorization: <sensitive>\n}".into()
        ))
    );
}

#[test]
fn test_rendered_text_outlives_source() {
    let rendered = {
        let creds = credentials();
        creds.to_rendered_text()
    };
    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&rendered, "creds", &mut serializer);
    assert!(matches!(
        serializer.get("creds"),
        Some(CapturedValue::Str(text)) if !text.contains("tok-123")
    ));
}

#[test]
fn test_std_values_render_through_trait() {
    let mut serializer = CapturingSerializer::new();
    let tags = vec!["a", "b"];
    serialize_to_capture(&tags.to_rendered_text(), "tags", &mut serializer);
    assert_eq!(
        serializer.get("tags"),
        Some(CapturedValue::Str("[\"a\",\"b\"]".into()))
    );
}

#[test]
fn test_logger_receives_redacted_text() {
    struct SecretDetector {
        leaked: bool,
    }

    impl slog::Serializer for SecretDetector {
        fn emit_arguments(&mut self, _key: slog::Key, val: &Arguments<'_>) -> slog::Result {
            self.leaked |= val.to_string().contains("tok-123");
            Ok(())
        }
    }

    let creds = credentials();
    let mut detector = SecretDetector { leaked: false };
    serialize_to_capture(&creds, "creds", &mut detector);
    assert!(!detector.leaked);
}
