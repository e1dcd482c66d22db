//! Text rendering for [`Value`] trees.
//!
//! Rendering is a pure, recursive walk. It never fails on its own; the only
//! error it can surface is the caller's writer failing.
//!
//! Formatting policy:
//!
//! | Node | Output |
//! |------|--------|
//! | Record / Mapping | `{` + one `name: value` line per visible entry + `}`, always multi-line |
//! | Sequence of up to 3 | `[a,b,c]` on one line |
//! | Sequence of 4 or more | one element per line |
//! | Absent optional | nothing |
//! | Sensitive field | [`SENSITIVE_MARKER`] |

use std::fmt::{self, Write};

use super::value::{Record, Scalar, Value};

/// Text substituted for the value of a sensitive field.
pub const SENSITIVE_MARKER: &str = "<sensitive>";

/// Spaces added per nesting level.
const INDENT_STEP: usize = 2;

/// Longest sequence still rendered on a single line.
const INLINE_SEQUENCE_LIMIT: usize = 3;

/// Renders `value` into a new string.
pub fn render(value: &Value) -> String {
    value.to_string()
}

/// Renders `value` into a caller-supplied buffer.
pub fn render_into<W: Write>(value: &Value, out: &mut W) -> fmt::Result {
    write!(out, "{value}")
}

/// Renders `value` and strips the quotes around a single scalar.
///
/// Absent values yield an empty string. Text shorter than two characters, or
/// not wrapped in matching quotes, is returned unchanged.
pub fn extract_scalar_string(value: &Value) -> String {
    if value.is_absent() {
        return String::new();
    }
    let text = render(value);
    match strip_quotes(&text) {
        Some(inner) => inner.to_string(),
        None => text,
    }
}

fn strip_quotes(text: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        text.strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, 0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(value) => write!(f, "{value:?}"),
            Scalar::Char(value) => write!(f, "{value:?}"),
            Scalar::Bool(value) => write!(f, "{value}"),
            Scalar::Int(value) => write!(f, "{value}"),
            Scalar::UInt(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Literal(value) => f.write_str(value),
        }
    }
}

/// What goes after `name: ` in a block line.
enum Entry<'a> {
    Redacted,
    Value(&'a Value),
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, indent: usize) -> fmt::Result {
    match value {
        Value::Record(record) => write_record(f, record, indent),
        Value::Sequence(items) => write_sequence(f, items, indent),
        Value::Mapping(entries) => write_block(
            f,
            entries
                .iter()
                .filter(|(_, value)| !value.is_absent())
                .map(|(key, value)| (key.as_str(), Entry::Value(value))),
            indent,
        ),
        Value::Optional(Some(inner)) => write_value(f, inner, indent),
        Value::Optional(None) => Ok(()),
        Value::Scalar(scalar) => write!(f, "{scalar}"),
    }
}

fn write_record(f: &mut fmt::Formatter<'_>, record: &Record, indent: usize) -> fmt::Result {
    let entries = record
        .fields()
        .iter()
        .filter(|field| field.is_visible())
        .map(|field| {
            let entry = if field.is_sensitive() {
                Entry::Redacted
            } else {
                Entry::Value(field.value())
            };
            (field.name(), entry)
        });
    write_block(f, entries, indent)
}

fn write_block<'a, I>(f: &mut fmt::Formatter<'_>, entries: I, indent: usize) -> fmt::Result
where
    I: Iterator<Item = (&'a str, Entry<'a>)>,
{
    let inner = indent + INDENT_STEP;
    f.write_str("{\n")?;
    let mut first = true;
    for (name, entry) in entries {
        if !first {
            f.write_str(",\n")?;
        }
        first = false;
        write_indent(f, inner)?;
        write!(f, "{name}: ")?;
        match entry {
            Entry::Redacted => f.write_str(SENSITIVE_MARKER)?,
            Entry::Value(value) => write_value(f, value, inner)?,
        }
    }
    if !first {
        f.write_char('\n')?;
    }
    write_indent(f, indent)?;
    f.write_char('}')
}

fn write_sequence(f: &mut fmt::Formatter<'_>, items: &[Value], indent: usize) -> fmt::Result {
    let items: Vec<&Value> = items.iter().filter(|item| !item.is_absent()).collect();
    let inner = indent + INDENT_STEP;

    if items.len() <= INLINE_SEQUENCE_LIMIT {
        f.write_char('[')?;
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                f.write_char(',')?;
            }
            write_value(f, item, inner)?;
        }
        return f.write_char(']');
    }

    f.write_str("[\n")?;
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(",\n")?;
        }
        write_indent(f, inner)?;
        write_value(f, item, inner)?;
    }
    f.write_char('\n')?;
    write_indent(f, indent)?;
    f.write_char(']')
}

fn write_indent(f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
    write!(f, "{:width$}", "")
}
