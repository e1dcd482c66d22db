//! The value model: a closed, recursively defined tree of renderable shapes.
//!
//! A [`Value`] is built fresh from live data right before rendering (usually
//! through [`crate::Outline`]) and discarded afterwards. Nothing here holds
//! state between renders.
//!
//! | Variant | Children |
//! |---------|----------|
//! | `Record` | ordered [`Field`]s carrying `exported` / `sensitive` flags |
//! | `Sequence` | zero or more values |
//! | `Mapping` | unique string keys, iterated in ascending order |
//! | `Optional` | present inner value, or nothing |
//! | `Scalar` | none |

use std::{borrow::Cow, collections::BTreeMap, fmt};

use super::text::SENSITIVE_MARKER;

/// A renderable value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A named aggregate with fields in declaration order.
    Record(Record),
    /// An ordered list of values.
    Sequence(Vec<Value>),
    /// String-keyed entries. Keys are unique and iterate in sorted order.
    Mapping(BTreeMap<String, Value>),
    /// A value that may be absent.
    Optional(Option<Box<Value>>),
    /// A terminal printable value.
    Scalar(Scalar),
}

impl Value {
    /// An absent optional.
    #[must_use]
    pub fn absent() -> Self {
        Self::Optional(None)
    }

    /// A present optional wrapping `value`.
    #[must_use]
    pub fn present(value: Value) -> Self {
        Self::Optional(Some(Box::new(value)))
    }

    /// A quoted string scalar.
    #[must_use]
    pub fn string<S: Into<String>>(value: S) -> Self {
        Self::Scalar(Scalar::Str(value.into()))
    }

    /// An unquoted scalar rendered through `Display`.
    ///
    /// This is the fallback for kinds the model does not name explicitly.
    #[must_use]
    pub fn literal<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self::Scalar(Scalar::Literal(value.to_string()))
    }

    /// The bare redaction marker, for sensitive values outside a record.
    #[must_use]
    pub fn redacted() -> Self {
        Self::Scalar(Scalar::Literal(SENSITIVE_MARKER.to_string()))
    }

    /// Collects a sequence.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Collects a mapping. Later duplicates of a key replace earlier ones.
    pub fn mapping<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Returns `true` for an absent optional, looking through nested optionals.
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Optional(None) => true,
            Self::Optional(Some(inner)) => inner.is_absent(),
            _ => false,
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Scalar(Scalar::Char(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Scalar(Scalar::Float(f64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

macro_rules! impl_from_integer {
    ($variant:ident, $wide:ty, $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Scalar(Scalar::$variant(<$wide>::from(value)))
                }
            }
        )+
    };
}

impl_from_integer!(Int, i128, i8, i16, i32, i64, i128);
impl_from_integer!(UInt, u128, u8, u16, u32, u64, u128);

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::absent, |inner| Self::present(inner.into()))
    }
}

/// Terminal values.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// Rendered double-quoted with standard escaping.
    Str(String),
    /// Rendered single-quoted with standard escaping.
    Char(char),
    Bool(bool),
    Int(i128),
    UInt(u128),
    Float(f64),
    /// Any other printable value, rendered verbatim.
    Literal(String),
}

/// A named aggregate of fields.
///
/// The record name is metadata; only the fields appear in rendered output.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    name: Cow<'static, str>,
    fields: Vec<Field>,
}

impl Record {
    /// Creates an empty record.
    pub fn new<N: Into<Cow<'static, str>>>(name: N) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field, keeping declaration order.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Builder form of [`Record::push`].
    #[must_use]
    pub fn with(mut self, field: Field) -> Self {
        self.push(field);
        self
    }

    /// Shorthand for `with(Field::new(name, value))`.
    #[must_use]
    pub fn field<N, V>(self, name: N, value: V) -> Self
    where
        N: Into<Cow<'static, str>>,
        V: Into<Value>,
    {
        self.with(Field::new(name, value.into()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// A named, flag-annotated slot within a [`Record`].
#[derive(Clone, PartialEq)]
pub struct Field {
    name: Cow<'static, str>,
    value: Value,
    exported: bool,
    sensitive: bool,
}

impl Field {
    /// An exported, non-sensitive field.
    pub fn new<N: Into<Cow<'static, str>>>(name: N, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            exported: true,
            sensitive: false,
        }
    }

    /// A sensitive field whose value is never captured.
    pub fn redacted<N: Into<Cow<'static, str>>>(name: N) -> Self {
        Self::new(name, Value::absent()).sensitive()
    }

    /// An unexported field. Its value is never captured either.
    pub fn unexported<N: Into<Cow<'static, str>>>(name: N) -> Self {
        Self::new(name, Value::absent()).exported(false)
    }

    /// Marks the field as sensitive.
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Sets whether the field is visible at the renderer's boundary.
    #[must_use]
    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    /// Whether the field produces a line when its record is rendered.
    ///
    /// Sensitivity wins over absence: a sensitive field always shows the
    /// marker, without looking at the value.
    pub fn is_visible(&self) -> bool {
        self.exported && (self.sensitive || !self.value.is_absent())
    }

    /// Reads the field as a bare string; empty when unexported or absent.
    pub fn scalar_string(&self) -> String {
        if !self.exported {
            return String::new();
        }
        if self.sensitive {
            return SENSITIVE_MARKER.to_string();
        }
        super::text::extract_scalar_string(&self.value)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Field");
        debug.field("name", &self.name);
        if self.sensitive {
            debug.field("value", &SENSITIVE_MARKER);
        } else {
            debug.field("value", &self.value);
        }
        debug
            .field("exported", &self.exported)
            .field("sensitive", &self.sensitive)
            .finish()
    }
}
