//! Conversion of live data into [`Value`] trees.
//!
//! - [`Outline`]: builds a fresh `Value` describing `self`
//! - [`string_value`]: reads one scalar attribute as a bare string
//!
//! ## Field Handling
//!
//! `#[derive(Outline)]` emits the per-type metadata table:
//!
//! | Annotation | Generated entry | Rendered as |
//! |------------|-----------------|-------------|
//! | None | `Field::new(name, field.outline())` | the field's value |
//! | `#[outline(sensitive)]` | `Field::redacted(name)` | `<sensitive>` |
//! | `#[outline(skip)]` | `Field::unexported(name)` | nothing |
//!
//! ## Container Implementations
//!
//! Standard containers map onto the value model directly: `Option` becomes
//! `Optional`, `Vec`/slices/sets become `Sequence`, maps with displayable
//! keys become `Mapping`. Smart pointers are transparent.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, VecDeque},
    fmt,
    marker::PhantomData,
    rc::Rc,
    sync::Arc,
};

use super::{text::extract_scalar_string, value::Value};

/// A type that can describe itself as a renderable [`Value`].
///
/// Derive it for records with `#[derive(Outline)]`. The derive also
/// implements `Debug` through the rendered form, so sensitive fields never
/// reach a `{:?}` either; opt out with `#[outline(skip_debug)]`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Outline`",
    label = "this type cannot be rendered",
    note = "use `#[derive(Outline)]` on the type definition",
    note = "or mark the field `#[outline(skip)]` / `#[outline(sensitive)]` so it is never read"
)]
pub trait Outline {
    /// Builds the value tree for `self`. Must not mutate or cache anything.
    fn outline(&self) -> Value;
}

/// Reads a single scalar attribute as a bare string.
///
/// Strings lose their surrounding quotes; absent values become `""`. This is
/// how the service layer reads optional attributes out of remote responses.
pub fn string_value<T>(value: &T) -> String
where
    T: Outline + ?Sized,
{
    extract_scalar_string(&value.outline())
}

impl Outline for Value {
    fn outline(&self) -> Value {
        self.clone()
    }
}

impl Outline for str {
    fn outline(&self) -> Value {
        Value::string(self)
    }
}

impl Outline for String {
    fn outline(&self) -> Value {
        Value::string(self.as_str())
    }
}

impl Outline for Cow<'_, str> {
    fn outline(&self) -> Value {
        Value::string(self.as_ref())
    }
}

macro_rules! impl_outline_scalar {
    ($($ty:ty),+) => {
        $(
            impl Outline for $ty {
                fn outline(&self) -> Value {
                    Value::from(*self)
                }
            }
        )+
    };
}

impl_outline_scalar!(bool, char, f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl Outline for isize {
    fn outline(&self) -> Value {
        Value::literal(self)
    }
}

impl Outline for usize {
    fn outline(&self) -> Value {
        Value::literal(self)
    }
}

impl<T: ?Sized> Outline for PhantomData<T> {
    fn outline(&self) -> Value {
        Value::absent()
    }
}

impl<T> Outline for Option<T>
where
    T: Outline,
{
    fn outline(&self) -> Value {
        self.as_ref()
            .map_or_else(Value::absent, |value| Value::present(value.outline()))
    }
}

impl<T> Outline for [T]
where
    T: Outline,
{
    fn outline(&self) -> Value {
        Value::Sequence(self.iter().map(Outline::outline).collect())
    }
}

impl<T, const N: usize> Outline for [T; N]
where
    T: Outline,
{
    fn outline(&self) -> Value {
        self.as_slice().outline()
    }
}

impl<T> Outline for Vec<T>
where
    T: Outline,
{
    fn outline(&self) -> Value {
        self.as_slice().outline()
    }
}

impl<T> Outline for VecDeque<T>
where
    T: Outline,
{
    fn outline(&self) -> Value {
        Value::Sequence(self.iter().map(Outline::outline).collect())
    }
}

impl<T> Outline for BTreeSet<T>
where
    T: Outline,
{
    fn outline(&self) -> Value {
        Value::Sequence(self.iter().map(Outline::outline).collect())
    }
}

impl<K, V, S> Outline for HashMap<K, V, S>
where
    K: fmt::Display,
    V: Outline,
{
    fn outline(&self) -> Value {
        Value::mapping(self.iter().map(|(k, v)| (k.to_string(), v.outline())))
    }
}

impl<K, V> Outline for BTreeMap<K, V>
where
    K: fmt::Display,
    V: Outline,
{
    fn outline(&self) -> Value {
        Value::mapping(self.iter().map(|(k, v)| (k.to_string(), v.outline())))
    }
}

macro_rules! impl_outline_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<T> Outline for $ptr<T>
            where
                T: Outline + ?Sized,
            {
                fn outline(&self) -> Value {
                    (**self).outline()
                }
            }
        )+
    };
}

impl_outline_pointer!(Box, Rc, Arc);

impl<T> Outline for &T
where
    T: Outline + ?Sized,
{
    fn outline(&self) -> Value {
        (**self).outline()
    }
}
