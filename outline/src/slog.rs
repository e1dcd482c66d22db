//! Adapters for emitting rendered values through `slog`.
//!
//! This module exists to connect [`crate::Outline`] with `slog` by providing
//! `slog::Value` implementations that emit the rendered text form.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from the rendered
//!   [`crate::Value`], so sensitive fields show the marker and never their
//!   contents.
//! - Avoiding fallible logging APIs: rendering is total, so the only error
//!   passed back to `slog` is the serializer's own.
//!
//! It does not configure `slog` or choose what to log.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::rendering::{render, Outline, Value};

/// A `slog::Value` that emits an already rendered payload as a string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedText {
    text: String,
}

impl RenderedText {
    fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl SlogValue for RenderedText {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.text)
    }
}

impl SlogValue for Value {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        RenderedText::new(render(self)).serialize(record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their rendered form.
///
/// The value is rendered eagerly, so the returned `RenderedText` owns its
/// text and can outlive the source.
///
/// ## Example
/// ```ignore
/// use outline::slog::ToRenderedText;
///
/// info!(logger, "event"; "stack" => summary.to_rendered_text());
/// ```
pub trait ToRenderedText: Outline {
    /// Renders `self` into a `slog::Value`.
    fn to_rendered_text(&self) -> RenderedText {
        RenderedText::new(render(&self.outline()))
    }
}

impl<T> ToRenderedText for T where T: Outline + ?Sized {}
