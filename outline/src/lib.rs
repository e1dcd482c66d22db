//! Deterministic, redacted text rendering for structured data.
//!
//! This crate separates:
//! - **Shape**: what a value looks like ([`Value`]: records, sequences,
//!   mappings, optionals, scalars).
//! - **Rendering**: how that shape becomes indented diagnostic text
//!   ([`render`]).
//!
//! Live data reaches the renderer through [`Outline`], which is derived for
//! your types and implemented for common standard library types.
//!
//! Key rules:
//! - Use `#[outline(sensitive)]` for fields whose value must never be shown.
//!   The value is not even read; the output shows `<sensitive>`.
//! - Use `#[outline(skip)]` for fields that should not appear at all.
//! - `None` fields are omitted rather than printed as null.
//! - `Debug` for derived types prints the rendered form, so the same
//!   redaction applies to `{:?}`.
//!
//! ```ignore
//! use outline::{render, Outline};
//!
//! #[derive(Outline)]
//! struct Widget {
//!     name: String,
//!     #[outline(sensitive)]
//!     secret: String,
//!     url: Option<String>,
//! }
//!
//! let text = render(&widget.outline());
//! ```
//!
//! What this crate does:
//! - defines the value model and the text renderer
//! - converts std types and derived records into values
//! - provides integrations behind feature flags (`slog`, `service`)
//!
//! What it does not do:
//! - parse rendered text back into data
//! - offer configurable output syntax

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use outline_derive::Outline;

// Module declarations
mod rendering;
#[cfg(feature = "service")]
pub mod service;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use rendering::{
    extract_scalar_string, render, render_into, string_value, Field, Outline, Record, Scalar,
    Value, SENSITIVE_MARKER,
};
