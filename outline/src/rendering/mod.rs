//! Value model, rendering, and conversion.
//!
//! This module ties the pieces together:
//!
//! - **`value`**: Data layer - what can be rendered (`Value`, `Record`, `Field`, `Scalar`)
//! - **`text`**: Output layer - how a value becomes text (`render`, `SENSITIVE_MARKER`)
//! - **`outline`**: Conversion layer - how live data becomes a value (`Outline`)

mod outline;
mod text;
mod value;

pub use outline::{string_value, Outline};
pub use text::{extract_scalar_string, render, render_into, SENSITIVE_MARKER};
pub use value::{Field, Record, Scalar, Value};
