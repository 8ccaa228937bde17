//! # jsonschema-errors-core
//!
//! Turns the raw failure tree a JSON Schema validator produces into a flat,
//! ordered list of human-readable [`ErrorRecord`]s.
//!
//! ```
//! use jsonschema_errors_core::{format, FormatOptions, ValidationResult};
//! use serde_json::json;
//!
//! let schema = json!({ "type": "array", "items": { "type": "string" } });
//! let result: ValidationResult =
//!     serde_json::from_value(json!({ "validation": { "0": { "type": "string" } } })).unwrap();
//!
//! let errors = format(&schema, &json!([1, "ok"]), &result, &FormatOptions::default()).unwrap();
//! assert_eq!(errors[0].code.as_str(), "INVALID_TYPE");
//! assert_eq!(errors[0].path, "$[0]");
//! ```
//!
//! Schemas can also be referenced by name through a [`Formatter`] built over
//! a [`SchemaRegistry`].

pub mod config;
pub mod error;
pub mod formatter;
pub mod keyword;
mod pattern;
pub mod record;
pub mod render;
pub mod schema;
pub mod validation;

pub use config::FormatOptions;
pub use error::{FormatError, ShapeError};
pub use formatter::{format, format_value, Formatter};
pub use keyword::{ErrorCode, Keyword};
pub use record::ErrorRecord;
pub use schema::{SchemaRegistry, SchemaSource};
pub use validation::{Failure, ValidationNode, ValidationResult};
