//! The validation tree walker.
//!
//! Descends the validation tree in lock-step with the schema and the data,
//! emitting one [`ErrorRecord`] per failed keyword at each leaf. Output order
//! is depth-first, following the key order of the validation tree.

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::FormatOptions;
use crate::error::FormatError;
use crate::keyword::Keyword;
use crate::record::ErrorRecord;
use crate::render::{length_text, observed_type, property_count_text, value_text, UNKNOWN};
use crate::schema::{SchemaKind, SchemaRegistry, SchemaSource, SchemaView};
use crate::validation::{Failure, ValidationNode, ValidationResult};

/// Formats validation results, resolving schema names against a registry.
///
/// ```
/// use std::collections::HashMap;
/// use jsonschema_errors_core::{FormatOptions, Formatter, ValidationResult};
/// use serde_json::json;
///
/// let mut schemas = HashMap::new();
/// schemas.insert(
///     "person".to_string(),
///     json!({ "type": "object", "properties": { "age": { "minimum": 0 } } }),
/// );
/// let formatter = Formatter::new(schemas);
///
/// let result: ValidationResult =
///     serde_json::from_value(json!({ "validation": { "age": { "minimum": 0 } } })).unwrap();
/// let errors = formatter
///     .format("person", &json!({ "age": -1 }), &result, &FormatOptions::default())
///     .unwrap();
/// assert_eq!(errors[0].message, "Value -1 is less than minimum 0");
/// assert_eq!(errors[0].path, "$.age");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter<R> {
    registry: R,
}

impl<R: SchemaRegistry> Formatter<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Flatten `result` into error records.
    ///
    /// `schema` is either an inline schema or the name of one in the
    /// registry. An empty result yields an empty list without resolving the
    /// schema.
    pub fn format<'a>(
        &'a self,
        schema: impl Into<SchemaSource<'a>>,
        data: &Value,
        result: &ValidationResult,
        options: &FormatOptions,
    ) -> Result<Vec<ErrorRecord>, FormatError> {
        let Some(root) = result.validation.as_ref() else {
            return Ok(Vec::new());
        };
        let schema = schema.into().resolve(&self.registry)?;
        walk(schema, data, root, options)
    }

    /// Like [`Formatter::format`], taking the validator's raw result object.
    pub fn format_value<'a>(
        &'a self,
        schema: impl Into<SchemaSource<'a>>,
        data: &Value,
        result: Option<&Value>,
        options: &FormatOptions,
    ) -> Result<Vec<ErrorRecord>, FormatError> {
        let Some(raw) = result else {
            return Ok(Vec::new());
        };
        let result = ValidationResult::from_value(raw)?;
        self.format(schema, data, &result, options)
    }
}

/// Flatten `result` against an inline schema.
///
/// Passing a schema name fails with [`FormatError::NoRegistry`]; use a
/// [`Formatter`] for named schemas.
pub fn format<'a>(
    schema: impl Into<SchemaSource<'a>>,
    data: &Value,
    result: &ValidationResult,
    options: &FormatOptions,
) -> Result<Vec<ErrorRecord>, FormatError> {
    let Some(root) = result.validation.as_ref() else {
        return Ok(Vec::new());
    };
    match schema.into() {
        SchemaSource::Inline(schema) => walk(schema, data, root, options),
        SchemaSource::Named(name) => Err(FormatError::NoRegistry {
            name: name.to_string(),
        }),
    }
}

/// Like [`format`], taking the validator's raw result object.
pub fn format_value<'a>(
    schema: impl Into<SchemaSource<'a>>,
    data: &Value,
    result: Option<&Value>,
    options: &FormatOptions,
) -> Result<Vec<ErrorRecord>, FormatError> {
    let Some(raw) = result else {
        return Ok(Vec::new());
    };
    format(schema, data, &ValidationResult::from_value(raw)?, options)
}

fn walk(
    schema: &Value,
    data: &Value,
    root: &ValidationNode,
    options: &FormatOptions,
) -> Result<Vec<ErrorRecord>, FormatError> {
    let failures = root.failure_count();
    debug!(root = %options.root, failures = failures, "formatting validation result");

    let mut walker = Walker {
        options,
        records: Vec::with_capacity(failures),
    };
    walker.visit(
        SchemaView::new(Some(schema)),
        Some(data),
        root,
        &options.root,
        0,
    )?;
    Ok(walker.records)
}

struct Walker<'o> {
    options: &'o FormatOptions,
    records: Vec<ErrorRecord>,
}

impl Walker<'_> {
    fn visit(
        &mut self,
        schema: SchemaView<'_>,
        data: Option<&Value>,
        node: &ValidationNode,
        path: &str,
        depth: usize,
    ) -> Result<(), FormatError> {
        if depth > self.options.max_depth {
            return Err(FormatError::DepthExceeded {
                path: path.to_string(),
                max_depth: self.options.max_depth,
            });
        }

        match node {
            ValidationNode::Leaf(failures) => {
                for failure in failures {
                    let record = self.record(schema, data, failure, path);
                    trace!(code = %record.code, path = %record.path, "emitting error record");
                    self.records.push(record);
                }
            }
            ValidationNode::Interior(children) => {
                for (key, child) in children {
                    let (child_schema, child_data, child_path) = match schema.kind() {
                        SchemaKind::Array => {
                            let child_path = format!("{path}[{key}]");
                            (schema.items(), index(data, key), child_path)
                        }
                        kind => {
                            let child_path = format!("{path}{}{key}", self.options.sep);
                            let child_schema = if kind == SchemaKind::Object {
                                schema.property(key, &child_path)?
                            } else {
                                SchemaView::new(None)
                            };
                            (child_schema, property(data, key), child_path)
                        }
                    };

                    if child_schema.is_absent() && !schema.is_absent() {
                        debug!(path = %child_path, "no sub-schema for child");
                    }
                    self.visit(child_schema, child_data, child, &child_path, depth + 1)?;
                }
            }
        }
        Ok(())
    }

    fn record(
        &self,
        schema: SchemaView<'_>,
        data: Option<&Value>,
        failure: &Failure,
        path: &str,
    ) -> ErrorRecord {
        let keyword = Keyword::from_name(&failure.keyword);
        let limit = || constraint_text(schema, &keyword, &failure.detail);

        let message = match &keyword {
            Keyword::Type => format!(
                "Invalid type: {} should be {}",
                observed_type(data),
                expected_type(schema, &failure.detail)
            ),
            Keyword::Required => format!(
                "Missing required property: {}",
                last_segment(path, &self.options.sep)
            ),
            Keyword::Minimum => format!(
                "Value {} is less than minimum {}",
                value_text(data),
                limit()
            ),
            Keyword::Maximum => format!(
                "Value {} is greater than maximum {}",
                value_text(data),
                limit()
            ),
            Keyword::MultipleOf => format!(
                "Value {} is not a multiple of {}",
                value_text(data),
                limit()
            ),
            Keyword::Pattern => format!("String does not match pattern: {}", limit()),
            Keyword::MinLength => format!(
                "String is too short ({} chars), minimum {}",
                length_text(data),
                limit()
            ),
            Keyword::MaxLength => format!(
                "String is too long ({} chars), maximum {}",
                length_text(data),
                limit()
            ),
            Keyword::MinItems => format!(
                "Array is too short ({}), minimum {}",
                length_text(data),
                limit()
            ),
            Keyword::MaxItems => format!(
                "Array is too long ({}), maximum {}",
                length_text(data),
                limit()
            ),
            Keyword::UniqueItems => "Array items are not unique".to_string(),
            Keyword::MinProperties => format!(
                "Too few properties defined ({}), minimum {}",
                property_count_text(data),
                limit()
            ),
            Keyword::MaxProperties => format!(
                "Too many properties defined ({}), maximum {}",
                property_count_text(data),
                limit()
            ),
            Keyword::Enum => format!("No enum match ({}), expects: {}", value_text(data), limit()),
            Keyword::Not => "Data matches schema from \"not\"".to_string(),
            Keyword::Additional => format!(
                "Additional properties not allowed: {}",
                last_segment(path, &self.options.sep)
            ),
            Keyword::Unknown(name) => format!(
                "Validation error: {name} ({})",
                value_text(Some(&failure.detail))
            ),
        };

        ErrorRecord {
            code: keyword.code(),
            message,
            data: data.cloned(),
            path: path.to_string(),
        }
    }
}

/// Constraint value for the message: the schema's own value, else the
/// validator's detail when it is more than a flag.
fn constraint_text(schema: SchemaView<'_>, keyword: &Keyword<'_>, detail: &Value) -> String {
    let from_schema = keyword.schema_field().and_then(|f| schema.constraint(f));
    match (from_schema, detail) {
        (Some(value), _) => value_text(Some(value)),
        (None, Value::Bool(_) | Value::Null) => UNKNOWN.to_string(),
        (None, detail) => value_text(Some(detail)),
    }
}

/// Expected type for `INVALID_TYPE`: the validator reports it as the detail.
fn expected_type(schema: SchemaView<'_>, detail: &Value) -> String {
    match detail {
        Value::Bool(_) | Value::Null => value_text(schema.constraint("type")),
        detail => value_text(Some(detail)),
    }
}

fn last_segment<'p>(path: &'p str, sep: &str) -> &'p str {
    if sep.is_empty() {
        return path;
    }
    path.rsplit(sep).next().unwrap_or(path)
}

fn index<'d>(data: Option<&'d Value>, key: &str) -> Option<&'d Value> {
    let Ok(i) = key.parse::<usize>() else {
        debug!(key = %key, "array child key is not an index");
        return None;
    };
    data.and_then(|d| d.get(i))
}

/// Property lookup; numeric keys also index into arrays.
fn property<'d>(data: Option<&'d Value>, key: &str) -> Option<&'d Value> {
    match data? {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}
