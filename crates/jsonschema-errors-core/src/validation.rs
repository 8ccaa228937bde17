//! Typed validation trees.
//!
//! A validator reports failures as a JSON tree that mirrors the data: interior
//! nodes are keyed by property name or array index, leaves are keyed by the
//! failed keyword (`{"minimum": 0}`, `{"required": true}`). The tree is
//! classified into [`ValidationNode`] once, when it is built, so the walker
//! never has to sniff shapes.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ShapeError;

/// One failed keyword at a leaf, with the validator's detail for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub keyword: String,
    pub detail: Value,
}

/// A node of the validation tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum ValidationNode {
    /// Terminal failures at one location, in document order.
    Leaf(Vec<Failure>),
    /// Child locations, keyed by property name or array index, in document order.
    Interior(Vec<(String, ValidationNode)>),
}

impl ValidationNode {
    /// Classify a raw validation tree.
    ///
    /// A node is a leaf when none of its values is a JSON object. Arrays and
    /// `null` count as failure details. An interior child that carries an
    /// object-valued `schema` field is unwrapped to that field.
    pub fn from_value(value: &Value) -> Result<Self, ShapeError> {
        classify(value, &mut String::new(), 0)
    }

    /// Number of failure records this subtree will produce.
    pub fn failure_count(&self) -> usize {
        match self {
            ValidationNode::Leaf(failures) => failures.len(),
            ValidationNode::Interior(children) => {
                children.iter().map(|(_, child)| child.failure_count()).sum()
            }
        }
    }
}

impl TryFrom<Value> for ValidationNode {
    type Error = ShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl TryFrom<&Value> for ValidationNode {
    type Error = ShapeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

// Hard cap for classification; the walker enforces `max_depth` on its own.
const CLASSIFY_DEPTH_LIMIT: usize = 1024;

fn classify(
    value: &Value,
    pointer: &mut String,
    depth: usize,
) -> Result<ValidationNode, ShapeError> {
    if depth > CLASSIFY_DEPTH_LIMIT {
        return Err(ShapeError::new(
            pointer.clone(),
            "validation tree nested too deeply",
        ));
    }

    let Some(map) = value.as_object() else {
        return Err(ShapeError::new(
            pointer.clone(),
            format!("expected an object, found {}", kind_name(value)),
        ));
    };

    if map.values().all(|v| !v.is_object()) {
        let failures = map
            .iter()
            .map(|(keyword, detail)| Failure {
                keyword: keyword.clone(),
                detail: detail.clone(),
            })
            .collect();
        return Ok(ValidationNode::Leaf(failures));
    }

    let mut children = Vec::with_capacity(map.len());
    for (key, child) in map {
        let mark = pointer.len();
        pointer.push('/');
        push_escaped(pointer, key);
        let node = classify(unwrap_schema(child), pointer, depth + 1)?;
        pointer.truncate(mark);
        children.push((key.clone(), node));
    }
    Ok(ValidationNode::Interior(children))
}

fn unwrap_schema(child: &Value) -> &Value {
    match child.get("schema") {
        Some(inner @ Value::Object(_)) => inner,
        _ => child,
    }
}

fn push_escaped(pointer: &mut String, key: &str) {
    for c in key.chars() {
        match c {
            '~' => pointer.push_str("~0"),
            '/' => pointer.push_str("~1"),
            c => pointer.push(c),
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The raw result object a validator hands back.
///
/// Only the `validation` field is read. A missing, `null` or `false`
/// `validation` means there is nothing to report.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct ValidationResult {
    pub validation: Option<ValidationNode>,
}

impl ValidationResult {
    pub fn new(validation: ValidationNode) -> Self {
        Self {
            validation: Some(validation),
        }
    }

    pub fn from_value(value: &Value) -> Result<Self, ShapeError> {
        let raw = match value {
            Value::Object(map) => map.get("validation"),
            Value::Null | Value::Bool(false) => None,
            other => {
                return Err(ShapeError::new(
                    "",
                    format!(
                        "expected a validation result object, found {}",
                        kind_name(other)
                    ),
                ))
            }
        };

        let validation = match raw {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(tree) => Some(classify(tree, &mut "/validation".to_string(), 0)?),
        };
        Ok(Self { validation })
    }

    pub fn is_empty(&self) -> bool {
        self.validation.is_none()
    }
}

impl TryFrom<Value> for ValidationResult {
    type Error = ShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl From<ValidationNode> for ValidationResult {
    fn from(node: ValidationNode) -> Self {
        Self::new(node)
    }
}
