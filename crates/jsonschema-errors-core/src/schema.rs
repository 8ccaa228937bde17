//! Read-only access to the parts of a JSON Schema the formatter needs.
//!
//! The walker only ever looks at `type`, `properties`, `patternProperties`
//! and `items` to descend, plus scalar constraint values for message text.
//! Everything else in the schema is ignored.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::FormatError;
use crate::pattern::PropertyPattern;

/// A source of named schemas, used when the caller refers to a schema by
/// name instead of passing it inline.
pub trait SchemaRegistry {
    /// Look up a schema by name.
    fn schema(&self, name: &str) -> Option<&Value>;
}

impl SchemaRegistry for HashMap<String, Value> {
    fn schema(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl SchemaRegistry for BTreeMap<String, Value> {
    fn schema(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl SchemaRegistry for Map<String, Value> {
    fn schema(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<R: SchemaRegistry + ?Sized> SchemaRegistry for &R {
    fn schema(&self, name: &str) -> Option<&Value> {
        (**self).schema(name)
    }
}

/// The schema argument of a formatting call: inline, or a registry name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaSource<'a> {
    Inline(&'a Value),
    Named(&'a str),
}

impl<'a> From<&'a Value> for SchemaSource<'a> {
    /// A bare JSON string is taken as a schema name.
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(name) => SchemaSource::Named(name),
            other => SchemaSource::Inline(other),
        }
    }
}

impl<'a> From<&'a str> for SchemaSource<'a> {
    fn from(name: &'a str) -> Self {
        SchemaSource::Named(name)
    }
}

impl<'a> From<&'a String> for SchemaSource<'a> {
    fn from(name: &'a String) -> Self {
        SchemaSource::Named(name)
    }
}

impl<'a> SchemaSource<'a> {
    /// Resolve to a schema value, consulting `registry` for names.
    pub fn resolve<R>(self, registry: &'a R) -> Result<&'a Value, FormatError>
    where
        R: SchemaRegistry + ?Sized,
    {
        match self {
            SchemaSource::Inline(schema) => Ok(schema),
            SchemaSource::Named(name) => {
                registry
                    .schema(name)
                    .ok_or_else(|| FormatError::UnknownSchema {
                        name: name.to_string(),
                    })
            }
        }
    }
}

/// How a schema node lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Object,
    Array,
    Other,
}

/// A borrowed view over a (possibly absent) schema node.
#[derive(Debug, Clone, Copy)]
pub struct SchemaView<'a> {
    node: Option<&'a Value>,
}

impl<'a> SchemaView<'a> {
    pub fn new(node: Option<&'a Value>) -> Self {
        Self { node }
    }

    pub fn is_absent(&self) -> bool {
        self.node.is_none()
    }

    /// The node's `type`. A type list (`["object", "null"]`) is not
    /// descended into.
    pub fn kind(&self) -> SchemaKind {
        match self.node.and_then(|s| s.get("type")).and_then(Value::as_str) {
            Some("object") => SchemaKind::Object,
            Some("array") => SchemaKind::Array,
            _ => SchemaKind::Other,
        }
    }

    /// A scalar constraint value such as `minimum` or `enum`.
    pub fn constraint(&self, keyword: &str) -> Option<&'a Value> {
        self.node.and_then(|s| s.get(keyword))
    }

    /// The sub-schema for array elements.
    pub fn items(&self) -> SchemaView<'a> {
        SchemaView::new(self.constraint("items"))
    }

    /// The sub-schema for object property `key`: `properties[key]` first,
    /// then the first `patternProperties` entry whose regex matches `key`.
    /// Entries the regex engine cannot express are skipped.
    ///
    /// `path` only locates the failure if a pattern is malformed.
    pub fn property(&self, key: &str, path: &str) -> Result<SchemaView<'a>, FormatError> {
        if let Some(found) = self
            .constraint("properties")
            .and_then(Value::as_object)
            .and_then(|props| props.get(key))
        {
            return Ok(SchemaView::new(Some(found)));
        }

        let Some(patterns) = self
            .constraint("patternProperties")
            .and_then(Value::as_object)
        else {
            return Ok(SchemaView::new(None));
        };

        for (pattern, sub) in patterns {
            let compiled =
                PropertyPattern::compile(pattern).map_err(|source| FormatError::InvalidPattern {
                    path: path.to_string(),
                    pattern: pattern.clone(),
                    source,
                })?;
            if !compiled.is_supported() {
                debug!(pattern = %pattern, path = %path, "skipping patternProperties entry");
                continue;
            }
            if compiled.is_match(key) {
                return Ok(SchemaView::new(Some(sub)));
            }
        }

        Ok(SchemaView::new(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_string_value_becomes_named_source() {
        let name = json!("person");
        assert_eq!(SchemaSource::from(&name), SchemaSource::Named("person"));

        let inline = json!({ "type": "object" });
        assert_eq!(SchemaSource::from(&inline), SchemaSource::Inline(&inline));
    }

    #[test]
    fn test_resolve_named_and_missing() {
        let mut registry = HashMap::new();
        registry.insert("person".to_string(), json!({ "type": "object" }));

        let found = SchemaSource::Named("person").resolve(&registry).unwrap();
        assert_eq!(found, &json!({ "type": "object" }));

        let err = SchemaSource::Named("ghost").resolve(&registry).unwrap_err();
        assert!(matches!(err, FormatError::UnknownSchema { ref name } if name == "ghost"));
    }

    #[test]
    fn test_kind() {
        let object = json!({ "type": "object" });
        let array = json!({ "type": "array" });
        let union = json!({ "type": ["object", "null"] });
        assert_eq!(SchemaView::new(Some(&object)).kind(), SchemaKind::Object);
        assert_eq!(SchemaView::new(Some(&array)).kind(), SchemaKind::Array);
        assert_eq!(SchemaView::new(Some(&union)).kind(), SchemaKind::Other);
        assert_eq!(SchemaView::new(None).kind(), SchemaKind::Other);
    }

    #[test]
    fn test_property_prefers_properties_over_patterns() {
        let schema = json!({
            "type": "object",
            "properties": { "age": { "type": "integer" } },
            "patternProperties": { "^a": { "type": "string" } }
        });
        let view = SchemaView::new(Some(&schema));

        let age = view.property("age", "$").unwrap();
        assert_eq!(age.constraint("type"), Some(&json!("integer")));

        let alias = view.property("alias", "$").unwrap();
        assert_eq!(alias.constraint("type"), Some(&json!("string")));

        assert!(view.property("zzz", "$").unwrap().is_absent());
    }

    #[test]
    fn test_first_matching_pattern_wins() {
        let schema = json!({
            "type": "object",
            "patternProperties": {
                "^x_": { "title": "first" },
                "^x": { "title": "second" }
            }
        });
        let view = SchemaView::new(Some(&schema));
        let found = view.property("x_1", "$").unwrap();
        assert_eq!(found.constraint("title"), Some(&json!("first")));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let schema = json!({
            "type": "object",
            "patternProperties": { "(": {} }
        });
        let err = SchemaView::new(Some(&schema))
            .property("a", "$.a")
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidPattern { ref path, .. } if path == "$.a"));
    }

    #[test]
    fn test_lookahead_pattern_resolves_child() {
        let schema = json!({
            "type": "object",
            "patternProperties": {
                "^(?!x-)": { "maxLength": 2 },
                "^x-": { "title": "vendor" }
            }
        });
        let view = SchemaView::new(Some(&schema));

        let name = view.property("name", "$.name").unwrap();
        assert_eq!(name.constraint("maxLength"), Some(&json!(2)));

        let vendor = view.property("x-ext", "$.x-ext").unwrap();
        assert_eq!(vendor.constraint("title"), Some(&json!("vendor")));
    }

    #[test]
    fn test_inexpressible_pattern_is_skipped() {
        let schema = json!({
            "type": "object",
            "patternProperties": {
                "(?<=a)b": { "title": "lookbehind" },
                "b$": { "title": "suffix" }
            }
        });
        let found = SchemaView::new(Some(&schema)).property("ab", "$.ab").unwrap();
        assert_eq!(found.constraint("title"), Some(&json!("suffix")));
    }
}
