//! Options controlling how error paths are rendered.

use serde::{Deserialize, Serialize};

/// Default path prefix for the root of the data document.
pub const DEFAULT_ROOT: &str = "$";

/// Default separator between object property names in a path.
pub const DEFAULT_SEP: &str = ".";

/// Default recursion limit for the validation tree walk.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for a single formatting call.
///
/// Deserializing a partial options object fills every missing field from
/// [`FormatOptions::default`]; unrecognized fields are ignored.
///
/// ```
/// use jsonschema_errors_core::FormatOptions;
///
/// let opts: FormatOptions = serde_json::from_str(r#"{"sep": "/"}"#).unwrap();
/// assert_eq!(opts.root, "$");
/// assert_eq!(opts.sep, "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Path prefix for the top-level value.
    pub root: String,
    /// Separator placed before each object property name.
    pub sep: String,
    /// Maximum nesting of the validation tree before the walk gives up.
    #[serde(rename = "maxDepth")]
    pub max_depth: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            sep: DEFAULT_SEP.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FormatOptions {
    /// Returns a copy with the root prefix replaced.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Returns a copy with the property separator replaced.
    #[must_use]
    pub fn with_sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    /// Returns a copy with the depth limit replaced.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
