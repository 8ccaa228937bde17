//! Error types for the formatter.

/// Errors that abort a formatting call.
///
/// Gaps in the data or schema never produce an error; they only leave the
/// affected message fields unknown. These variants cover inputs the walk
/// cannot make sense of at all.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    /// A schema was referenced by name but the registry has no such entry.
    #[error("unknown schema {name:?}")]
    UnknownSchema { name: String },

    /// A schema was referenced by name but no registry was supplied.
    #[error("schema {name:?} referenced by name, but no schema registry is available")]
    NoRegistry { name: String },

    /// The validation tree does not have the expected shape.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// A `patternProperties` key is not a valid regular expression.
    #[error("invalid patternProperties regex {pattern:?} at {path}: {source}")]
    InvalidPattern {
        path: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The validation tree is nested deeper than the configured limit.
    #[error("validation tree exceeds max depth {max_depth} at {path}")]
    DepthExceeded { path: String, max_depth: usize },
}

/// A malformed validation tree, located by a JSON pointer into the tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed validation tree at {pointer:?}: {reason}")]
pub struct ShapeError {
    /// JSON pointer (RFC 6901) of the offending node, `""` for the root.
    pub pointer: String,
    /// What was wrong with the node.
    pub reason: String,
}

impl ShapeError {
    pub(crate) fn new(pointer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            reason: reason.into(),
        }
    }
}
