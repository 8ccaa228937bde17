//! Failed-keyword names and the stable error codes they map to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable machine-readable code attached to every error record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidType,
    ObjectRequired,
    Minimum,
    Maximum,
    MultipleOf,
    Pattern,
    MinLength,
    MaxLength,
    ArrayLengthShort,
    ArrayLengthLong,
    ArrayUnique,
    ObjectPropertiesMinimum,
    ObjectPropertiesMaximum,
    EnumMismatch,
    NotPassed,
    AdditionalProperties,
    UnknownError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidType => "INVALID_TYPE",
            ErrorCode::ObjectRequired => "OBJECT_REQUIRED",
            ErrorCode::Minimum => "MINIMUM",
            ErrorCode::Maximum => "MAXIMUM",
            ErrorCode::MultipleOf => "MULTIPLE_OF",
            ErrorCode::Pattern => "PATTERN",
            ErrorCode::MinLength => "MIN_LENGTH",
            ErrorCode::MaxLength => "MAX_LENGTH",
            ErrorCode::ArrayLengthShort => "ARRAY_LENGTH_SHORT",
            ErrorCode::ArrayLengthLong => "ARRAY_LENGTH_LONG",
            ErrorCode::ArrayUnique => "ARRAY_UNIQUE",
            ErrorCode::ObjectPropertiesMinimum => "OBJECT_PROPERTIES_MINIMUM",
            ErrorCode::ObjectPropertiesMaximum => "OBJECT_PROPERTIES_MAXIMUM",
            ErrorCode::EnumMismatch => "ENUM_MISMATCH",
            ErrorCode::NotPassed => "NOT_PASSED",
            ErrorCode::AdditionalProperties => "ADDITIONAL_PROPERTIES",
            ErrorCode::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed keyword as reported at a validation leaf.
///
/// Keywords without a dedicated message fall into [`Keyword::Unknown`], which
/// still yields a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyword<'a> {
    Type,
    Required,
    Minimum,
    Maximum,
    MultipleOf,
    Pattern,
    MinLength,
    MaxLength,
    MinItems,
    MaxItems,
    UniqueItems,
    MinProperties,
    MaxProperties,
    Enum,
    Not,
    Additional,
    Unknown(&'a str),
}

impl<'a> Keyword<'a> {
    pub fn from_name(name: &'a str) -> Self {
        match name {
            "type" => Keyword::Type,
            "required" => Keyword::Required,
            "minimum" => Keyword::Minimum,
            "maximum" => Keyword::Maximum,
            "multipleOf" => Keyword::MultipleOf,
            "pattern" => Keyword::Pattern,
            "minLength" => Keyword::MinLength,
            "maxLength" => Keyword::MaxLength,
            "minItems" => Keyword::MinItems,
            "maxItems" => Keyword::MaxItems,
            "uniqueItems" => Keyword::UniqueItems,
            "minProperties" => Keyword::MinProperties,
            "maxProperties" => Keyword::MaxProperties,
            "enum" => Keyword::Enum,
            "not" => Keyword::Not,
            "additional" => Keyword::Additional,
            other => Keyword::Unknown(other),
        }
    }

    /// The schema keyword holding the constraint value quoted in the message.
    pub fn schema_field(&self) -> Option<&'static str> {
        match self {
            Keyword::Minimum => Some("minimum"),
            Keyword::Maximum => Some("maximum"),
            Keyword::MultipleOf => Some("multipleOf"),
            Keyword::Pattern => Some("pattern"),
            Keyword::MinLength => Some("minLength"),
            Keyword::MaxLength => Some("maxLength"),
            Keyword::MinItems => Some("minItems"),
            Keyword::MaxItems => Some("maxItems"),
            Keyword::MinProperties => Some("minProperties"),
            Keyword::MaxProperties => Some("maxProperties"),
            Keyword::Enum => Some("enum"),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Keyword::Type => ErrorCode::InvalidType,
            Keyword::Required => ErrorCode::ObjectRequired,
            Keyword::Minimum => ErrorCode::Minimum,
            Keyword::Maximum => ErrorCode::Maximum,
            Keyword::MultipleOf => ErrorCode::MultipleOf,
            Keyword::Pattern => ErrorCode::Pattern,
            Keyword::MinLength => ErrorCode::MinLength,
            Keyword::MaxLength => ErrorCode::MaxLength,
            Keyword::MinItems => ErrorCode::ArrayLengthShort,
            Keyword::MaxItems => ErrorCode::ArrayLengthLong,
            Keyword::UniqueItems => ErrorCode::ArrayUnique,
            Keyword::MinProperties => ErrorCode::ObjectPropertiesMinimum,
            Keyword::MaxProperties => ErrorCode::ObjectPropertiesMaximum,
            Keyword::Enum => ErrorCode::EnumMismatch,
            Keyword::Not => ErrorCode::NotPassed,
            Keyword::Additional => ErrorCode::AdditionalProperties,
            Keyword::Unknown(_) => ErrorCode::UnknownError,
        }
    }
}
