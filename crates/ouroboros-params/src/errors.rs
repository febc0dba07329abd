//! Validation error types
//!
//! This module defines the typed failures returned by parameter validators,
//! the construction errors returned by the factory, and the parameter-level
//! wrapper callers use to attribute a failure to a named parameter.

use crate::deserializer::CollectionFormat;
use std::fmt;
use thiserror::Error;

// ============================================================================
// Validation Result
// ============================================================================

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// Validation Error
// ============================================================================

/// A single validation failure
///
/// Every variant carries the offending constraint together with the value
/// that violated it, so callers can build their own diagnostics. Failures are
/// terminal: validators never retry or recover from them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The raw value does not parse as the declared numeric kind
    #[error("value '{value}' is not a valid {expected}")]
    NotANumber {
        expected: &'static str,
        value: String,
    },

    /// The parsed value violates a minimum or maximum bound
    #[error("value {value} violates {bound} {limit}")]
    OutOfRange {
        bound: Bound,
        limit: String,
        value: String,
    },

    /// The parsed value is not a multiple of the configured divisor
    #[error("value {value} is not a multiple of {multiple_of}")]
    NotAMultiple { multiple_of: String, value: String },

    /// The string length is outside the configured bounds
    #[error("length {length} is outside the allowed range {}", describe_range(.min, .max))]
    LengthViolation {
        min: Option<usize>,
        max: Option<usize>,
        length: usize,
    },

    /// The string does not match the configured pattern
    #[error("value '{value}' does not match pattern '{pattern}'")]
    PatternMismatch { pattern: String, value: String },

    /// The string is not one of the allowed values
    #[error("value '{value}' is not one of [{}]", join_allowed(.allowed))]
    NotInEnum { allowed: Vec<String>, value: String },

    /// The raw value is not a valid encoding for the collection format
    #[error("malformed {format} container: {reason}")]
    MalformedContainer {
        format: CollectionFormat,
        reason: String,
    },

    /// The decoded collection has fewer items than allowed
    #[error("expected at least {min} items, got {count}")]
    TooFewItems { min: usize, count: usize },

    /// The decoded collection has more items than allowed
    #[error("expected at most {max} items, got {count}")]
    TooManyItems { max: usize, count: usize },

    /// A collection entry point received no values at all
    #[error("a value is required")]
    MissingValue,

    /// A required object property is absent
    #[error("missing required property '{name}'")]
    MissingProperty { name: String },

    /// An object property is not declared and extra properties are forbidden
    #[error("unexpected property '{name}'")]
    UnexpectedProperty { name: String },
}

impl ValidationError {
    /// Machine-readable classification of this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotANumber { .. } => ErrorKind::NotANumber,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::NotAMultiple { .. } => ErrorKind::NotAMultiple,
            Self::LengthViolation { .. } => ErrorKind::LengthViolation,
            Self::PatternMismatch { .. } => ErrorKind::PatternMismatch,
            Self::NotInEnum { .. } => ErrorKind::NotInEnum,
            Self::MalformedContainer { .. } => ErrorKind::MalformedContainer,
            Self::TooFewItems { .. } => ErrorKind::TooFewItems,
            Self::TooManyItems { .. } => ErrorKind::TooManyItems,
            Self::MissingValue => ErrorKind::MissingValue,
            Self::MissingProperty { .. } => ErrorKind::MissingProperty,
            Self::UnexpectedProperty { .. } => ErrorKind::UnexpectedProperty,
        }
    }

    /// Attribute this failure to a named parameter
    pub fn for_parameter(self, location: ParamLocation, parameter: impl Into<String>) -> ParameterError {
        ParameterError {
            location,
            parameter: parameter.into(),
            error: self,
        }
    }

    /// The violated constraint, without the offending input
    ///
    /// Safe to log: raw header and cookie values never appear here.
    pub fn constraint(&self) -> Option<String> {
        match self {
            Self::NotANumber { expected, .. } => Some((*expected).to_string()),
            Self::OutOfRange { bound, limit, .. } => Some(format!("{} {}", bound, limit)),
            Self::NotAMultiple { multiple_of, .. } => Some(format!("multiple of {}", multiple_of)),
            Self::LengthViolation { min, max, .. } => Some(format!("length {}", describe_range(min, max))),
            Self::PatternMismatch { pattern, .. } => Some(format!("pattern {}", pattern)),
            Self::NotInEnum { allowed, .. } => Some(format!("one of [{}]", join_allowed(allowed))),
            Self::MalformedContainer { format, .. } => Some(format!("{} encoding", format)),
            Self::TooFewItems { min, .. } => Some(format!("at least {} items", min)),
            Self::TooManyItems { max, .. } => Some(format!("at most {} items", max)),
            Self::MissingProperty { name } => Some(format!("required property {}", name)),
            Self::MissingValue | Self::UnexpectedProperty { .. } => None,
        }
    }

    pub(crate) fn malformed(format: CollectionFormat, reason: impl Into<String>) -> Self {
        Self::MalformedContainer {
            format,
            reason: reason.into(),
        }
    }
}

fn describe_range(min: &Option<usize>, max: &Option<usize>) -> String {
    match (*min, *max) {
        (Some(min), Some(max)) => format!("[{}, {}]", min, max),
        (Some(min), None) => format!("[{}, ..)", min),
        (None, Some(max)) => format!("[0, {}]", max),
        (None, None) => "[0, ..)".to_string(),
    }
}

fn join_allowed(allowed: &[String]) -> String {
    allowed.join(", ")
}

// ============================================================================
// Bound
// ============================================================================

/// Which numeric bound a value violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Maximum,
    ExclusiveMaximum,
    Minimum,
    ExclusiveMinimum,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maximum => write!(f, "maximum"),
            Self::ExclusiveMaximum => write!(f, "exclusive maximum"),
            Self::Minimum => write!(f, "minimum"),
            Self::ExclusiveMinimum => write!(f, "exclusive minimum"),
        }
    }
}

// ============================================================================
// Error Kind Classification
// ============================================================================

/// Classification of validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    NotANumber,
    OutOfRange,
    NotAMultiple,
    LengthViolation,
    PatternMismatch,
    NotInEnum,
    MalformedContainer,
    TooFewItems,
    TooManyItems,
    MissingValue,
    MissingProperty,
    UnexpectedProperty,
}

impl ErrorKind {
    /// Stable snake_case identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotANumber => "not_a_number",
            Self::OutOfRange => "out_of_range",
            Self::NotAMultiple => "not_a_multiple",
            Self::LengthViolation => "length_violation",
            Self::PatternMismatch => "pattern_mismatch",
            Self::NotInEnum => "not_in_enum",
            Self::MalformedContainer => "malformed_container",
            Self::TooFewItems => "too_few_items",
            Self::TooManyItems => "too_many_items",
            Self::MissingValue => "missing_value",
            Self::MissingProperty => "missing_property",
            Self::UnexpectedProperty => "unexpected_property",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Parameter Attribution
// ============================================================================

/// Where a parameter was extracted from
///
/// The routing layer knows this; validators do not. It only shapes the
/// message of a [`ParameterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParamLocation {
    /// Path parameter (e.g., /users/{id})
    Path,
    /// Query parameter (e.g., ?page=1)
    Query,
    /// HTTP header
    Header,
    /// Cookie value
    Cookie,
    /// Flat form field
    Form,
}

impl ParamLocation {
    /// Get string representation for error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
            Self::Cookie => "cookie",
            Self::Form => "form",
        }
    }
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation failure attributed to a named parameter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location} parameter '{parameter}': {error}")]
pub struct ParameterError {
    /// Where the parameter came from
    pub location: ParamLocation,
    /// Parameter name, as supplied by the caller
    pub parameter: String,
    /// The underlying failure
    #[source]
    pub error: ValidationError,
}

impl ParameterError {
    /// Machine-readable classification of the underlying failure
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

/// Pydantic-compatible shape: `{"loc": [...], "msg": "...", "type": "..."}`
#[cfg(feature = "serde")]
impl serde::Serialize for ParameterError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ParameterError", 3)?;
        state.serialize_field("loc", &[self.location.as_str(), self.parameter.as_str()])?;
        state.serialize_field("msg", &self.error.to_string())?;
        state.serialize_field("type", self.error.kind().as_str())?;
        state.end()
    }
}

// ============================================================================
// Construction Errors
// ============================================================================

/// Errors raised while building a validator from declared constraints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid constraint: {0}")]
    InvalidConstraint(String),

    #[error("enum must allow at least one value")]
    EmptyEnum,

    #[error("unknown collection format '{0}'")]
    UnknownCollectionFormat(String),

    #[error("collection format {format} is not supported for {target}")]
    UnsupportedFormat {
        format: CollectionFormat,
        target: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::NotANumber.to_string(), "not_a_number");
        assert_eq!(ErrorKind::OutOfRange.to_string(), "out_of_range");
        assert_eq!(ErrorKind::MalformedContainer.to_string(), "malformed_container");
    }

    #[test]
    fn test_kind_matches_variant() {
        let err = ValidationError::TooFewItems { min: 2, count: 1 };
        assert_eq!(err.kind(), ErrorKind::TooFewItems);
        assert_eq!(err.to_string(), "expected at least 2 items, got 1");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ValidationError::OutOfRange {
            bound: Bound::ExclusiveMaximum,
            limit: "10".to_string(),
            value: "10".to_string(),
        };
        assert_eq!(err.to_string(), "value 10 violates exclusive maximum 10");
    }

    #[test]
    fn test_length_violation_message() {
        let err = ValidationError::LengthViolation {
            min: Some(2),
            max: None,
            length: 1,
        };
        assert_eq!(err.to_string(), "length 1 is outside the allowed range [2, ..)");
    }

    #[test]
    fn test_not_in_enum_message() {
        let err = ValidationError::NotInEnum {
            allowed: vec!["asc".to_string(), "desc".to_string()],
            value: "ASC".to_string(),
        };
        assert_eq!(err.to_string(), "value 'ASC' is not one of [asc, desc]");
    }

    #[test]
    fn test_constraint_omits_input() {
        let err = ValidationError::PatternMismatch {
            pattern: "[a-z]+".to_string(),
            value: "session=s3cr3t".to_string(),
        };
        assert_eq!(err.constraint().as_deref(), Some("pattern [a-z]+"));

        let err = ValidationError::OutOfRange {
            bound: Bound::Maximum,
            limit: "10".to_string(),
            value: "11".to_string(),
        };
        assert_eq!(err.constraint().as_deref(), Some("maximum 10"));

        let err = ValidationError::UnexpectedProperty {
            name: "s3cr3t".to_string(),
        };
        assert!(err.constraint().is_none());
    }

    #[test]
    fn test_for_parameter() {
        let err = ValidationError::MissingValue.for_parameter(ParamLocation::Query, "limit");
        assert_eq!(err.parameter, "limit");
        assert_eq!(err.kind(), ErrorKind::MissingValue);
        assert_eq!(err.to_string(), "query parameter 'limit': a value is required");
    }
}
