//! Parameter validator dispatch
//!
//! [`ParamValidator`] is the sum type callers hold on to. It has two entry
//! points:
//!
//! - [`ParamValidator::validate`] for one raw value;
//! - [`ParamValidator::validate_collection`] for all raw values supplied for
//!   a parameter (e.g. a repeated query key). Scalars look at the first value
//!   only; arrays decode or collect the values as their format dictates.
//!
//! Validators are immutable and own all of their data, so one instance can be
//! shared across threads and reused for every request.

use crate::array::ArrayValidator;
use crate::enumeration::EnumValidator;
use crate::errors::{ParamLocation, ParameterError, ValidationError, ValidationResult};
use crate::numeric::{NumericKind, NumericValidator};
use crate::object::ObjectValidator;
use crate::string::StringValidator;
use crate::types::ParamValue;

/// A fully configured validator for one parameter
///
/// Build instances with [`ValidatorFactory`](crate::factory::ValidatorFactory).
#[derive(Debug, Clone)]
pub enum ParamValidator {
    Integer(NumericValidator<i32>),
    Long(NumericValidator<i64>),
    Float(NumericValidator<f32>),
    Double(NumericValidator<f64>),
    String(StringValidator),
    Enum(EnumValidator),
    Array(ArrayValidator),
    Object(ObjectValidator),
}

impl ParamValidator {
    /// Get human-readable kind name
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => i32::NAME,
            Self::Long(_) => i64::NAME,
            Self::Float(_) => f32::NAME,
            Self::Double(_) => f64::NAME,
            Self::String(_) => "string",
            Self::Enum(_) => "enum",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Validate a single raw value
    pub fn validate(&self, raw: &str) -> ValidationResult<ParamValue> {
        self.trace_rejection(self.check(raw))
    }

    /// Dispatch without tracing, used for array members and object properties
    pub(crate) fn check(&self, raw: &str) -> ValidationResult<ParamValue> {
        match self {
            Self::Integer(v) => v.validate(raw).map(ParamValue::Integer),
            Self::Long(v) => v.validate(raw).map(ParamValue::Long),
            Self::Float(v) => v.validate(raw).map(ParamValue::Float),
            Self::Double(v) => v.validate(raw).map(ParamValue::Double),
            Self::String(v) => v.validate(raw).map(ParamValue::String),
            Self::Enum(v) => v.validate(raw).map(ParamValue::String),
            Self::Array(v) => v.validate(raw).map(ParamValue::Array),
            Self::Object(v) => v.validate(raw).map(ParamValue::Object),
        }
    }

    /// Validate every raw value supplied for one parameter
    ///
    /// Arrays handle the values according to their collection format. Every
    /// other kind validates the first value and ignores the rest.
    pub fn validate_collection<S: AsRef<str>>(&self, values: &[S]) -> ValidationResult<ParamValue> {
        match self {
            Self::Array(v) => self.trace_rejection(v.validate_collection(values).map(ParamValue::Array)),
            _ => match values.first() {
                Some(first) => self.validate(first.as_ref()),
                None => Err(ValidationError::MissingValue),
            },
        }
    }

    /// Validate a single raw value and attribute any failure to `name`
    pub fn validate_param(
        &self,
        location: ParamLocation,
        name: &str,
        raw: &str,
    ) -> Result<ParamValue, ParameterError> {
        self.validate(raw)
            .map_err(|error| error.for_parameter(location, name))
    }

    /// Validate all raw values for a parameter and attribute any failure to `name`
    pub fn validate_param_collection<S: AsRef<str>>(
        &self,
        location: ParamLocation,
        name: &str,
        values: &[S],
    ) -> Result<ParamValue, ParameterError> {
        self.validate_collection(values)
            .map_err(|error| error.for_parameter(location, name))
    }

    fn trace_rejection(&self, result: ValidationResult<ParamValue>) -> ValidationResult<ParamValue> {
        if let Err(error) = &result {
            tracing::trace!(
                validator = self.type_name(),
                error_kind = %error.kind(),
                constraint = error.constraint().as_deref().unwrap_or(""),
                "Parameter rejected"
            );
        }
        result
    }
}

impl From<NumericValidator<i32>> for ParamValidator {
    fn from(v: NumericValidator<i32>) -> Self {
        Self::Integer(v)
    }
}

impl From<NumericValidator<i64>> for ParamValidator {
    fn from(v: NumericValidator<i64>) -> Self {
        Self::Long(v)
    }
}

impl From<NumericValidator<f32>> for ParamValidator {
    fn from(v: NumericValidator<f32>) -> Self {
        Self::Float(v)
    }
}

impl From<NumericValidator<f64>> for ParamValidator {
    fn from(v: NumericValidator<f64>) -> Self {
        Self::Double(v)
    }
}

impl From<StringValidator> for ParamValidator {
    fn from(v: StringValidator) -> Self {
        Self::String(v)
    }
}

impl From<EnumValidator> for ParamValidator {
    fn from(v: EnumValidator) -> Self {
        Self::Enum(v)
    }
}

impl From<ArrayValidator> for ParamValidator {
    fn from(v: ArrayValidator) -> Self {
        Self::Array(v)
    }
}

impl From<ObjectValidator> for ParamValidator {
    fn from(v: ObjectValidator) -> Self {
        Self::Object(v)
    }
}
