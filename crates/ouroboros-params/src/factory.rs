//! Validator construction
//!
//! [`ValidatorFactory`] is the single place validators are built. Each
//! variant has one constructor taking an explicit constraint struct; absent
//! fields mean "unconstrained" for that axis, and axes the struct leaves to
//! configuration (collection format, length mode, ...) come from the
//! factory's [`ValidationConfig`].
//!
//! The factory never validates parameter values. It only rejects constraint
//! sets that cannot be satisfied consistently (e.g. `minimum > maximum`).
//!
//! # Example
//!
//! ```
//! use ouroboros_params::{NumericConstraints, ValidatorFactory};
//!
//! let factory = ValidatorFactory::new();
//! let ids = factory
//!     .array(factory.long(NumericConstraints::default().minimum(1)).unwrap());
//!
//! let value = ids.validate("3,5,8").unwrap();
//! assert_eq!(value.as_array().map(|items| items.len()), Some(3));
//! ```

use crate::array::ArrayValidator;
use crate::config::ValidationConfig;
use crate::constraints::{
    ArrayConstraints, NumericConstraints, ObjectConstraints, PropertyDescriptor, StringConstraints,
};
use crate::enumeration::EnumValidator;
use crate::errors::ConfigError;
use crate::numeric::{NumericKind, NumericValidator};
use crate::object::ObjectValidator;
use crate::string::StringValidator;
use crate::validators::ParamValidator;

/// Builds immutable [`ParamValidator`]s from declared constraints
#[derive(Debug, Clone, Default)]
pub struct ValidatorFactory {
    config: ValidationConfig,
}

impl ValidatorFactory {
    /// Factory with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory with a custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    // ========================================================================
    // Numeric
    // ========================================================================

    /// 32-bit integer validator
    pub fn integer(&self, constraints: NumericConstraints<i32>) -> Result<ParamValidator, ConfigError> {
        self.numeric(constraints)
    }

    /// 64-bit integer validator
    pub fn long(&self, constraints: NumericConstraints<i64>) -> Result<ParamValidator, ConfigError> {
        self.numeric(constraints)
    }

    /// Single-precision float validator
    pub fn float(&self, constraints: NumericConstraints<f32>) -> Result<ParamValidator, ConfigError> {
        self.numeric(constraints)
    }

    /// Double-precision float validator
    pub fn double(&self, constraints: NumericConstraints<f64>) -> Result<ParamValidator, ConfigError> {
        self.numeric(constraints)
    }

    fn numeric<T>(&self, constraints: NumericConstraints<T>) -> Result<ParamValidator, ConfigError>
    where
        T: NumericKind,
        ParamValidator: From<NumericValidator<T>>,
    {
        tracing::debug!(
            kind = T::NAME,
            maximum = ?constraints.maximum,
            minimum = ?constraints.minimum,
            exclusive_maximum = constraints.exclusive_maximum,
            exclusive_minimum = constraints.exclusive_minimum,
            multiple_of = ?constraints.multiple_of,
            "Building numeric validator"
        );
        let validator = NumericValidator::new(constraints, self.config.float_tolerance)?;
        Ok(validator.into())
    }

    // ========================================================================
    // Strings
    // ========================================================================

    /// String validator (pattern and/or length bounds)
    pub fn string(&self, constraints: StringConstraints) -> Result<ParamValidator, ConfigError> {
        tracing::debug!(
            pattern = ?constraints.pattern,
            min_length = ?constraints.min_length,
            max_length = ?constraints.max_length,
            "Building string validator"
        );
        let validator = StringValidator::new(
            constraints,
            self.config.length_mode,
            self.config.full_match_patterns,
        )?;
        Ok(validator.into())
    }

    /// Enumerated string validator
    pub fn enumeration<I, S>(&self, allowed: I) -> Result<ParamValidator, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let validator = EnumValidator::new(allowed)?;
        tracing::debug!(allowed = validator.allowed().len(), "Building enum validator");
        Ok(validator.into())
    }

    // ========================================================================
    // Collections
    // ========================================================================

    /// Array validator with the default collection format and no size bounds
    pub fn array(&self, member: ParamValidator) -> ParamValidator {
        let format = self.config.default_collection_format;
        tracing::debug!(member = member.type_name(), format = %format, "Building array validator");
        ArrayValidator::unbounded(member, format).into()
    }

    /// Array validator with an explicit format and size bounds
    pub fn array_with(
        &self,
        member: ParamValidator,
        constraints: ArrayConstraints,
    ) -> Result<ParamValidator, ConfigError> {
        let format = constraints
            .collection_format
            .unwrap_or(self.config.default_collection_format);
        tracing::debug!(
            member = member.type_name(),
            format = %format,
            min_items = ?constraints.min_items,
            max_items = ?constraints.max_items,
            "Building array validator"
        );
        let validator = ArrayValidator::new(member, format, constraints.min_items, constraints.max_items)?;
        Ok(validator.into())
    }

    /// Object validator over declared properties
    pub fn object(
        &self,
        properties: Vec<PropertyDescriptor>,
        constraints: ObjectConstraints,
    ) -> Result<ParamValidator, ConfigError> {
        let format = constraints
            .collection_format
            .unwrap_or(self.config.default_collection_format);
        let extra = constraints.extra.unwrap_or(self.config.extra_properties);
        tracing::debug!(
            properties = properties.len(),
            format = %format,
            extra = ?extra,
            "Building object validator"
        );
        let validator = ObjectValidator::new(properties, format, extra)?;
        Ok(validator.into())
    }
}
