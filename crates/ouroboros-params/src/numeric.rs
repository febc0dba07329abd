//! Numeric validation
//!
//! One generic validator serves all four numeric kinds. The kind decides how
//! the raw string is parsed and how `multiple_of` is checked:
//!
//! - integer kinds (`i32`, `i64`) require an exact zero remainder;
//! - floating kinds (`f32`, `f64`) accept a value when `value / multiple_of`
//!   is within a relative tolerance of an integer. The default tolerance is
//!   four machine epsilons of the kind, scaled by the quotient when it
//!   exceeds one. The window never reaches a half, so a value lying halfway
//!   between two multiples is always rejected. Near the kind's precision
//!   limit the window is capped at [`MAX_MULTIPLE_WINDOW`].

use crate::constraints::NumericConstraints;
use crate::errors::{Bound, ConfigError, ValidationError, ValidationResult};
use crate::types::ParamValue;
use std::fmt;

// ============================================================================
// Numeric Kind
// ============================================================================

/// A primitive type a parameter can be parsed into
pub trait NumericKind: Copy + PartialOrd + fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// Kind name used in error messages
    const NAME: &'static str;

    /// Parse a raw parameter; `None` for non-numeric, overflowing or non-finite input
    fn parse(raw: &str) -> Option<Self>;

    /// Whether `self` is usable as a minimum or maximum
    fn is_valid_bound(self) -> bool;

    /// Whether `self` is usable as a `multiple_of` divisor
    fn is_valid_divisor(self) -> bool;

    /// Whether `self` is a multiple of `divisor`
    fn is_multiple_of(self, divisor: Self, tolerance: Option<f64>) -> bool;

    fn into_value(self) -> ParamValue;
}

macro_rules! impl_integer_kind {
    ($ty:ty, $name:expr, $variant:ident) => {
        impl NumericKind for $ty {
            const NAME: &'static str = $name;

            fn parse(raw: &str) -> Option<Self> {
                raw.parse::<$ty>().ok()
            }

            fn is_valid_bound(self) -> bool {
                true
            }

            fn is_valid_divisor(self) -> bool {
                self > 0
            }

            fn is_multiple_of(self, divisor: Self, _tolerance: Option<f64>) -> bool {
                self.checked_rem(divisor) == Some(0)
            }

            fn into_value(self) -> ParamValue {
                ParamValue::$variant(self)
            }
        }
    };
}

/// Upper bound on the distance of `value / multiple_of` from an integer
/// accepted as rounding noise
pub const MAX_MULTIPLE_WINDOW: f64 = 0.25;

macro_rules! impl_float_kind {
    ($ty:ty, $name:expr, $variant:ident) => {
        impl NumericKind for $ty {
            const NAME: &'static str = $name;

            fn parse(raw: &str) -> Option<Self> {
                raw.parse::<$ty>().ok().filter(|v| v.is_finite())
            }

            fn is_valid_bound(self) -> bool {
                !self.is_nan()
            }

            fn is_valid_divisor(self) -> bool {
                self.is_finite() && self > 0.0
            }

            fn is_multiple_of(self, divisor: Self, tolerance: Option<f64>) -> bool {
                let tolerance = tolerance.unwrap_or(4.0 * f64::from(<$ty>::EPSILON));
                let quotient = f64::from(self) / f64::from(divisor);
                let window = (tolerance * quotient.abs().max(1.0)).min(MAX_MULTIPLE_WINDOW);
                (quotient - quotient.round()).abs() <= window
            }

            fn into_value(self) -> ParamValue {
                ParamValue::$variant(self)
            }
        }
    };
}

impl_integer_kind!(i32, "integer", Integer);
impl_integer_kind!(i64, "long", Long);
impl_float_kind!(f32, "float", Float);
impl_float_kind!(f64, "double", Double);

// ============================================================================
// Numeric Validator
// ============================================================================

/// Validates a raw string as a number of kind `T`
#[derive(Debug, Clone, PartialEq)]
pub struct NumericValidator<T> {
    constraints: NumericConstraints<T>,
    float_tolerance: Option<f64>,
}

impl<T: NumericKind> NumericValidator<T> {
    pub(crate) fn new(
        constraints: NumericConstraints<T>,
        float_tolerance: Option<f64>,
    ) -> Result<Self, ConfigError> {
        for bound in [constraints.maximum, constraints.minimum].into_iter().flatten() {
            if !bound.is_valid_bound() {
                return Err(ConfigError::InvalidConstraint(format!(
                    "{} bound {} is not comparable",
                    T::NAME,
                    bound
                )));
            }
        }

        if let (Some(min), Some(max)) = (constraints.minimum, constraints.maximum) {
            if min > max {
                return Err(ConfigError::InvalidConstraint(format!(
                    "minimum {} is greater than maximum {}",
                    min, max
                )));
            }
        }

        if let Some(divisor) = constraints.multiple_of {
            if !divisor.is_valid_divisor() {
                return Err(ConfigError::InvalidConstraint(format!(
                    "multiple_of must be a positive finite number (got {})",
                    divisor
                )));
            }
        }

        if let Some(tolerance) = float_tolerance {
            if !(tolerance.is_finite() && tolerance >= 0.0) {
                return Err(ConfigError::InvalidConstraint(format!(
                    "float tolerance must be a non-negative finite number (got {})",
                    tolerance
                )));
            }
        }

        Ok(Self {
            constraints,
            float_tolerance,
        })
    }

    /// Declared constraints
    pub fn constraints(&self) -> &NumericConstraints<T> {
        &self.constraints
    }

    /// Parse `raw` and check it against every configured constraint
    pub fn validate(&self, raw: &str) -> ValidationResult<T> {
        let value = T::parse(raw).ok_or_else(|| ValidationError::NotANumber {
            expected: T::NAME,
            value: raw.to_string(),
        })?;

        let c = &self.constraints;

        if let Some(max) = c.maximum {
            let violated = if c.exclusive_maximum { value >= max } else { value > max };
            if violated {
                return Err(out_of_range(
                    if c.exclusive_maximum { Bound::ExclusiveMaximum } else { Bound::Maximum },
                    max,
                    value,
                ));
            }
        }

        if let Some(min) = c.minimum {
            let violated = if c.exclusive_minimum { value <= min } else { value < min };
            if violated {
                return Err(out_of_range(
                    if c.exclusive_minimum { Bound::ExclusiveMinimum } else { Bound::Minimum },
                    min,
                    value,
                ));
            }
        }

        if let Some(divisor) = c.multiple_of {
            if !value.is_multiple_of(divisor, self.float_tolerance) {
                return Err(ValidationError::NotAMultiple {
                    multiple_of: divisor.to_string(),
                    value: value.to_string(),
                });
            }
        }

        Ok(value)
    }
}

fn out_of_range<T: NumericKind>(bound: Bound, limit: T, value: T) -> ValidationError {
    ValidationError::OutOfRange {
        bound,
        limit: limit.to_string(),
        value: value.to_string(),
    }
}
