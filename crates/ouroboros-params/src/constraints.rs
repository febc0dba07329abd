//! Declared constraints for each validator kind
//!
//! Every field is optional; an absent field leaves that axis unconstrained.
//! Constraint structs are plain data: the factory checks them for
//! consistency and copies them into immutable validators.

use crate::config::ExtraProperties;
use crate::deserializer::CollectionFormat;
use crate::validators::ParamValidator;

// ============================================================================
// Numeric Constraints
// ============================================================================

/// Constraints for numeric validation (generic over i32, i64, f32 and f64)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumericConstraints<T> {
    /// Maximum value
    pub maximum: Option<T>,
    /// Minimum value
    pub minimum: Option<T>,
    /// Reject values equal to `maximum`
    pub exclusive_maximum: bool,
    /// Reject values equal to `minimum`
    pub exclusive_minimum: bool,
    /// Value must be a multiple of this number
    pub multiple_of: Option<T>,
}

impl<T> Default for NumericConstraints<T> {
    fn default() -> Self {
        Self {
            maximum: None,
            minimum: None,
            exclusive_maximum: false,
            exclusive_minimum: false,
            multiple_of: None,
        }
    }
}

impl<T> NumericConstraints<T> {
    /// Inclusive bounds and an optional divisor
    pub fn bounded(maximum: Option<T>, minimum: Option<T>, multiple_of: Option<T>) -> Self {
        Self {
            maximum,
            minimum,
            multiple_of,
            ..Self::default()
        }
    }

    /// Set bound exclusivity
    pub fn exclusive(mut self, exclusive_maximum: bool, exclusive_minimum: bool) -> Self {
        self.exclusive_maximum = exclusive_maximum;
        self.exclusive_minimum = exclusive_minimum;
        self
    }

    /// Set the maximum
    pub fn maximum(mut self, maximum: T) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Set the minimum
    pub fn minimum(mut self, minimum: T) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the divisor
    pub fn multiple_of(mut self, multiple_of: T) -> Self {
        self.multiple_of = Some(multiple_of);
        self
    }
}

// ============================================================================
// String Constraints
// ============================================================================

/// Constraints for string validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StringConstraints {
    /// Regex pattern (compiled once, when the validator is built)
    pub pattern: Option<String>,
    /// Minimum length
    pub min_length: Option<usize>,
    /// Maximum length
    pub max_length: Option<usize>,
}

impl StringConstraints {
    /// Pattern only
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// Set length bounds
    pub fn length(mut self, min_length: Option<usize>, max_length: Option<usize>) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }
}

// ============================================================================
// Array Constraints
// ============================================================================

/// Constraints for array validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArrayConstraints {
    /// Encoding of the items; `None` uses the configured default
    pub collection_format: Option<CollectionFormat>,
    /// Minimum number of items
    pub min_items: Option<usize>,
    /// Maximum number of items
    pub max_items: Option<usize>,
}

impl ArrayConstraints {
    /// Format and item-count bounds
    pub fn new(
        collection_format: CollectionFormat,
        max_items: Option<usize>,
        min_items: Option<usize>,
    ) -> Self {
        Self {
            collection_format: Some(collection_format),
            min_items,
            max_items,
        }
    }
}

// ============================================================================
// Object Constraints
// ============================================================================

/// Constraints for object validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObjectConstraints {
    /// Encoding of the properties; `None` uses the configured default
    pub collection_format: Option<CollectionFormat>,
    /// Undeclared properties; `None` uses the configured default
    pub extra: Option<ExtraProperties>,
}

/// A declared object property
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// Property name
    pub name: String,
    /// Validator for the property value
    pub validator: ParamValidator,
    /// Whether the property must be present
    pub required: bool,
}

impl PropertyDescriptor {
    /// Create a required property
    pub fn new(name: impl Into<String>, validator: ParamValidator) -> Self {
        Self {
            name: name.into(),
            validator,
            required: true,
        }
    }

    /// Set property as optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}
