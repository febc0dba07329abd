//! Configuration options for validator construction
//!
//! A [`ValidationConfig`] is held by the [`ValidatorFactory`](crate::factory::ValidatorFactory)
//! and supplies the defaults for every axis a constraint struct leaves unset.
//! Values are copied into each validator when it is built.

use crate::deserializer::CollectionFormat;

// ============================================================================
// Length Mode
// ============================================================================

/// How string length is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthMode {
    /// Count Unicode scalar values
    #[default]
    Chars,
    /// Count UTF-8 bytes
    Bytes,
}

impl LengthMode {
    /// Measure a string according to this mode
    #[inline]
    pub fn measure(self, s: &str) -> usize {
        match self {
            Self::Chars => s.chars().count(),
            Self::Bytes => s.len(),
        }
    }
}

// ============================================================================
// Extra Property Handling
// ============================================================================

/// How to handle object properties that are not declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExtraProperties {
    /// Drop undeclared properties (default)
    #[default]
    Ignore,
    /// Keep undeclared properties as plain strings
    Allow,
    /// Reject the value (validation error)
    Forbid,
}

// ============================================================================
// Validation Config
// ============================================================================

/// Defaults applied by the factory when building validators
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationConfig {
    /// Collection format for arrays and objects that do not declare one
    pub default_collection_format: CollectionFormat,

    /// How `min_length` / `max_length` measure strings
    pub length_mode: LengthMode,

    /// Require patterns to match the whole value instead of any substring
    pub full_match_patterns: bool,

    /// Relative tolerance for floating-point `multiple_of` checks
    ///
    /// `None` uses four machine epsilons of the validated kind.
    pub float_tolerance: Option<f64>,

    /// Undeclared object properties
    pub extra_properties: ExtraProperties,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            default_collection_format: CollectionFormat::Csv,
            length_mode: LengthMode::Chars,
            full_match_patterns: true,
            float_tolerance: None,
            extra_properties: ExtraProperties::Ignore,
        }
    }
}

impl ValidationConfig {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default collection format
    pub fn default_format(mut self, format: CollectionFormat) -> Self {
        self.default_collection_format = format;
        self
    }

    /// Set the string length mode
    pub fn length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// Match patterns against the whole value (`true`) or any substring
    pub fn full_match_patterns(mut self, full_match: bool) -> Self {
        self.full_match_patterns = full_match;
        self
    }

    /// Override the floating-point `multiple_of` tolerance
    pub fn float_tolerance(mut self, tolerance: f64) -> Self {
        self.float_tolerance = Some(tolerance);
        self
    }

    /// Set undeclared object property handling
    pub fn extra_properties(mut self, extra: ExtraProperties) -> Self {
        self.extra_properties = extra;
        self
    }

    /// Forbid undeclared object properties
    pub fn forbid_extra(mut self) -> Self {
        self.extra_properties = ExtraProperties::Forbid;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert_eq!(config.default_collection_format, CollectionFormat::Csv);
        assert_eq!(config.length_mode, LengthMode::Chars);
        assert!(config.full_match_patterns);
        assert!(config.float_tolerance.is_none());
        assert_eq!(config.extra_properties, ExtraProperties::Ignore);
    }

    #[test]
    fn test_config_builder() {
        let config = ValidationConfig::new()
            .default_format(CollectionFormat::Pipes)
            .length_mode(LengthMode::Bytes)
            .full_match_patterns(false)
            .float_tolerance(1e-6)
            .forbid_extra();

        assert_eq!(config.default_collection_format, CollectionFormat::Pipes);
        assert_eq!(config.length_mode, LengthMode::Bytes);
        assert!(!config.full_match_patterns);
        assert_eq!(config.float_tolerance, Some(1e-6));
        assert_eq!(config.extra_properties, ExtraProperties::Forbid);
    }

    #[test]
    fn test_length_mode_measure() {
        assert_eq!(LengthMode::Chars.measure("héllo"), 5);
        assert_eq!(LengthMode::Bytes.measure("héllo"), 6);
    }
}
