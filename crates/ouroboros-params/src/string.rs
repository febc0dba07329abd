//! String validation
//!
//! Length bounds are checked before the pattern. Patterns are compiled once
//! with the `regex` crate, whose automata-based matcher runs in time linear
//! in the input, so adversarial values cannot trigger catastrophic
//! backtracking.

use crate::config::LengthMode;
use crate::constraints::StringConstraints;
use crate::errors::{ConfigError, ValidationError, ValidationResult};
use regex::Regex;

/// Validates length and pattern of a raw string
#[derive(Debug, Clone)]
pub struct StringValidator {
    constraints: StringConstraints,
    regex: Option<Regex>,
    length_mode: LengthMode,
}

impl StringValidator {
    pub(crate) fn new(
        constraints: StringConstraints,
        length_mode: LengthMode,
        full_match: bool,
    ) -> Result<Self, ConfigError> {
        if let (Some(min), Some(max)) = (constraints.min_length, constraints.max_length) {
            if min > max {
                return Err(ConfigError::InvalidConstraint(format!(
                    "min_length {} is greater than max_length {}",
                    min, max
                )));
            }
        }

        let regex = constraints
            .pattern
            .as_deref()
            .map(|pattern| compile(pattern, full_match))
            .transpose()?;

        Ok(Self {
            constraints,
            regex,
            length_mode,
        })
    }

    /// Declared constraints
    pub fn constraints(&self) -> &StringConstraints {
        &self.constraints
    }

    /// Check `raw` and return it unchanged
    pub fn validate(&self, raw: &str) -> ValidationResult<String> {
        let c = &self.constraints;

        if c.min_length.is_some() || c.max_length.is_some() {
            let length = self.length_mode.measure(raw);
            let too_short = c.min_length.is_some_and(|min| length < min);
            let too_long = c.max_length.is_some_and(|max| length > max);
            if too_short || too_long {
                return Err(ValidationError::LengthViolation {
                    min: c.min_length,
                    max: c.max_length,
                    length,
                });
            }
        }

        if let (Some(regex), Some(pattern)) = (&self.regex, &c.pattern) {
            if !regex.is_match(raw) {
                return Err(ValidationError::PatternMismatch {
                    pattern: pattern.clone(),
                    value: raw.to_string(),
                });
            }
        }

        Ok(raw.to_string())
    }
}

fn compile(pattern: &str, full_match: bool) -> Result<Regex, ConfigError> {
    if !full_match {
        return Regex::new(pattern).map_err(|e| invalid_pattern(pattern, e));
    }

    match Regex::new(&format!("^(?:{})$", pattern)) {
        Ok(regex) => Ok(regex),
        Err(err) => {
            // A trailing `#` comment in verbose mode swallows the closing group
            Regex::new(pattern).map_err(|e| invalid_pattern(pattern, e))?;
            Regex::new(&format!("^(?:{}\n)$", pattern)).map_err(|_| invalid_pattern(pattern, err))
        }
    }
}

fn invalid_pattern(pattern: &str, err: regex::Error) -> ConfigError {
    ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    }
}
