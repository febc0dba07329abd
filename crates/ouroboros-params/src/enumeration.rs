//! Enumerated string validation

use crate::errors::{ConfigError, ValidationError, ValidationResult};
use std::collections::HashSet;

/// Accepts only values byte-for-byte equal to an allowed value
///
/// No case folding and no trimming.
#[derive(Debug, Clone)]
pub struct EnumValidator {
    // Declaration order, for messages
    allowed: Vec<String>,
    lookup: HashSet<String>,
}

impl EnumValidator {
    pub(crate) fn new<I, S>(allowed: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lookup = HashSet::new();
        let mut ordered = Vec::new();
        for value in allowed {
            let value = value.into();
            if lookup.insert(value.clone()) {
                ordered.push(value);
            }
        }

        if ordered.is_empty() {
            return Err(ConfigError::EmptyEnum);
        }

        Ok(Self {
            allowed: ordered,
            lookup,
        })
    }

    /// Allowed values in declaration order, without duplicates
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub fn validate(&self, raw: &str) -> ValidationResult<String> {
        if self.lookup.contains(raw) {
            Ok(raw.to_string())
        } else {
            Err(ValidationError::NotInEnum {
                allowed: self.allowed.clone(),
                value: raw.to_string(),
            })
        }
    }
}
