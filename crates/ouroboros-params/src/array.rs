//! Array validation
//!
//! An array parameter is decoded with its collection format, checked against
//! item-count bounds, then validated member by member. Validation is
//! fail-fast: the first member failure is returned unchanged and the
//! remaining members are never evaluated.

use crate::deserializer::CollectionFormat;
use crate::errors::{ConfigError, ValidationError, ValidationResult};
use crate::types::ParamValue;
use crate::validators::ParamValidator;

/// Validates a collection of members encoded in one or more raw values
#[derive(Debug, Clone)]
pub struct ArrayValidator {
    member: Box<ParamValidator>,
    format: CollectionFormat,
    min_items: Option<usize>,
    max_items: Option<usize>,
}

impl ArrayValidator {
    pub(crate) fn new(
        member: ParamValidator,
        format: CollectionFormat,
        min_items: Option<usize>,
        max_items: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if let (Some(min), Some(max)) = (min_items, max_items) {
            if min > max {
                return Err(ConfigError::InvalidConstraint(format!(
                    "min_items {} is greater than max_items {}",
                    min, max
                )));
            }
        }

        Ok(Self {
            member: Box::new(member),
            format,
            min_items,
            max_items,
        })
    }

    pub(crate) fn unbounded(member: ParamValidator, format: CollectionFormat) -> Self {
        Self {
            member: Box::new(member),
            format,
            min_items: None,
            max_items: None,
        }
    }

    /// Validator applied to every member
    pub fn member(&self) -> &ParamValidator {
        &self.member
    }

    pub fn collection_format(&self) -> CollectionFormat {
        self.format
    }

    pub fn min_items(&self) -> Option<usize> {
        self.min_items
    }

    pub fn max_items(&self) -> Option<usize> {
        self.max_items
    }

    /// Decode one raw value and validate its members
    pub fn validate(&self, raw: &str) -> ValidationResult<Vec<ParamValue>> {
        let items = self.format.deserializer().decode_array(raw)?;
        self.validate_items(&items)
    }

    /// Validate the raw values supplied for one parameter
    ///
    /// With [`CollectionFormat::Multi`] every value is one member. Any other
    /// format expects exactly one encoded value.
    pub fn validate_collection<S: AsRef<str>>(&self, values: &[S]) -> ValidationResult<Vec<ParamValue>> {
        match values {
            _ if self.format == CollectionFormat::Multi => self.validate_items(values),
            [] => Err(ValidationError::MissingValue),
            [single] => self.validate(single.as_ref()),
            _ => Err(ValidationError::malformed(
                self.format,
                format!("expected a single encoded value, got {}", values.len()),
            )),
        }
    }

    fn validate_items<S: AsRef<str>>(&self, items: &[S]) -> ValidationResult<Vec<ParamValue>> {
        let count = items.len();

        if let Some(min) = self.min_items {
            if count < min {
                return Err(ValidationError::TooFewItems { min, count });
            }
        }

        if let Some(max) = self.max_items {
            if count > max {
                return Err(ValidationError::TooManyItems { max, count });
            }
        }

        items.iter().map(|item| self.member.check(item.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{NumericConstraints, StringConstraints};
    use crate::errors::ErrorKind;
    use crate::factory::ValidatorFactory;

    fn strings(format: CollectionFormat, min: Option<usize>, max: Option<usize>) -> ArrayValidator {
        let member = ValidatorFactory::new().string(StringConstraints::default()).unwrap();
        ArrayValidator::new(member, format, min, max).unwrap()
    }

    fn integers() -> ArrayValidator {
        let member = ValidatorFactory::new().integer(NumericConstraints::default()).unwrap();
        ArrayValidator::new(member, CollectionFormat::Csv, None, None).unwrap()
    }

    #[test]
    fn test_csv_strings() {
        let values = strings(CollectionFormat::Csv, None, None).validate("a,b,c").unwrap();
        assert_eq!(
            values,
            vec![ParamValue::from("a"), ParamValue::from("b"), ParamValue::from("c")]
        );
    }

    #[test]
    fn test_item_bounds() {
        let v = strings(CollectionFormat::Csv, Some(2), Some(2));
        assert_eq!(
            v.validate("a").unwrap_err(),
            ValidationError::TooFewItems { min: 2, count: 1 }
        );
        assert_eq!(
            v.validate("a,b,c").unwrap_err(),
            ValidationError::TooManyItems { max: 2, count: 3 }
        );
        assert!(v.validate("a,b").is_ok());
    }

    #[test]
    fn test_fail_fast() {
        let err = integers().validate("1,x,y").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotANumber {
                expected: "integer",
                value: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_counts_checked_before_members() {
        let member = ValidatorFactory::new().integer(NumericConstraints::default()).unwrap();
        let v = ArrayValidator::new(member, CollectionFormat::Csv, None, Some(1)).unwrap();
        assert_eq!(v.validate("x,y").unwrap_err().kind(), ErrorKind::TooManyItems);
    }

    #[test]
    fn test_multi_collection() {
        let v = strings(CollectionFormat::Multi, None, Some(3));
        let values = v.validate_collection(&["a,b", "c"]).unwrap();
        assert_eq!(values, vec![ParamValue::from("a,b"), ParamValue::from("c")]);

        let empty: [&str; 0] = [];
        assert!(v.validate_collection(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_non_multi_collection() {
        let v = strings(CollectionFormat::Pipes, None, None);
        assert_eq!(v.validate_collection(&["a|b"]).unwrap().len(), 2);

        let empty: [&str; 0] = [];
        assert_eq!(v.validate_collection(&empty).unwrap_err(), ValidationError::MissingValue);
        assert_eq!(
            v.validate_collection(&["a", "b"]).unwrap_err().kind(),
            ErrorKind::MalformedContainer
        );
    }

    #[test]
    fn test_inverted_item_bounds() {
        let member = ValidatorFactory::new().string(StringConstraints::default()).unwrap();
        let err = ArrayValidator::new(member, CollectionFormat::Csv, Some(3), Some(1)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConstraint(_)));
    }
}
