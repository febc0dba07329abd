//! Object validation
//!
//! An object parameter is decoded into a key/value mapping, then every
//! declared property is validated in declaration order. Like arrays, objects
//! fail fast on the first property failure.

use crate::config::ExtraProperties;
use crate::constraints::PropertyDescriptor;
use crate::deserializer::CollectionFormat;
use crate::errors::{ConfigError, ValidationError, ValidationResult};
use crate::types::ParamValue;
use std::collections::HashSet;

/// Validates a key/value mapping encoded in one raw value
#[derive(Debug, Clone)]
pub struct ObjectValidator {
    properties: Vec<PropertyDescriptor>,
    format: CollectionFormat,
    extra: ExtraProperties,
}

impl ObjectValidator {
    pub(crate) fn new(
        properties: Vec<PropertyDescriptor>,
        format: CollectionFormat,
        extra: ExtraProperties,
    ) -> Result<Self, ConfigError> {
        if !format.supports_objects() {
            return Err(ConfigError::UnsupportedFormat {
                format,
                target: "objects",
            });
        }

        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.name.as_str()) {
                return Err(ConfigError::InvalidConstraint(format!(
                    "property '{}' is declared more than once",
                    property.name
                )));
            }
        }

        Ok(Self {
            properties,
            format,
            extra,
        })
    }

    /// Declared properties in declaration order
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    pub fn collection_format(&self) -> CollectionFormat {
        self.format
    }

    pub fn extra(&self) -> ExtraProperties {
        self.extra
    }

    /// Decode one raw value and validate its properties
    pub fn validate(&self, raw: &str) -> ValidationResult<Vec<(String, ParamValue)>> {
        let mut decoded = self.format.deserializer().decode_object(raw)?;
        let mut result = Vec::with_capacity(decoded.len());

        for property in &self.properties {
            match decoded.remove(&property.name) {
                Some(value) => {
                    let validated = property.validator.check(&value)?;
                    result.push((property.name.clone(), validated));
                }
                None if property.required => {
                    return Err(ValidationError::MissingProperty {
                        name: property.name.clone(),
                    });
                }
                None => {}
            }
        }

        // Only undeclared keys remain
        match self.extra {
            ExtraProperties::Ignore => {}
            ExtraProperties::Allow => {
                result.extend(decoded.into_iter().map(|(k, v)| (k, ParamValue::String(v))));
            }
            ExtraProperties::Forbid => {
                if let Some(name) = decoded.into_keys().next() {
                    return Err(ValidationError::UnexpectedProperty { name });
                }
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{NumericConstraints, StringConstraints};
    use crate::errors::ErrorKind;
    use crate::factory::ValidatorFactory;

    fn user(format: CollectionFormat, extra: ExtraProperties) -> ObjectValidator {
        let factory = ValidatorFactory::new();
        ObjectValidator::new(
            vec![
                PropertyDescriptor::new("role", factory.enumeration(["admin", "user"]).unwrap()),
                PropertyDescriptor::new(
                    "age",
                    factory
                        .integer(NumericConstraints::default().minimum(0))
                        .unwrap(),
                )
                .optional(),
            ],
            format,
            extra,
        )
        .unwrap()
    }

    #[test]
    fn test_declared_order() {
        let v = user(CollectionFormat::Csv, ExtraProperties::Ignore);
        let pairs = v.validate("age,30,role,admin").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("role".to_string(), ParamValue::from("admin")),
                ("age".to_string(), ParamValue::Integer(30)),
            ]
        );
    }

    #[test]
    fn test_optional_property_absent() {
        let v = user(CollectionFormat::Form, ExtraProperties::Ignore);
        let pairs = v.validate("role=user").unwrap();
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_missing_required() {
        let v = user(CollectionFormat::Csv, ExtraProperties::Ignore);
        assert_eq!(
            v.validate("age,30").unwrap_err(),
            ValidationError::MissingProperty {
                name: "role".to_string()
            }
        );
    }

    #[test]
    fn test_property_failure_propagates() {
        let v = user(CollectionFormat::Csv, ExtraProperties::Ignore);
        assert_eq!(v.validate("role,root").unwrap_err().kind(), ErrorKind::NotInEnum);
        assert_eq!(v.validate("role,user,age,-1").unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_extra_properties() {
        let ignore = user(CollectionFormat::Csv, ExtraProperties::Ignore);
        assert_eq!(ignore.validate("role,user,team,core").unwrap().len(), 1);

        let allow = user(CollectionFormat::Csv, ExtraProperties::Allow);
        let pairs = allow.validate("role,user,team,core").unwrap();
        assert_eq!(pairs[1], ("team".to_string(), ParamValue::from("core")));

        let forbid = user(CollectionFormat::Csv, ExtraProperties::Forbid);
        assert_eq!(
            forbid.validate("role,user,team,core").unwrap_err(),
            ValidationError::UnexpectedProperty {
                name: "team".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_input() {
        let v = user(CollectionFormat::Csv, ExtraProperties::Ignore);
        assert_eq!(v.validate("role").unwrap_err().kind(), ErrorKind::MalformedContainer);
    }

    #[test]
    fn test_rejects_multi_format() {
        let err = ObjectValidator::new(Vec::new(), CollectionFormat::Multi, ExtraProperties::Ignore)
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_rejects_duplicate_properties() {
        let factory = ValidatorFactory::new();
        let name = factory.string(StringConstraints::default()).unwrap();
        let err = ObjectValidator::new(
            vec![
                PropertyDescriptor::new("name", name.clone()),
                PropertyDescriptor::new("name", name),
            ],
            CollectionFormat::Csv,
            ExtraProperties::Ignore,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConstraint(_)));
    }
}
