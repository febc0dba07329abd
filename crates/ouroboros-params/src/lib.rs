//! Ouroboros Params
//!
//! Declarative validation and coercion of string-encoded HTTP parameters
//! (query strings, path segments, headers, cookies and flat form fields).
//!
//! The routing layer extracts raw strings; the schema layer decides which
//! validator guards which parameter. This crate sits between the two: given
//! a raw string (or every raw value of a repeated key) and a validator, it
//! returns a typed [`ParamValue`] or a typed [`ValidationError`].
//!
//! # Architecture
//!
//! ```text
//! ValidatorFactory ──builds──▶ ParamValidator ──validate(raw)──▶ ParamValue
//!        │                          │
//!  ValidationConfig          Integer │ Long │ Float │ Double
//!                            String │ Enum
//!                            Array ──▶ ContainerDeserializer ──▶ member validator
//!                            Object ─▶ ContainerDeserializer ──▶ property validators
//! ```
//!
//! Validators are immutable, hold no interior state and are `Send + Sync`:
//! build them once per route and share them across requests.
//!
//! # Features
//!
//! - **Default**: core validation
//! - **serde**: `Serialize`/`Deserialize` for constraints, values and errors
//!
//! # Example
//!
//! ```rust
//! use ouroboros_params::{
//!     ArrayConstraints, CollectionFormat, ErrorKind, NumericConstraints, ParamLocation,
//!     ParamValue, ValidatorFactory,
//! };
//!
//! let factory = ValidatorFactory::new();
//!
//! // ?page=2
//! let page = factory
//!     .integer(NumericConstraints::default().minimum(1))
//!     .unwrap();
//! assert_eq!(page.validate("2").unwrap(), ParamValue::Integer(2));
//!
//! // ?tags=a|b|c, at most two tags
//! let tags = factory
//!     .array_with(
//!         factory.enumeration(["a", "b", "c"]).unwrap(),
//!         ArrayConstraints::new(CollectionFormat::Pipes, Some(2), None),
//!     )
//!     .unwrap();
//! let err = tags
//!     .validate_param(ParamLocation::Query, "tags", "a|b|c")
//!     .unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TooManyItems);
//! ```

// Public modules
pub mod array;
pub mod config;
pub mod constraints;
pub mod deserializer;
pub mod enumeration;
pub mod errors;
pub mod factory;
pub mod numeric;
pub mod object;
pub mod string;
pub mod types;
pub mod validators;

// Re-export commonly used types
pub use config::{ExtraProperties, LengthMode, ValidationConfig};
pub use constraints::{
    ArrayConstraints, NumericConstraints, ObjectConstraints, PropertyDescriptor, StringConstraints,
};
pub use deserializer::{CollectionFormat, ContainerDeserializer};
pub use errors::{
    Bound, ConfigError, ErrorKind, ParamLocation, ParameterError, ValidationError, ValidationResult,
};
pub use factory::ValidatorFactory;
pub use types::ParamValue;
pub use validators::ParamValidator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
