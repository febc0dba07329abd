//! Serialization tests (requires the `serde` feature)

use ouroboros_params::*;
use serde_json::json;

#[test]
fn test_parameter_error_shape() {
    let v = ValidatorFactory::new()
        .integer(NumericConstraints::default().maximum(10))
        .unwrap();
    let err = v.validate_param(ParamLocation::Query, "limit", "11").unwrap_err();

    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(
        value,
        json!({
            "loc": ["query", "limit"],
            "msg": "value 11 violates maximum 10",
            "type": "out_of_range",
        })
    );
}

#[test]
fn test_constraints_from_schema_json() {
    let constraints: NumericConstraints<i64> = serde_json::from_value(json!({
        "maximum": 100,
        "exclusive_maximum": true,
    }))
    .unwrap();
    assert_eq!(constraints.maximum, Some(100));
    assert!(constraints.exclusive_maximum);
    assert!(constraints.minimum.is_none());

    let array: ArrayConstraints = serde_json::from_value(json!({
        "collection_format": "pipes",
        "min_items": 1,
    }))
    .unwrap();
    assert_eq!(array.collection_format, Some(CollectionFormat::Pipes));
    assert_eq!(array.min_items, Some(1));
    assert!(array.max_items.is_none());
}

#[test]
fn test_config_from_json() {
    let config: ValidationConfig = serde_json::from_value(json!({
        "default_collection_format": "ssv",
        "extra_properties": "forbid",
    }))
    .unwrap();
    assert_eq!(config.default_collection_format, CollectionFormat::Ssv);
    assert_eq!(config.extra_properties, ExtraProperties::Forbid);
    assert!(config.full_match_patterns);
}

#[test]
fn test_param_value_serializes_as_plain_json() {
    let factory = ValidatorFactory::new();
    let v = factory.array(factory.double(NumericConstraints::default()).unwrap());
    let value = v.validate("1.5,2").unwrap();
    assert_eq!(serde_json::to_value(&value).unwrap(), json!([1.5, 2.0]));
}

#[test]
fn test_object_value_serializes_as_map() {
    let factory = ValidatorFactory::new();
    let v = factory
        .object(
            vec![
                PropertyDescriptor::new(
                    "role",
                    factory.enumeration(["admin", "user"]).unwrap(),
                ),
                PropertyDescriptor::new("age", factory.long(NumericConstraints::default()).unwrap()),
            ],
            ObjectConstraints::default(),
        )
        .unwrap();
    let value = v.validate("age,30,role,admin").unwrap();

    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"role":"admin","age":30}"#
    );
    assert_eq!(
        serde_json::to_value(ParamValue::Object(vec![("role".into(), "admin".into())])).unwrap(),
        json!({"role": "admin"})
    );
}

#[test]
fn test_error_kind_serialization() {
    assert_eq!(
        serde_json::to_value(ErrorKind::TooManyItems).unwrap(),
        json!("too_many_items")
    );
}
