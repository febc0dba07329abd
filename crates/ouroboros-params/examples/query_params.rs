//! Query Parameter Validation Example
//!
//! This example validates the query string of a hypothetical
//! `GET /products?category=books&price_max=25.5&ids=3,5,8&sort=asc&tag=a&tag=b`
//! endpoint.
//!
//! Run with:
//! ```bash
//! RUST_LOG=ouroboros_params=trace cargo run -p ouroboros-params --example query_params
//! ```

use ouroboros_params::{
    ArrayConstraints, CollectionFormat, ConfigError, NumericConstraints, ParamLocation,
    ParamValidator, StringConstraints, ValidatorFactory,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), ConfigError> {
    init_logging();

    println!("Query Parameter Validation Example");
    println!("==================================\n");

    let factory = ValidatorFactory::new();
    let params = build_validators(&factory)?;

    let request: Vec<(&str, Vec<&str>)> = vec![
        ("category", vec!["books"]),
        ("price_max", vec!["25.5"]),
        ("ids", vec!["3,5,8"]),
        ("sort", vec!["asc"]),
        ("tag", vec!["a", "b"]),
    ];
    validate_request(&params, &request);

    let bad_request: Vec<(&str, Vec<&str>)> = vec![
        ("category", vec!["Books!"]),
        ("price_max", vec!["-1"]),
        ("ids", vec!["3,x,8"]),
        ("sort", vec!["ASC"]),
        ("tag", vec!["a", "b", "c", "d"]),
    ];
    validate_request(&params, &bad_request);

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .ok();
}

fn build_validators(factory: &ValidatorFactory) -> Result<Vec<(&'static str, ParamValidator)>, ConfigError> {
    Ok(vec![
        (
            "category",
            factory.string(StringConstraints::pattern("[a-z-]+").length(Some(1), Some(32)))?,
        ),
        (
            "price_max",
            factory.double(NumericConstraints::default().minimum(0.0).multiple_of(0.5))?,
        ),
        (
            "ids",
            factory.array(factory.long(NumericConstraints::default().minimum(1))?),
        ),
        ("sort", factory.enumeration(["asc", "desc"])?),
        (
            "tag",
            factory.array_with(
                factory.string(StringConstraints::default())?,
                ArrayConstraints::new(CollectionFormat::Multi, Some(3), None),
            )?,
        ),
    ])
}

fn validate_request(params: &[(&str, ParamValidator)], request: &[(&str, Vec<&str>)]) {
    println!("Request:");
    for (name, validator) in params {
        let values = request
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or_default();

        match validator.validate_param_collection(ParamLocation::Query, name, values) {
            Ok(value) => println!("  ✓ {} = {:?}", name, value),
            Err(err) => println!("  ✗ {} [{}]", err, err.kind()),
        }
    }
    println!();
}
