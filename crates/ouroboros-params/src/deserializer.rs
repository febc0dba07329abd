//! Container deserialization
//!
//! Turns one encoded parameter string into an ordered list of tokens (array)
//! or a key/value mapping (object). The encoding convention is selected by a
//! [`CollectionFormat`]; each format is served by a [`ContainerDeserializer`].
//!
//! All deserializers make a single linear pass over the input.

use crate::errors::{ConfigError, ValidationError, ValidationResult};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Collection Format
// ============================================================================

/// Convention used to pack a collection into a single parameter string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CollectionFormat {
    /// Comma separated: `a,b,c`
    #[default]
    Csv,
    /// Space separated: `a b c`
    Ssv,
    /// Tab separated
    Tsv,
    /// Pipe separated: `a|b|c`
    Pipes,
    /// One item per raw value (repeated query key: `?id=1&id=2`)
    Multi,
    /// Comma separated arrays, `key=value&key=value` objects
    Form,
}

impl CollectionFormat {
    /// Name as declared in a parameter schema
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Ssv => "ssv",
            Self::Tsv => "tsv",
            Self::Pipes => "pipes",
            Self::Multi => "multi",
            Self::Form => "form",
        }
    }

    /// Deserializer implementing this format
    pub fn deserializer(&self) -> &'static dyn ContainerDeserializer {
        match self {
            Self::Csv => &CSV,
            Self::Ssv => &SSV,
            Self::Tsv => &TSV,
            Self::Pipes => &PIPES,
            Self::Multi => &MultiDeserializer,
            Self::Form => &FormDeserializer,
        }
    }

    /// Whether objects can be encoded in this format
    pub fn supports_objects(&self) -> bool {
        !matches!(self, Self::Multi)
    }
}

impl fmt::Display for CollectionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionFormat {
    type Err = ConfigError;

    /// Accepts the Swagger 2 names plus the OpenAPI 3 style aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" | "simple" => Ok(Self::Csv),
            "ssv" | "spaceDelimited" => Ok(Self::Ssv),
            "tsv" => Ok(Self::Tsv),
            "pipes" | "pipeDelimited" => Ok(Self::Pipes),
            "multi" => Ok(Self::Multi),
            "form" => Ok(Self::Form),
            other => Err(ConfigError::UnknownCollectionFormat(other.to_string())),
        }
    }
}

// ============================================================================
// Deserializer Trait
// ============================================================================

/// Decodes a single encoded string into a container
pub trait ContainerDeserializer: Send + Sync {
    /// Decode into an ordered list of tokens
    fn decode_array(&self, raw: &str) -> ValidationResult<Vec<String>>;

    /// Decode into a key/value mapping
    ///
    /// A key that appears more than once keeps its last value.
    fn decode_object(&self, raw: &str) -> ValidationResult<BTreeMap<String, String>>;
}

// ============================================================================
// Delimited Formats (csv, ssv, tsv, pipes)
// ============================================================================

static CSV: DelimitedDeserializer = DelimitedDeserializer::new(CollectionFormat::Csv, ',');
static SSV: DelimitedDeserializer = DelimitedDeserializer::new(CollectionFormat::Ssv, ' ');
static TSV: DelimitedDeserializer = DelimitedDeserializer::new(CollectionFormat::Tsv, '\t');
static PIPES: DelimitedDeserializer = DelimitedDeserializer::new(CollectionFormat::Pipes, '|');

/// Splits on a single delimiter character
///
/// Objects are encoded as alternating key and value tokens: `k1,v1,k2,v2`.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedDeserializer {
    format: CollectionFormat,
    delimiter: char,
}

impl DelimitedDeserializer {
    pub const fn new(format: CollectionFormat, delimiter: char) -> Self {
        Self { format, delimiter }
    }
}

impl ContainerDeserializer for DelimitedDeserializer {
    fn decode_array(&self, raw: &str) -> ValidationResult<Vec<String>> {
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        Ok(raw.split(self.delimiter).map(str::to_string).collect())
    }

    fn decode_object(&self, raw: &str) -> ValidationResult<BTreeMap<String, String>> {
        let mut map = BTreeMap::new();
        if raw.is_empty() {
            return Ok(map);
        }

        let tokens: Vec<&str> = raw.split(self.delimiter).collect();
        if tokens.len() % 2 != 0 {
            return Err(ValidationError::malformed(
                self.format,
                format!("odd number of key/value tokens ({})", tokens.len()),
            ));
        }

        for pair in tokens.chunks_exact(2) {
            let (key, value) = (pair[0], pair[1]);
            if key.is_empty() {
                return Err(ValidationError::malformed(self.format, "empty property name"));
            }
            map.insert(key.to_string(), value.to_string());
        }
        Ok(map)
    }
}

// ============================================================================
// Form Format
// ============================================================================

/// Comma separated arrays; `key=value` objects joined by `&`
#[derive(Debug, Clone, Copy, Default)]
pub struct FormDeserializer;

impl ContainerDeserializer for FormDeserializer {
    fn decode_array(&self, raw: &str) -> ValidationResult<Vec<String>> {
        CSV.decode_array(raw)
    }

    fn decode_object(&self, raw: &str) -> ValidationResult<BTreeMap<String, String>> {
        let mut map = BTreeMap::new();
        if raw.is_empty() {
            return Ok(map);
        }

        for entry in raw.split('&') {
            let (key, value) = entry.split_once('=').ok_or_else(|| {
                ValidationError::malformed(
                    CollectionFormat::Form,
                    format!("entry '{}' is not a key=value pair", entry),
                )
            })?;
            if key.is_empty() {
                return Err(ValidationError::malformed(
                    CollectionFormat::Form,
                    "empty property name",
                ));
            }
            map.insert(key.to_string(), value.to_string());
        }
        Ok(map)
    }
}

// ============================================================================
// Multi Format
// ============================================================================

/// Items arrive pre-split, one per raw value
///
/// A single raw value is therefore a single item. Objects cannot be encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiDeserializer;

impl ContainerDeserializer for MultiDeserializer {
    fn decode_array(&self, raw: &str) -> ValidationResult<Vec<String>> {
        Ok(vec![raw.to_string()])
    }

    fn decode_object(&self, _raw: &str) -> ValidationResult<BTreeMap<String, String>> {
        Err(ValidationError::malformed(
            CollectionFormat::Multi,
            "objects cannot be encoded as repeated values",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_csv_array() {
        let items = CollectionFormat::Csv.deserializer().decode_array("a,b,c").unwrap();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            CollectionFormat::Ssv.deserializer().decode_array("a b").unwrap(),
            vec!["a", "b"]
        );
        assert_eq!(
            CollectionFormat::Tsv.deserializer().decode_array("a\tb").unwrap(),
            vec!["a", "b"]
        );
        assert_eq!(
            CollectionFormat::Pipes.deserializer().decode_array("a|b,c").unwrap(),
            vec!["a", "b,c"]
        );
    }

    #[test]
    fn test_empty_input_is_empty_array() {
        let items = CollectionFormat::Csv.deserializer().decode_array("").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_empty_tokens_are_kept() {
        let items = CollectionFormat::Csv.deserializer().decode_array("a,,b,").unwrap();
        assert_eq!(items, vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_csv_object() {
        let map = CollectionFormat::Csv
            .deserializer()
            .decode_object("role,admin,firstName,Alex")
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["role"], "admin");
        assert_eq!(map["firstName"], "Alex");
    }

    #[test]
    fn test_object_odd_tokens() {
        let err = CollectionFormat::Csv
            .deserializer()
            .decode_object("role,admin,firstName")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedContainer);
    }

    #[test]
    fn test_object_duplicate_key_keeps_last() {
        let map = CollectionFormat::Pipes
            .deserializer()
            .decode_object("a|1|a|2")
            .unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], "2");
    }

    #[test]
    fn test_object_empty_key() {
        let err = CollectionFormat::Csv.deserializer().decode_object(",1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedContainer);
    }

    #[test]
    fn test_form_object() {
        let map = CollectionFormat::Form
            .deserializer()
            .decode_object("role=admin&expr=a=b")
            .unwrap();
        assert_eq!(map["role"], "admin");
        assert_eq!(map["expr"], "a=b");
    }

    #[test]
    fn test_form_object_missing_equals() {
        let err = CollectionFormat::Form
            .deserializer()
            .decode_object("role=admin&broken")
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MalformedContainer { format: CollectionFormat::Form, .. }
        ));
    }

    #[test]
    fn test_form_array_is_comma_separated() {
        let items = CollectionFormat::Form.deserializer().decode_array("1,2").unwrap();
        assert_eq!(items, vec!["1", "2"]);
    }

    #[test]
    fn test_multi() {
        let d = CollectionFormat::Multi.deserializer();
        assert_eq!(d.decode_array("a,b").unwrap(), vec!["a,b"]);
        assert!(d.decode_object("a,b").is_err());
        assert!(!CollectionFormat::Multi.supports_objects());
    }

    #[test]
    fn test_parse_format_names() {
        assert_eq!("csv".parse::<CollectionFormat>().unwrap(), CollectionFormat::Csv);
        assert_eq!("simple".parse::<CollectionFormat>().unwrap(), CollectionFormat::Csv);
        assert_eq!(
            "spaceDelimited".parse::<CollectionFormat>().unwrap(),
            CollectionFormat::Ssv
        );
        assert_eq!(
            "pipeDelimited".parse::<CollectionFormat>().unwrap(),
            CollectionFormat::Pipes
        );
        assert_eq!("multi".parse::<CollectionFormat>().unwrap(), CollectionFormat::Multi);
        assert_eq!(
            "semicolon".parse::<CollectionFormat>(),
            Err(ConfigError::UnknownCollectionFormat("semicolon".to_string()))
        );
    }
}
