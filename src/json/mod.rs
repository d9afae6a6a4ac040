//! Thin JSON serialization wrapper.
//!
//! Wraps serde_json behind typed errors so callers (and the stock key
//! codec) deal in one pair of failure types instead of raw serde errors.
//!
//! # Example
//!
//! ```
//! let n: i64 = fieldpath::json::from_str("42").unwrap();
//! assert_eq!(n, 42);
//! assert_eq!(fieldpath::json::to_string(&n).unwrap(), "42");
//! ```

use std::error::Error;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A failed serialization.
#[derive(Debug)]
pub struct SerializeError {
    cause: serde_json::Error,
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not serialize value to JSON")
    }
}

impl Error for SerializeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

/// A failed deserialization.
#[derive(Debug)]
pub struct DeserializeError {
    cause: serde_json::Error,
}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not deserialize JSON")
    }
}

impl Error for DeserializeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

/// Serializes a value to a JSON string.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, SerializeError> {
    serde_json::to_string(value).map_err(|cause| SerializeError { cause })
}

/// Deserializes a value from a JSON string.
pub fn from_str<T: DeserializeOwned>(text: &str) -> Result<T, DeserializeError> {
    serde_json::from_str(text).map_err(|cause| DeserializeError { cause })
}
