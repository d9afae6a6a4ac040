//! Key-decoding capability for maps with non-textual keys.
//!
//! When a map-key path segment targets a map whose keys are integers or
//! enumerated constants, the textual key literal has to be decoded into a
//! typed [`Key`] before lookup. The resolver consumes the capability
//! through the [`KeyCodec`] trait; [`JsonKeyCodec`] is the stock
//! implementation, decoding literals as JSON.

use std::error::Error;
use std::fmt;

use crate::json;
use crate::value::{Key, KeyKind, Symbol};

/// A failed key decode.
#[derive(Debug)]
pub struct DecodeError {
    message: String,
    cause: Option<Box<dyn Error + Send + Sync>>,
}

impl DecodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn Error + 'static))
    }
}

/// Decodes a textual key literal into a typed key of the given kind.
pub trait KeyCodec {
    fn decode(&self, text: &str, target: &KeyKind) -> Result<Key, DecodeError>;
}

/// Decodes key literals as JSON: integer keys from a bare number, textual
/// and symbol keys from a JSON string.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonKeyCodec;

impl KeyCodec for JsonKeyCodec {
    fn decode(&self, text: &str, target: &KeyKind) -> Result<Key, DecodeError> {
        match target {
            KeyKind::Text => {
                let decoded: String = json::from_str(text).map_err(|err| {
                    DecodeError::with_cause(format!("'{text}' is not a JSON string"), err)
                })?;
                Ok(Key::Text(decoded))
            }
            KeyKind::Int => {
                let decoded: i64 = json::from_str(text).map_err(|err| {
                    DecodeError::with_cause(format!("'{text}' is not a JSON integer"), err)
                })?;
                Ok(Key::Int(decoded))
            }
            KeyKind::Symbol(type_name) => {
                let decoded: String = json::from_str(text).map_err(|err| {
                    DecodeError::with_cause(format!("'{text}' is not a JSON string"), err)
                })?;
                Ok(Key::Symbol(Symbol::new(type_name.clone(), decoded)))
            }
        }
    }
}
