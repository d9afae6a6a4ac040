//! Member-access capability for the path resolver.
//!
//! A [`FieldAccessor`] answers "what is the member named `name` on this
//! value?". The built-in [`RecordAccessor`] reads record fields, searching
//! the record itself and then its chain of base records, the way a
//! reflective lookup searches a type and its ancestors. Calling code that
//! models values some other way can register per-type projections with a
//! [`RegistryAccessor`] instead.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::value::Value;

/// Why a member read failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// No member with the requested name exists on the value or any of its
    /// base records.
    NotFound,
    /// The member exists but cannot be read.
    NotAccessible,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::NotFound => write!(f, "no such field"),
            AccessError::NotAccessible => write!(f, "field is not accessible"),
        }
    }
}

impl Error for AccessError {}

/// Reads a named member from a value.
pub trait FieldAccessor {
    fn read<'a>(&self, value: &'a Value, name: &str) -> Result<&'a Value, AccessError>;
}

/// The default accessor: reads fields of [`Record`](crate::value::Record)
/// values, searching the base-record chain when the record itself does not
/// declare the field.
///
/// A field that is found but marked unreadable fails with
/// [`AccessError::NotAccessible`] without searching further; the nearest
/// declaration wins, as in a type hierarchy.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordAccessor;

impl FieldAccessor for RecordAccessor {
    fn read<'a>(&self, value: &'a Value, name: &str) -> Result<&'a Value, AccessError> {
        let Value::Record(record) = value else {
            return Err(AccessError::NotFound);
        };
        let mut current = Some(record);
        while let Some(record) = current {
            if let Some(field) = record.field(name) {
                return if field.is_readable() {
                    Ok(field.value())
                } else {
                    Err(AccessError::NotAccessible)
                };
            }
            current = record.base();
        }
        Err(AccessError::NotFound)
    }
}

type Projection = Box<dyn for<'a> Fn(&'a Value) -> Option<&'a Value> + Send + Sync>;

/// An explicit per-type member table.
///
/// Members are registered against a value type name (a record's declared
/// name, or one of the built-in kind names like `"map"`) as projection
/// functions into the value. On a registry miss the lookup falls back to
/// the record-field walk, so a registry only needs entries for members the
/// record model cannot express.
#[derive(Default)]
pub struct RegistryAccessor {
    types: HashMap<String, HashMap<String, Projection>>,
    fallback: RecordAccessor,
}

impl RegistryAccessor {
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
            fallback: RecordAccessor,
        }
    }

    /// Registers a member projection for a value type.
    pub fn register<F>(mut self, type_name: &str, member: &str, projection: F) -> Self
    where
        F: for<'a> Fn(&'a Value) -> Option<&'a Value> + Send + Sync + 'static,
    {
        self.types
            .entry(type_name.to_string())
            .or_default()
            .insert(member.to_string(), Box::new(projection));
        self
    }
}

impl FieldAccessor for RegistryAccessor {
    fn read<'a>(&self, value: &'a Value, name: &str) -> Result<&'a Value, AccessError> {
        if let Some(members) = self.types.get(value.type_name()) {
            if let Some(projection) = members.get(name) {
                return projection(value).ok_or(AccessError::NotFound);
            }
        }
        self.fallback.read(value, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;

    #[test]
    fn test_record_accessor_reads_own_field() {
        let value = Value::Record(Record::new("T").with_field("a", Value::from("x")));
        let found = RecordAccessor.read(&value, "a").unwrap();
        assert_eq!(found.as_text(), Some("x"));
    }

    #[test]
    fn test_record_accessor_searches_base_chain() {
        let value = Value::Record(
            Record::new("Derived").with_base(
                Record::new("Middle")
                    .with_base(Record::new("Base").with_field("deep", Value::from("y"))),
            ),
        );
        let found = RecordAccessor.read(&value, "deep").unwrap();
        assert_eq!(found.as_text(), Some("y"));
    }

    #[test]
    fn test_record_accessor_not_found() {
        let value = Value::Record(Record::new("T"));
        assert_eq!(RecordAccessor.read(&value, "a"), Err(AccessError::NotFound));
    }

    #[test]
    fn test_record_accessor_non_record_is_not_found() {
        assert_eq!(
            RecordAccessor.read(&Value::from("x"), "len"),
            Err(AccessError::NotFound)
        );
    }

    #[test]
    fn test_record_accessor_unreadable_field() {
        let value = Value::Record(Record::new("T").with_hidden_field("a", Value::Null));
        assert_eq!(
            RecordAccessor.read(&value, "a"),
            Err(AccessError::NotAccessible)
        );
    }

    #[test]
    fn test_unreadable_field_shadows_base_declaration() {
        let value = Value::Record(
            Record::new("Derived")
                .with_hidden_field("a", Value::Null)
                .with_base(Record::new("Base").with_field("a", Value::from("base"))),
        );
        assert_eq!(
            RecordAccessor.read(&value, "a"),
            Err(AccessError::NotAccessible)
        );
    }

    #[test]
    fn test_registry_accessor_projection() {
        let accessor = RegistryAccessor::new().register("seq", "first", |value| {
            value.as_seq().and_then(|items| items.first())
        });
        let value = Value::Seq(vec![Value::from("a"), Value::from("b")]);
        let found = accessor.read(&value, "first").unwrap();
        assert_eq!(found.as_text(), Some("a"));
    }

    #[test]
    fn test_registry_accessor_falls_back_to_records() {
        let accessor = RegistryAccessor::new();
        let value = Value::Record(Record::new("T").with_field("a", Value::from("x")));
        assert!(accessor.read(&value, "a").is_ok());
    }
}
