//! Modeled object-graph values.
//!
//! A [`Value`] is one node in an object graph: a scalar leaf, an ordered
//! sequence, a keyed map, or a [`Record`] (a struct-like value with a type
//! name, named fields, and an optional base record standing in for an
//! ancestor type). The path resolver walks these nodes; it never reflects
//! over live Rust types.
//!
//! # Example
//!
//! ```
//! use fieldpath::value::{Record, Value};
//!
//! let root = Value::Record(
//!     Record::new("Account")
//!         .with_field("name", Value::from("checking"))
//!         .with_field("balance", Value::from(100_i64)),
//! );
//! assert_eq!(root.type_name(), "Account");
//! ```

use indexmap::IndexMap;

/// A typed map key.
///
/// Maps in a graph may be keyed by text, by integers, or by enumerated
/// constants ([`Symbol`]). The resolver inspects the key type of a map to
/// decide whether a textual path literal can be used directly or must be
/// decoded through a key codec first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A textual key.
    Text(String),
    /// An integer key.
    Int(i64),
    /// An enumerated-constant key.
    Symbol(Symbol),
}

impl Key {
    /// Reports which kind of key this is.
    pub fn kind(&self) -> KeyKind {
        match self {
            Key::Text(_) => KeyKind::Text,
            Key::Int(_) => KeyKind::Int,
            Key::Symbol(symbol) => KeyKind::Symbol(symbol.type_name().to_string()),
        }
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key::Text(text.to_string())
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Key::Text(text)
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

/// The kind of a map key, used as the decode target for a key codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyKind {
    Text,
    Int,
    /// An enumerated key kind, carrying the symbol's type name.
    Symbol(String),
}

/// An enumerated constant: a type name plus a constant name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    type_name: String,
    name: String,
}

impl Symbol {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One field of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    value: Value,
    readable: bool,
}

impl Field {
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether the field can be read at all. An unreadable field still
    /// exists for lookup purposes; reading it is an access failure.
    pub fn is_readable(&self) -> bool {
        self.readable
    }
}

/// A struct-like value: a named type with ordered fields and an optional
/// base record modeling an ancestor type.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: String,
    fields: IndexMap<String, Field>,
    base: Option<Box<Record>>,
}

impl Record {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: IndexMap::new(),
            base: None,
        }
    }

    /// Adds a readable field.
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(
            name.into(),
            Field {
                value,
                readable: true,
            },
        );
        self
    }

    /// Adds a field that exists but cannot be read.
    pub fn with_hidden_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(
            name.into(),
            Field {
                value,
                readable: false,
            },
        );
        self
    }

    /// Sets the base record (the ancestor-type portion of this value).
    pub fn with_base(mut self, base: Record) -> Self {
        self.base = Some(Box::new(base));
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Looks up a field declared directly on this record, not on its base.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn base(&self) -> Option<&Record> {
        self.base.as_deref()
    }
}

static NULL: Value = Value::Null;

/// A node in an object graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// An ordered, index-addressable collection.
    Seq(Vec<Value>),
    /// A keyed map; insertion order is preserved.
    Map(IndexMap<Key, Value>),
    /// A struct-like value with named fields.
    Record(Record),
}

impl Value {
    /// A borrowed null, usable as a resolution result without allocating.
    pub fn null() -> &'static Value {
        &NULL
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The name of this value's type: a record's declared type name, or a
    /// fixed name for the built-in kinds.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Seq(_) => "seq",
            Value::Map(_) => "map",
            Value::Record(record) => record.type_name(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<Key, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}
