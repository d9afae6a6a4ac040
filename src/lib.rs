//! fieldpath — resolve field, map-key, and collection-index paths through
//! modeled object graphs.
//!
//! A path is a list of string segments walked left to right over a
//! [`Value`] graph: bare segments name record fields, `[key]` segments look
//! up map keys, `{index}` segments index into sequences, and a bare `.`
//! stops the walk early. Resolution either succeeds with the (possibly
//! null) value at the end of the path or fails with a single [`PathError`]
//! naming the first segment that could not be resolved.
//!
//! # Example
//!
//! ```
//! use fieldpath::value::{Key, Record, Value};
//! use indexmap::IndexMap;
//!
//! let mut scores = IndexMap::new();
//! scores.insert(Key::from("alice"), Value::from(10_i64));
//!
//! let root = Value::Record(
//!     Record::new("Game").with_field("scores", Value::Map(scores)),
//! );
//! let found = fieldpath::resolve(&root, &["scores", "[alice]"]).unwrap();
//! assert_eq!(found, &Value::Int(10));
//! ```
//!
//! Member access and non-textual key decoding are pluggable capabilities:
//! see [`access::FieldAccessor`] and [`codec::KeyCodec`].

pub mod access;
pub mod codec;
pub mod json;
pub mod path;
pub mod value;

pub use access::{AccessError, FieldAccessor, RecordAccessor, RegistryAccessor};
pub use codec::{DecodeError, JsonKeyCodec, KeyCodec};
pub use path::{resolve, PathEntry, PathError, Resolver};
pub use value::{Key, KeyKind, Record, Symbol, Value};
