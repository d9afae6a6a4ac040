//! Path resolution over modeled object graphs.
//!
//! A path is an ordered list of string segments walked strictly left to
//! right, where each segment names one step through the graph:
//!
//! ```text
//!      [mapKey] : use "mapKey" as a key into a map
//!      {digits} : use a non-negative integer as an index into a sequence
//!             . : stop and return the value reached so far
//! anything-else : use as a field name on the current value
//! ```
//!
//! Resolution either fully succeeds with a (possibly null) value or fails
//! atomically with a [`PathError`] naming the first segment that could not
//! be resolved.
//!
//! # Example
//!
//! ```
//! use fieldpath::value::{Record, Value};
//!
//! let root = Value::Record(
//!     Record::new("Config").with_field(
//!         "hosts",
//!         Value::Seq(vec![Value::from("alpha"), Value::from("beta")]),
//!     ),
//! );
//! let found = fieldpath::resolve(&root, &["hosts", "{1}"]).unwrap();
//! assert_eq!(found.as_text(), Some("beta"));
//! ```

pub mod error;
pub mod resolver;
pub mod segment;

pub use error::PathError;
pub use resolver::{resolve, PathEntry, Resolver};
