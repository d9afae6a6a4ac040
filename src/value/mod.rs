//! Graph value model walked by the path resolver.

pub mod node;

pub use node::{Field, Key, KeyKind, Record, Symbol, Value};
