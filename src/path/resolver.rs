//! The left-to-right path walk.

use super::error::PathError;
use super::segment;
use crate::access::{AccessError, FieldAccessor, RecordAccessor};
use crate::codec::{JsonKeyCodec, KeyCodec};
use crate::value::{Key, KeyKind, Value};

/// One entry of a path, possibly absent.
///
/// Plain `&str`/`String` paths cannot contain absent entries; paths built
/// from optional strings can, and an absent entry fails the whole
/// resolution before any segment is resolved.
pub trait PathEntry {
    fn text(&self) -> Option<&str>;
}

impl PathEntry for &str {
    fn text(&self) -> Option<&str> {
        Some(*self)
    }
}

impl PathEntry for String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl PathEntry for Option<&str> {
    fn text(&self) -> Option<&str> {
        *self
    }
}

impl PathEntry for Option<String> {
    fn text(&self) -> Option<&str> {
        self.as_deref()
    }
}

/// Resolves paths against object graphs.
///
/// A resolver is configured with a [`FieldAccessor`] for member-access
/// segments (defaulting to the record-walking accessor) and optionally a
/// [`KeyCodec`] for maps whose keys are not textual. Resolution is a pure
/// read: it holds no state between calls and never mutates the graph.
pub struct Resolver<'c> {
    accessor: &'c dyn FieldAccessor,
    key_codec: Option<&'c dyn KeyCodec>,
}

impl Resolver<'static> {
    /// Creates a resolver with the default record accessor and no key codec.
    pub fn new() -> Self {
        Self {
            accessor: &RecordAccessor,
            key_codec: None,
        }
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> Resolver<'c> {
    /// Sets the codec used to decode non-textual map keys.
    pub fn key_codec(self, codec: &'c dyn KeyCodec) -> Self {
        Self {
            key_codec: Some(codec),
            ..self
        }
    }

    /// Sets the accessor used for member-access segments.
    pub fn accessor(self, accessor: &'c dyn FieldAccessor) -> Self {
        Self { accessor, ..self }
    }

    /// Walks `path` from `root` and returns the value at the end of it.
    ///
    /// An empty path resolves to null without touching the graph. The
    /// terminator segment `"."` stops the walk early and returns the value
    /// reached so far; a null value reached mid-walk short-circuits the
    /// rest of the path to a null result. Any segment that cannot be
    /// resolved fails the whole call with a [`PathError`] naming it.
    pub fn resolve<'a, E: PathEntry>(
        &self,
        root: &'a Value,
        path: &[E],
    ) -> Result<&'a Value, PathError> {
        if path.is_empty() {
            return Ok(Value::null());
        }

        let mut entries = Vec::with_capacity(path.len());
        for entry in path {
            match entry.text() {
                Some(text) => entries.push(text),
                None => return Err(PathError::new("null entry in path is not supported")),
            }
        }

        let mut current = root;
        for entry in entries {
            if entry == segment::TERMINATOR {
                // NOTE: a dot before the end skips any remaining entries
                break;
            }
            if current.is_null() {
                break;
            }
            current = if let Some(key_text) = segment::map_key(entry) {
                self.resolve_map_key(current, entry, key_text)?
            } else if let Some(index_text) = segment::index_text(entry) {
                self.resolve_index(current, entry, index_text)?
            } else {
                self.resolve_member(current, entry)?
            };
        }
        Ok(current)
    }

    fn resolve_map_key<'a>(
        &self,
        current: &'a Value,
        entry: &str,
        key_text: &str,
    ) -> Result<&'a Value, PathError> {
        let Value::Map(map) = current else {
            return Err(PathError::new(format!(
                "path entry '{entry}' refers to a map key but prior value is not a map"
            )));
        };
        let Some(first_key) = map.keys().next() else {
            return Err(PathError::new(format!(
                "path entry '{entry}' refers to a key in an empty map"
            )));
        };

        let key = match first_key.kind() {
            KeyKind::Text => Key::Text(key_text.to_string()),
            kind => {
                let Some(codec) = self.key_codec else {
                    return Err(PathError::new(format!(
                        "path entry '{entry}' could not be decoded: no key codec"
                    )));
                };
                // Symbol constants are conventionally encoded as strings, so
                // the literal is quoted before handing it to the codec.
                let literal = if matches!(kind, KeyKind::Symbol(_)) {
                    format!("\"{key_text}\"")
                } else {
                    key_text.to_string()
                };
                codec.decode(&literal, &kind).map_err(|err| {
                    PathError::with_cause(
                        format!("path entry '{entry}' could not be decoded"),
                        err,
                    )
                })?
            }
        };

        // Presence governs success: a present key mapped to null resolves
        // to null rather than failing.
        match map.get(&key) {
            Some(found) => Ok(found),
            None => Err(PathError::new(format!(
                "path entry '{entry}' does not exist"
            ))),
        }
    }

    fn resolve_index<'a>(
        &self,
        current: &'a Value,
        entry: &str,
        index_text: &str,
    ) -> Result<&'a Value, PathError> {
        let Value::Seq(items) = current else {
            return Err(PathError::new(format!(
                "path entry '{entry}' refers to a collection index but prior value is not a collection"
            )));
        };
        let index: usize = index_text.parse().map_err(|err| {
            PathError::with_cause(
                format!("path entry '{entry}' refers to a collection index but is improperly formed"),
                err,
            )
        })?;
        items.get(index).ok_or_else(|| {
            PathError::new(format!(
                "path entry '{entry}' refers to a collection index beyond the collection size"
            ))
        })
    }

    fn resolve_member<'a>(&self, current: &'a Value, name: &str) -> Result<&'a Value, PathError> {
        self.accessor.read(current, name).map_err(|err| {
            let message = match err {
                AccessError::NotFound => format!("field '{name}' does not exist"),
                AccessError::NotAccessible => format!("field '{name}' is not accessible"),
            };
            PathError::with_cause(message, err)
        })
    }
}

/// Resolves `path` against `root` with the default configuration: the
/// record-walking accessor and the JSON key codec.
pub fn resolve<'a, E: PathEntry>(root: &'a Value, path: &[E]) -> Result<&'a Value, PathError> {
    Resolver::new().key_codec(&JsonKeyCodec).resolve(root, path)
}
