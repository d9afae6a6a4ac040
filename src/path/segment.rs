//! Path segment classification.
//!
//! Each segment of a path is classified by syntax alone: a bracket-wrapped
//! segment is a map key, a brace-wrapped non-negative integer is a
//! collection index, the bare `"."` is the terminator, and anything else is
//! a field name. Classification never looks at the value being walked.

/// The terminator segment: stop and return the value reached so far.
pub const TERMINATOR: &str = ".";

const MAP_KEY_OPEN: &str = "[";
const MAP_KEY_CLOSE: &str = "]";
const COLLECTION_INDEX_OPEN: &str = "{";
const COLLECTION_INDEX_CLOSE: &str = "}";

/// Returns true if `s` is wrapped in square brackets. `"[foo]"` and `"[]"`
/// are map keys; `"foo"`, `"{foo}"`, and `"[foo"` are not.
pub fn is_map_key(s: &str) -> bool {
    s.len() >= MAP_KEY_OPEN.len() + MAP_KEY_CLOSE.len()
        && s.starts_with(MAP_KEY_OPEN)
        && s.ends_with(MAP_KEY_CLOSE)
}

/// Extracts the key literal from a map-key segment, or `None` when `s` is
/// not map-key syntax. The empty string is a valid key literal.
pub fn map_key(s: &str) -> Option<&str> {
    if is_map_key(s) {
        Some(&s[MAP_KEY_OPEN.len()..s.len() - MAP_KEY_CLOSE.len()])
    } else {
        None
    }
}

/// Returns true if `s` is a non-negative base-10 integer wrapped in curly
/// braces. `"{42}"` is an index; `"42"`, `"{-1}"`, `"{foo}"`, and `"{}"`
/// are not.
pub fn is_collection_index(s: &str) -> bool {
    collection_index(s).is_some()
}

/// Extracts the index from a collection-index segment, or `None` when `s`
/// is not valid collection-index syntax.
pub fn collection_index(s: &str) -> Option<usize> {
    index_text(s).and_then(|text| text.parse().ok())
}

/// Extracts the enclosed text of a brace-wrapped segment without validating
/// it as a number.
///
/// This is the routing check used by the resolver: a brace-wrapped segment
/// is always an index *attempt*, so malformed contents (`"{-1}"`, `"{foo}"`)
/// are reported as malformed indices rather than falling through to field
/// lookup, even though [`is_collection_index`] answers false for them.
pub fn index_text(s: &str) -> Option<&str> {
    if s.len() > COLLECTION_INDEX_OPEN.len() + COLLECTION_INDEX_CLOSE.len()
        && s.starts_with(COLLECTION_INDEX_OPEN)
        && s.ends_with(COLLECTION_INDEX_CLOSE)
    {
        Some(&s[COLLECTION_INDEX_OPEN.len()..s.len() - COLLECTION_INDEX_CLOSE.len()])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_map_key() {
        for arg in ["[foo]", "[1]", "[ ]", "[]"] {
            assert!(is_map_key(arg), "{arg} should be a map key");
        }
        for arg in ["", "{}", "{foo}", "[foo", "foo"] {
            assert!(!is_map_key(arg), "{arg} should not be a map key");
        }
    }

    #[test]
    fn test_map_key_extraction() {
        assert_eq!(map_key("[foo]"), Some("foo"));
        assert_eq!(map_key("[1]"), Some("1"));
        assert_eq!(map_key("[ ]"), Some(" "));
        assert_eq!(map_key("[]"), Some(""));
        for arg in ["", "{}", "{foo}", "[foo"] {
            assert_eq!(map_key(arg), None, "{arg} should not extract");
        }
    }

    #[test]
    fn test_is_collection_index() {
        for arg in ["{1}", "{58}"] {
            assert!(is_collection_index(arg), "{arg} should be an index");
        }
        for arg in ["", "[]", "{foo}", "{1", "{}", "{0xAF2}", "{-1}", "42"] {
            assert!(!is_collection_index(arg), "{arg} should not be an index");
        }
    }

    #[test]
    fn test_collection_index_extraction() {
        assert_eq!(collection_index("{1}"), Some(1));
        assert_eq!(collection_index("{58}"), Some(58));
        for arg in ["", "[]", "{foo}", "{1", "{}", "{0xAF2}", "{-1}"] {
            assert_eq!(collection_index(arg), None, "{arg} should not extract");
        }
    }

    #[test]
    fn test_index_text_is_purely_syntactic() {
        assert_eq!(index_text("{1}"), Some("1"));
        assert_eq!(index_text("{-1}"), Some("-1"));
        assert_eq!(index_text("{foo}"), Some("foo"));
        assert_eq!(index_text("{}"), None);
        assert_eq!(index_text("[1]"), None);
    }
}
