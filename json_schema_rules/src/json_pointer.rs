//! JSON Pointer (RFC 6901) paths into a schema document.
//!
//! Used to point at the offending value when a keyword has the wrong shape.
//! Segments are `/`-separated, with `~` escaped as `~0` and `/` escaped as `~1`.

use std::fmt;

/// A JSON Pointer built up one segment at a time.
///
/// The empty pointer refers to the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPointer {
    encoded: String,
}

impl JsonPointer {
    /// The pointer to the document root (`""`).
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new pointer with `key` appended as an object member segment.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        let mut encoded: String = self.encoded.clone();
        encoded.push('/');
        for c in key.chars() {
            match c {
                '~' => encoded.push_str("~0"),
                '/' => encoded.push_str("~1"),
                other => encoded.push(other),
            }
        }
        Self { encoded }
    }

    /// Returns a new pointer with an array index segment appended.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self {
            encoded: format!("{}/{index}", self.encoded),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl From<JsonPointer> for String {
    fn from(pointer: JsonPointer) -> Self {
        pointer.encoded
    }
}
