//! Decoded string constants.

use std::{borrow::Cow, fmt};

/// A string constant as stored in a chunk.
///
/// Chunks distinguish an absent string ([`LString::Null`], e.g. a missing source name) from an
/// empty one. Content is kept as raw bytes: compiled chunks carry no encoding information and
/// string constants routinely hold binary data.
///
/// `trailing` holds the terminator byte consumed by the legacy format. It is preserved for
/// inspection only; the legacy writer always emits a zero terminator.
///
/// # Examples
///
/// ```rust
/// use luascope::LString;
///
/// let value = LString::from("print");
/// assert_eq!(value.content(), Some(&b"print"[..]));
/// assert_eq!(value.trailing(), None);
///
/// assert!(LString::Null.is_null());
/// assert_ne!(LString::Null, LString::from(""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum LString {
    /// The absence of a string
    #[default]
    Null,
    /// A string with known content
    Present {
        /// The logical string payload
        content: Vec<u8>,
        /// Terminator byte consumed by the legacy format, `None` otherwise
        trailing: Option<u8>,
    },
}

impl LString {
    /// Create a present string without trailing metadata.
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        LString::Present {
            content: content.into(),
            trailing: None,
        }
    }

    /// Create a present string carrying the terminator byte it was stored with.
    pub fn with_trailing(content: impl Into<Vec<u8>>, trailing: u8) -> Self {
        LString::Present {
            content: content.into(),
            trailing: Some(trailing),
        }
    }

    /// Returns `true` for [`LString::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, LString::Null)
    }

    /// The content bytes, `None` for [`LString::Null`].
    #[must_use]
    pub fn content(&self) -> Option<&[u8]> {
        match self {
            LString::Null => None,
            LString::Present { content, .. } => Some(content),
        }
    }

    /// The preserved terminator byte, if any.
    #[must_use]
    pub fn trailing(&self) -> Option<u8> {
        match self {
            LString::Null => None,
            LString::Present { trailing, .. } => *trailing,
        }
    }

    /// The content decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn to_string_lossy(&self) -> Option<Cow<'_, str>> {
        self.content().map(String::from_utf8_lossy)
    }
}

impl From<&str> for LString {
    fn from(value: &str) -> Self {
        LString::new(value.as_bytes())
    }
}

impl From<String> for LString {
    fn from(value: String) -> Self {
        LString::new(value.into_bytes())
    }
}

impl From<Vec<u8>> for LString {
    fn from(value: Vec<u8>) -> Self {
        LString::new(value)
    }
}

impl From<&[u8]> for LString {
    fn from(value: &[u8]) -> Self {
        LString::new(value)
    }
}

/// Renders `null` for [`LString::Null`] and the ASCII-escaped content otherwise.
impl fmt::Display for LString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LString::Null => write!(f, "null"),
            LString::Present { content, .. } => write!(f, "\"{}\"", content.escape_ascii()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_not_empty() {
        let empty = LString::from("");

        assert!(LString::Null.is_null());
        assert!(!empty.is_null());
        assert_eq!(LString::Null.content(), None);
        assert_eq!(empty.content(), Some(&[][..]));
        assert_eq!(LString::default(), LString::Null);
    }

    #[test]
    fn trailing_is_part_of_equality() {
        assert_eq!(LString::with_trailing("abc", 0x00).trailing(), Some(0x00));
        assert_ne!(LString::with_trailing("abc", 0x00), LString::from("abc"));
        assert_eq!(LString::Null.trailing(), None);
    }

    #[test]
    fn display() {
        assert_eq!(LString::Null.to_string(), "null");
        assert_eq!(LString::from("hi").to_string(), "\"hi\"");
        assert_eq!(
            LString::from(vec![b'a', 0x00, 0xFF]).to_string(),
            "\"a\\x00\\xff\""
        );
        assert_eq!(
            LString::from(vec![0xE4, 0xB8, 0xAD]).to_string_lossy().unwrap(),
            "中"
        );
    }
}
