//! Error types
//!
//! Each failure class has its own type so callers can match on exactly what went wrong.
//! [`Error`] unifies them for the client entry points.

use std::io;
use std::num::{ParseFloatError, ParseIntError};

use crate::reader::SyntaxError;

/// Result type for remixml operations
pub type Result<T> = std::result::Result<T, Error>;

/// A response body could not be turned into an element tree.
///
/// Never recovered: the whole response construction is aborted.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The markup is not well-formed
    #[error("malformed XML document")]
    Syntax(#[source] SyntaxError),

    /// The body stream could not be read
    #[error("failed to read response body")]
    Io(#[source] io::Error),

    /// The body is not valid UTF-8 / UTF-16
    #[error("undecodable response body: {0}")]
    Encoding(String),
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        ParseError::Syntax(err)
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        ParseError::Io(err)
    }
}

/// Attempted to remove an element that is not a child of the target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("child element <{name}> not found")]
pub struct NotFoundError {
    /// Name of the element that was looked for
    pub name: String,
}

/// A required value was missing or not of the expected numeric type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("required value `{key}` is missing")]
    Missing { key: String },

    #[error("value `{key}`={value:?} is not an integer")]
    Integer {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("value `{key}`={value:?} is not a number")]
    Float {
        key: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

impl FormatError {
    pub fn missing(key: impl Into<String>) -> Self {
        FormatError::Missing { key: key.into() }
    }

    /// The key the failing value was read from
    pub fn key(&self) -> &str {
        match self {
            FormatError::Missing { key }
            | FormatError::Integer { key, .. }
            | FormatError::Float { key, .. } => key,
        }
    }
}

/// Unified error type for client operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Format(#[from] FormatError),

    /// The transport collaborator failed before a response was received
    #[error("transport error: {0}")]
    Transport(#[from] crate::client::TransportError),

    /// A request URL could not be assembled
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_error_keeps_cause() {
        let err = ParseError::from(SyntaxError::new("Unclosed tag: <a>", 7));
        let source = err.source().expect("syntax cause");
        assert_eq!(source.to_string(), "Unclosed tag: <a> at byte 7");
    }

    #[test]
    fn test_format_error_key() {
        let err = FormatError::missing("total");
        assert_eq!(err.key(), "total");
        assert_eq!(err.to_string(), "required value `total` is missing");

        let source = "x".parse::<i32>().unwrap_err();
        let err = FormatError::Integer {
            key: "from".into(),
            value: "x".into(),
            source,
        };
        assert_eq!(err.key(), "from");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_conversions() {
        let err: Error = NotFoundError { name: "b".into() }.into();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.to_string(), "child element <b> not found");
    }
}
