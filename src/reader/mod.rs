//! XML readers
//!
//! - `slice`: strict zero-copy pull tokenizer over an in-memory document
//! - `buffered`: drains a `Read` source into memory ahead of tokenizing

pub mod buffered;
pub mod events;
pub mod slice;

pub use events::{EndElement, StartElement, XmlEvent};
pub use slice::SliceReader;

/// Well-formedness violation, with the byte offset where it was detected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at byte {position}")]
pub struct SyntaxError {
    pub message: String,
    pub position: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        SyntaxError {
            message: message.into(),
            position,
        }
    }
}
