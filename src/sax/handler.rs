//! Content handler trait
//!
//! Receives the element-level events of a document in order. Implementations
//! see only well-formed input: the driver validates structure before
//! dispatching, so every `end_element` matches the innermost open
//! `start_element`.

use crate::core::attributes::Attribute;

/// Push-based consumer of parse events
pub trait ContentHandler {
    /// Called when an element opens (self-closing elements get an immediate `end_element`)
    fn start_element(&mut self, name: &str, attributes: &[Attribute<'_>]);

    /// Called for character data inside an element
    ///
    /// Text can arrive in several fragments (around comments, entity-free
    /// runs, CDATA sections); handlers must concatenate them.
    fn characters(&mut self, text: &str);

    /// Called when an element closes
    fn end_element(&mut self, name: &str);
}
