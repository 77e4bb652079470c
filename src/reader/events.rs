//! XML Event Types
//!
//! Event types for pull-parser style XML processing.

use crate::core::attributes::Attribute;
use std::borrow::Cow;

/// XML parsing event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent<'a> {
    /// Start of an element: <name attrs...>
    StartElement(StartElement<'a>),
    /// End of an element: </name>
    EndElement(EndElement<'a>),
    /// Empty element: <name attrs.../>
    EmptyElement(StartElement<'a>),
    /// Text content between tags (entities decoded)
    Text(Cow<'a, str>),
    /// CDATA section content
    CData(&'a str),
    /// Comment content
    Comment(&'a str),
    /// Processing instruction: <?target data?>
    ProcessingInstruction {
        target: &'a str,
        data: Option<&'a str>,
    },
    /// XML declaration: <?xml version="1.0"?>
    XmlDeclaration {
        version: Option<Cow<'a, str>>,
        encoding: Option<Cow<'a, str>>,
    },
    /// DOCTYPE declaration (skipped, never expanded)
    DocType(&'a str),
}

/// Start element event data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartElement<'a> {
    /// Full element name (may include prefix)
    pub name: &'a str,
    /// Element attributes in document order
    pub attributes: Vec<Attribute<'a>>,
}

impl<'a> StartElement<'a> {
    pub fn new(name: &'a str, attributes: Vec<Attribute<'a>>) -> Self {
        StartElement { name, attributes }
    }

    /// Get an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_ref())
    }
}

/// End element event data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndElement<'a> {
    pub name: &'a str,
}

impl<'a> XmlEvent<'a> {
    /// Check if this is a start element event
    pub fn is_start_element(&self) -> bool {
        matches!(self, XmlEvent::StartElement(_) | XmlEvent::EmptyElement(_))
    }

    /// Check if this is an end element event
    pub fn is_end_element(&self) -> bool {
        matches!(self, XmlEvent::EndElement(_))
    }

    /// Get as start element if applicable
    pub fn as_start_element(&self) -> Option<&StartElement<'a>> {
        match self {
            XmlEvent::StartElement(e) | XmlEvent::EmptyElement(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if applicable
    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlEvent::Text(t) => Some(t.as_ref()),
            XmlEvent::CData(t) => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_element_attribute() {
        let elem = StartElement::new("store", vec![Attribute::new("id", "281")]);
        assert_eq!(elem.attribute("id"), Some("281"));
        assert_eq!(elem.attribute("name"), None);
    }

    #[test]
    fn test_event_kinds() {
        let start = XmlEvent::EmptyElement(StartElement::new("br", vec![]));
        assert!(start.is_start_element());
        assert!(!start.is_end_element());
        assert_eq!(start.as_start_element().map(|e| e.name), Some("br"));

        let cdata = XmlEvent::CData("a < b");
        assert_eq!(cdata.as_text(), Some("a < b"));
        assert!(XmlEvent::EndElement(EndElement { name: "br" }).is_end_element());
    }
}
