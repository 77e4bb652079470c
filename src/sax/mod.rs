//! SAX (Simple API for XML) Module
//!
//! Drives a [`SliceReader`] over a document and pushes element events into a
//! [`ContentHandler`]:
//!
//! ```text
//! SliceReader ---> SaxParser (structure checks) ---> ContentHandler
//! ```
//!
//! Structure rules enforced here: one root element, matching end tags, no
//! text or CDATA outside the root, nesting bounded by
//! [`ParserConfig::max_depth`], optional DOCTYPE rejection.

pub mod handler;

pub use handler::ContentHandler;

use crate::config::ParserConfig;
use crate::reader::{SliceReader, StartElement, SyntaxError, XmlEvent};

/// Event dispatcher with structure validation
pub struct SaxParser<'c> {
    config: &'c ParserConfig,
}

impl<'c> SaxParser<'c> {
    pub fn new(config: &'c ParserConfig) -> Self {
        SaxParser { config }
    }

    /// Parse `input`, calling `handler` for each element event
    pub fn parse<H: ContentHandler>(&self, input: &str, handler: &mut H) -> Result<(), SyntaxError> {
        let mut reader = SliceReader::new(input);
        let mut open: Vec<&str> = Vec::new();
        let mut seen_root = false;
        let mut seen_doctype = false;

        loop {
            let position = reader.position();
            let Some(event) = reader.next_event()? else {
                break;
            };

            match event {
                XmlEvent::StartElement(elem) => {
                    self.check_open(&elem, &open, seen_root, position)?;
                    seen_root = true;
                    handler.start_element(elem.name, &elem.attributes);
                    open.push(elem.name);
                }

                XmlEvent::EmptyElement(elem) => {
                    self.check_open(&elem, &open, seen_root, position)?;
                    seen_root = true;
                    handler.start_element(elem.name, &elem.attributes);
                    handler.end_element(elem.name);
                }

                XmlEvent::EndElement(end) => match open.pop() {
                    Some(name) if name == end.name => handler.end_element(end.name),
                    Some(name) => {
                        return Err(SyntaxError::new(
                            format!("Tag mismatch: <{}> closed with </{}>", name, end.name),
                            position,
                        ));
                    }
                    None => {
                        return Err(SyntaxError::new(
                            format!("Unexpected end tag: </{}> without matching start tag", end.name),
                            position,
                        ));
                    }
                },

                XmlEvent::Text(text) => {
                    if open.is_empty() {
                        if !text.trim().is_empty() {
                            return Err(SyntaxError::new(
                                "Text content not allowed at document level",
                                position,
                            ));
                        }
                    } else {
                        handler.characters(&text);
                    }
                }

                XmlEvent::CData(text) => {
                    if open.is_empty() {
                        return Err(SyntaxError::new(
                            "CDATA section not allowed at document level",
                            position,
                        ));
                    }
                    if self.config.cdata_as_text {
                        handler.characters(text);
                    }
                }

                XmlEvent::DocType(_) => {
                    if !self.config.allow_doctype {
                        return Err(SyntaxError::new("DOCTYPE declaration not allowed", position));
                    }
                    if seen_doctype {
                        return Err(SyntaxError::new(
                            "Multiple DOCTYPE declarations not allowed",
                            position,
                        ));
                    }
                    if seen_root {
                        return Err(SyntaxError::new(
                            "DOCTYPE must come before root element",
                            position,
                        ));
                    }
                    seen_doctype = true;
                }

                XmlEvent::Comment(_)
                | XmlEvent::ProcessingInstruction { .. }
                | XmlEvent::XmlDeclaration { .. } => {}
            }
        }

        if let Some(unclosed) = open.first() {
            return Err(SyntaxError::new(
                format!("Unclosed tag: <{}>", unclosed),
                input.len(),
            ));
        }

        Ok(())
    }

    fn check_open(
        &self,
        elem: &StartElement<'_>,
        open: &[&str],
        seen_root: bool,
        position: usize,
    ) -> Result<(), SyntaxError> {
        if open.is_empty() && seen_root {
            return Err(SyntaxError::new(
                format!("Document has multiple root elements: <{}>", elem.name),
                position,
            ));
        }
        if open.len() >= self.config.max_depth {
            return Err(SyntaxError::new(
                format!("Maximum nesting depth {} exceeded", self.config.max_depth),
                position,
            ));
        }
        Ok(())
    }
}
