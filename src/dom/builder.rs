//! Tree construction from parse events
//!
//! [`TreeBuilder`] is the [`ContentHandler`] that turns the event stream of a
//! single document into an [`Element`] tree. Text is buffered per open
//! element; when an element closes, a non-empty buffer is normalized (each
//! line break becomes one space, then the result is trimmed) and stored as
//! the element's value. Elements that never received text keep no value.

use std::io::Read;

use super::element::Element;
use crate::config::ParserConfig;
use crate::core::attributes::Attribute;
use crate::core::encoding::decode_body;
use crate::error::ParseError;
use crate::reader::buffered::read_all;
use crate::sax::{ContentHandler, SaxParser};

/// An element still waiting for its end tag, with its raw text so far
struct OpenElement {
    element: Element,
    text: String,
}

/// Builds one element tree from one document
///
/// Single-use: [`TreeBuilder::build`] consumes the builder. When driven
/// directly as a [`ContentHandler`], events arriving after the root element
/// closed are dropped.
pub struct TreeBuilder {
    config: ParserConfig,
    stack: Vec<OpenElement>,
    root: Option<Element>,
}

impl TreeBuilder {
    pub fn new(config: ParserConfig) -> Self {
        TreeBuilder {
            config,
            stack: Vec::new(),
            root: None,
        }
    }

    /// Parse `input` and return its root element, `None` if it has no element at all
    pub fn build(mut self, input: &str) -> Result<Option<Element>, ParseError> {
        let config = self.config.clone();
        if let Err(err) = SaxParser::new(&config).parse(input, &mut self) {
            tracing::debug!(error = %err, "document is not well-formed");
            return Err(err.into());
        }

        let root = self.finish();
        match &root {
            Some(root) => tracing::trace!(
                root = root.name(),
                elements = root.element_count(),
                "element tree built"
            ),
            None => tracing::trace!("document has no root element"),
        }
        Ok(root)
    }

    /// Take the completed root, discarding any element left open
    pub fn finish(self) -> Option<Element> {
        self.root
    }

    fn is_done(&self) -> bool {
        self.root.is_some() && self.stack.is_empty()
    }
}

impl ContentHandler for TreeBuilder {
    fn start_element(&mut self, name: &str, attributes: &[Attribute<'_>]) {
        if self.is_done() {
            tracing::warn!(element = name, "element after root ignored");
            return;
        }

        let mut element = Element::new(name);
        for attr in attributes {
            element.set_attribute(attr.name, attr.value.as_ref());
        }
        self.stack.push(OpenElement {
            element,
            text: String::new(),
        });
    }

    fn characters(&mut self, text: &str) {
        if let Some(open) = self.stack.last_mut() {
            open.text.push_str(text);
        }
    }

    fn end_element(&mut self, _name: &str) {
        let Some(OpenElement { mut element, text }) = self.stack.pop() else {
            return;
        };
        if !text.is_empty() {
            element.set_value(normalize_text(&text));
        }

        match self.stack.last_mut() {
            Some(parent) => {
                parent.element.add_child(element);
            }
            None => self.root = Some(element),
        }
    }
}

/// Replace each line break (`\n`, `\r\n` or a lone `\r`) with a space and trim
pub fn normalize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push(' ');
            }
            '\n' => out.push(' '),
            _ => out.push(c),
        }
    }
    out.trim().to_string()
}

/// Parse an in-memory document
pub fn parse_str(input: &str, config: &ParserConfig) -> Result<Option<Element>, ParseError> {
    TreeBuilder::new(config.clone()).build(input)
}

/// Parse raw body bytes (UTF-8 with optional BOM, or UTF-16)
pub fn parse_bytes(body: Vec<u8>, config: &ParserConfig) -> Result<Option<Element>, ParseError> {
    let text = decode_body(body).map_err(ParseError::Encoding)?;
    parse_str(&text, config)
}

/// Read a body stream to the end and parse it
pub fn parse_reader<R: Read>(reader: R, config: &ParserConfig) -> Result<Option<Element>, ParseError> {
    let body = read_all(reader)?;
    parse_bytes(body, config)
}
