//! Zero-Copy Slice Reader
//!
//! Strict pull tokenizer over an in-memory document. Names, comments and
//! undecoded text are borrowed straight from the input; only text with entity
//! references is copied.
//!
//! Lexical errors (unterminated constructs, bad attributes, undefined entities)
//! are reported here. Structural checks such as tag matching live in the SAX
//! driver.

use super::events::{EndElement, StartElement, XmlEvent};
use super::SyntaxError;
use crate::core::attributes::parse_attributes;
use crate::core::entities::{decode_text, validate_xml_chars};
use crate::core::scanner::Scanner;

/// Zero-copy XML reader over a string slice
pub struct SliceReader<'a> {
    input: &'a str,
    scanner: Scanner<'a>,
}

impl<'a> SliceReader<'a> {
    pub fn new(input: &'a str) -> Self {
        SliceReader {
            input,
            scanner: Scanner::new(input.as_bytes()),
        }
    }

    /// Current byte offset in the input
    pub fn position(&self) -> usize {
        self.scanner.position()
    }

    /// Get the next XML event, `Ok(None)` at end of input
    pub fn next_event(&mut self) -> Result<Option<XmlEvent<'a>>, SyntaxError> {
        match self.scanner.peek() {
            None => Ok(None),
            Some(b'<') => self.parse_markup().map(Some),
            Some(_) => self.parse_text().map(Some),
        }
    }

    fn error(&self, message: &str, position: usize) -> SyntaxError {
        SyntaxError::new(message, position)
    }

    /// Text runs up to the next '<' (or end of input)
    fn parse_text(&mut self) -> Result<XmlEvent<'a>, SyntaxError> {
        let start = self.scanner.position();
        let end = self.scanner.find_byte(b'<').unwrap_or(self.input.len());
        self.scanner.set_position(end);

        let raw = &self.input[start..end];
        validate_xml_chars(raw).map_err(|msg| self.error(msg, start))?;
        if raw.contains("]]>") {
            return Err(self.error("']]>' not allowed in text content", start));
        }
        let text = decode_text(raw).map_err(|msg| self.error(msg, start))?;

        Ok(XmlEvent::Text(text))
    }

    fn parse_markup(&mut self) -> Result<XmlEvent<'a>, SyntaxError> {
        let start = self.scanner.position();

        if self.scanner.starts_with(b"<?") {
            self.parse_pi(start)
        } else if self.scanner.starts_with(b"<!--") {
            self.parse_delimited(start, 4, b"-->", "Unterminated comment")
                .map(XmlEvent::Comment)
        } else if self.scanner.starts_with(b"<![CDATA[") {
            self.parse_delimited(start, 9, b"]]>", "Unterminated CDATA section")
                .map(XmlEvent::CData)
        } else if self.scanner.starts_with(b"<!DOCTYPE") {
            self.parse_doctype(start)
        } else if self.scanner.starts_with(b"</") {
            self.parse_end_tag(start)
        } else {
            self.parse_start_tag(start)
        }
    }

    /// Comment and CDATA bodies: everything up to the terminator
    fn parse_delimited(
        &mut self,
        start: usize,
        open_len: usize,
        terminator: &[u8],
        unterminated: &str,
    ) -> Result<&'a str, SyntaxError> {
        self.scanner.advance(open_len);
        let content_start = self.scanner.position();
        let content_end = self
            .scanner
            .find_sequence(terminator)
            .ok_or_else(|| self.error(unterminated, start))?;
        self.scanner.set_position(content_end + terminator.len());

        let content = &self.input[content_start..content_end];
        validate_xml_chars(content).map_err(|msg| self.error(msg, content_start))?;
        Ok(content)
    }

    fn parse_pi(&mut self, start: usize) -> Result<XmlEvent<'a>, SyntaxError> {
        self.scanner.advance(2);
        let (name_start, name_end) = self
            .scanner
            .read_name()
            .ok_or_else(|| self.error("Processing instruction target expected", start))?;
        let data_end = self
            .scanner
            .find_sequence(b"?>")
            .ok_or_else(|| self.error("Unterminated processing instruction", start))?;
        self.scanner.set_position(data_end + 2);

        let target = &self.input[name_start..name_end];
        let data = &self.input[name_end..data_end];

        if target == "xml" {
            if start != 0 {
                return Err(self.error("XML declaration must be at document start", start));
            }
            let attrs = parse_attributes(data)
                .map_err(|(msg, offset)| self.error(msg, name_end + offset))?;
            let mut version = None;
            let mut encoding = None;
            for attr in attrs {
                match attr.name {
                    "version" => version = Some(attr.value),
                    "encoding" => encoding = Some(attr.value),
                    _ => {}
                }
            }
            return Ok(XmlEvent::XmlDeclaration { version, encoding });
        }
        if target.eq_ignore_ascii_case("xml") {
            return Err(self.error("Reserved processing instruction target", start));
        }

        let data = data.trim_start();
        Ok(XmlEvent::ProcessingInstruction {
            target,
            data: (!data.is_empty()).then_some(data),
        })
    }

    /// DOCTYPE content is skipped, honouring a bracketed internal subset
    fn parse_doctype(&mut self, start: usize) -> Result<XmlEvent<'a>, SyntaxError> {
        self.scanner.advance(2);
        let content_start = self.scanner.position();
        let mut depth = 0usize;

        while let Some(b) = self.scanner.peek() {
            match b {
                b'[' => depth += 1,
                b']' => depth = depth.saturating_sub(1),
                b'>' if depth == 0 => {
                    let content = &self.input[content_start..self.scanner.position()];
                    self.scanner.advance(1);
                    return Ok(XmlEvent::DocType(content));
                }
                _ => {}
            }
            self.scanner.advance(1);
        }

        Err(self.error("Unterminated DOCTYPE declaration", start))
    }

    fn parse_end_tag(&mut self, start: usize) -> Result<XmlEvent<'a>, SyntaxError> {
        self.scanner.advance(2);
        let (name_start, name_end) = self
            .scanner
            .read_name()
            .ok_or_else(|| self.error("Invalid end tag name", start))?;
        self.scanner.skip_whitespace();

        if self.scanner.peek() != Some(b'>') {
            return Err(self.error("Expected '>' to close end tag", self.scanner.position()));
        }
        self.scanner.advance(1);

        Ok(XmlEvent::EndElement(EndElement {
            name: &self.input[name_start..name_end],
        }))
    }

    fn parse_start_tag(&mut self, start: usize) -> Result<XmlEvent<'a>, SyntaxError> {
        self.scanner.advance(1);
        let (name_start, name_end) = self
            .scanner
            .read_name()
            .ok_or_else(|| self.error("Invalid markup: element name expected", start))?;
        let tag_end = self
            .scanner
            .find_tag_end_quoted()
            .ok_or_else(|| self.error("Unterminated start tag", start))?;
        self.scanner.set_position(tag_end + 1);

        let name = &self.input[name_start..name_end];
        let mut section = &self.input[name_end..tag_end];
        let is_empty = section.ends_with('/');
        if is_empty {
            section = &section[..section.len() - 1];
        }

        let attributes = parse_attributes(section)
            .map_err(|(msg, offset)| self.error(msg, name_end + offset))?;
        let element = StartElement::new(name, attributes);

        Ok(if is_empty {
            XmlEvent::EmptyElement(element)
        } else {
            XmlEvent::StartElement(element)
        })
    }
}
