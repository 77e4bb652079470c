//! XML Attribute Parsing
//!
//! Parses the attribute section of a start tag. Only the strict form is
//! accepted: every attribute needs a quoted value.

use super::entities::decode_text;
use super::scanner::{is_name_char, is_name_start_char, is_whitespace};
use std::borrow::Cow;

/// A parsed XML attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    /// Attribute name (may include namespace prefix)
    pub name: &'a str,
    /// Attribute value (entities decoded)
    pub value: Cow<'a, str>,
}

impl<'a> Attribute<'a> {
    pub fn new(name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        Attribute {
            name,
            value: value.into(),
        }
    }
}

/// Parse attributes from raw tag content (after the element name)
///
/// Input should be the content between element name and '>' or '/>'.
/// Returns the offset of the failure inside `input` on error.
pub fn parse_attributes(input: &str) -> Result<Vec<Attribute<'_>>, (&'static str, usize)> {
    let bytes = input.as_bytes();
    let mut attrs: Vec<Attribute<'_>> = Vec::new();
    let mut pos = 0;

    loop {
        let ws_start = pos;
        while pos < bytes.len() && is_whitespace(bytes[pos]) {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }
        if pos == ws_start {
            return Err(("Whitespace required between attributes", pos));
        }

        // Attribute name
        if !is_name_start_char(bytes[pos]) {
            return Err((
                "Attribute name must start with letter, underscore, or colon",
                pos,
            ));
        }
        let name_start = pos;
        while pos < bytes.len() && is_name_char(bytes[pos]) {
            pos += 1;
        }
        let name = &input[name_start..pos];

        while pos < bytes.len() && is_whitespace(bytes[pos]) {
            pos += 1;
        }
        if bytes.get(pos) != Some(&b'=') {
            return Err(("Attribute value required", pos));
        }
        pos += 1;
        while pos < bytes.len() && is_whitespace(bytes[pos]) {
            pos += 1;
        }

        // Quoted value
        let quote = match bytes.get(pos) {
            Some(&q @ (b'"' | b'\'')) => q,
            _ => return Err(("Attribute value must be quoted", pos)),
        };
        pos += 1;
        let value_start = pos;
        while pos < bytes.len() && bytes[pos] != quote {
            if bytes[pos] == b'<' {
                return Err(("Attribute value cannot contain '<'", pos));
            }
            pos += 1;
        }
        if pos >= bytes.len() {
            return Err(("Attribute value has mismatched quotes", value_start));
        }
        let value = decode_text(&input[value_start..pos]).map_err(|msg| (msg, value_start))?;
        pos += 1;

        if attrs.iter().any(|a| a.name == name) {
            return Err(("Duplicate attribute", name_start));
        }
        attrs.push(Attribute::new(name, value));
    }

    Ok(attrs)
}
