//! XML Entity Decoding
//!
//! Handles decoding of XML entities:
//! - Built-in entities: &lt; &gt; &amp; &quot; &apos;
//! - Numeric character references: &#123; &#x7B;
//!
//! Uses Cow for zero-copy when no entities are present. Anything else after
//! an ampersand is rejected: documents are never expanded through a DTD.

use memchr::memchr;
use std::borrow::Cow;

/// Decode text content, handling entity references
///
/// Returns Borrowed if no entities present (zero-copy),
/// returns Owned if entities were decoded.
pub fn decode_text(input: &str) -> Result<Cow<'_, str>, &'static str> {
    if memchr(b'&', input.as_bytes()).is_none() {
        return Ok(Cow::Borrowed(input));
    }
    decode_entities(input).map(Cow::Owned)
}

fn decode_entities(input: &str) -> Result<String, &'static str> {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = memchr(b'&', rest.as_bytes()) {
        result.push_str(&rest[..amp]);
        rest = &rest[amp + 1..];

        let semi = memchr(b';', rest.as_bytes()).ok_or("Bare '&' not allowed")?;
        let decoded = decode_entity(&rest[..semi])?;
        result.push(decoded);
        rest = &rest[semi + 1..];
    }
    result.push_str(rest);

    Ok(result)
}

/// Decode a single entity (without & and ;)
fn decode_entity(entity: &str) -> Result<char, &'static str> {
    match entity {
        "lt" => Ok('<'),
        "gt" => Ok('>'),
        "amp" => Ok('&'),
        "quot" => Ok('"'),
        "apos" => Ok('\''),
        "" => Err("Empty entity reference"),
        _ => match entity.strip_prefix('#') {
            Some(numeric) => decode_numeric_entity(numeric).ok_or("Invalid character reference"),
            None => Err("Undefined entity reference"),
        },
    }
}

/// Decode a numeric character reference body (after '#')
fn decode_numeric_entity(entity: &str) -> Option<char> {
    let codepoint = match entity.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => entity.parse::<u32>().ok()?,
    };

    if !is_valid_xml_char(codepoint) {
        return None;
    }
    char::from_u32(codepoint)
}

/// Check if a code point is a valid XML 1.0 Char
/// Char ::= #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]
#[inline]
pub fn is_valid_xml_char(codepoint: u32) -> bool {
    matches!(codepoint,
        0x9 | 0xA | 0xD |
        0x20..=0xD7FF |
        0xE000..=0xFFFD |
        0x10000..=0x10FFFF
    )
}

/// Reject raw control characters that XML 1.0 does not allow in content
pub fn validate_xml_chars(content: &str) -> Result<(), &'static str> {
    if content.chars().all(|c| is_valid_xml_char(c as u32)) {
        Ok(())
    } else {
        Err("Invalid XML character in content")
    }
}

/// Encode text for XML output (escape special characters)
pub fn encode_text(input: &str) -> Cow<'_, str> {
    if !input.bytes().any(|b| matches!(b, b'<' | b'>' | b'&' | b'"' | b'\'')) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_entities() {
        let result = decode_text("Hello, World!").unwrap();
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_basic_entities() {
        let result = decode_text("&lt;hello&gt; &amp; &quot;world&quot; &apos;").unwrap();
        assert_eq!(result, "<hello> & \"world\" '");
    }

    #[test]
    fn test_numeric_references() {
        assert_eq!(decode_text("&#65;&#66;&#67;").unwrap(), "ABC");
        assert_eq!(decode_text("&#x41;&#X42;&#x43;").unwrap(), "ABC");
        assert_eq!(decode_text("&#x1F600;").unwrap(), "😀");
    }

    #[test]
    fn test_rejects_undefined_and_bare() {
        assert_eq!(decode_text("&nbsp;"), Err("Undefined entity reference"));
        assert_eq!(decode_text("fish & chips"), Err("Bare '&' not allowed"));
        assert_eq!(decode_text("&#0;"), Err("Invalid character reference"));
        assert_eq!(decode_text("&;"), Err("Empty entity reference"));
    }

    #[test]
    fn test_validate_xml_chars() {
        assert!(validate_xml_chars("tab\tand newline\n").is_ok());
        assert!(validate_xml_chars("bell\u{7}").is_err());
    }

    #[test]
    fn test_encode_text() {
        let result = encode_text("<hello> & \"world\"");
        assert_eq!(result, "&lt;hello&gt; &amp; &quot;world&quot;");
        assert!(matches!(encode_text("plain"), Cow::Borrowed(_)));
    }
}
