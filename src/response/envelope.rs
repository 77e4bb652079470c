//! Transport-level response wrapper
//!
//! An [`Envelope`] owns everything one API call returned: status, headers
//! and the parsed root element. The body is always parsed, whatever the
//! status; the status alone then decides whether the root is read as a
//! payload or as an [`ErrorDocument`].

use std::cell::OnceCell;
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

use super::error::ErrorDocument;
use crate::client::TransportResult;
use crate::config::ParserConfig;
use crate::dom::{parse_reader, Element};
use crate::error::ParseError;

/// Response headers: name → values in the order received
pub type Headers = HashMap<String, Vec<String>>;

/// First status code classified as an error
pub const ERROR_STATUS_THRESHOLD: u16 = 400;

#[derive(Debug)]
pub struct Envelope {
    status: u16,
    headers: Headers,
    root: Option<Arc<Element>>,
    error: OnceCell<ErrorDocument>,
}

impl Envelope {
    /// Wrap an already parsed root
    pub fn new(status: u16, headers: Headers, root: Option<Arc<Element>>) -> Self {
        tracing::debug!(
            status,
            root = root.as_ref().map(|r| r.name()),
            error = status >= ERROR_STATUS_THRESHOLD,
            "response classified"
        );
        Envelope {
            status,
            headers,
            root,
            error: OnceCell::new(),
        }
    }

    /// Read and parse a whole body
    pub fn from_reader<R: Read>(
        status: u16,
        headers: Headers,
        body: R,
        config: &ParserConfig,
    ) -> Result<Self, ParseError> {
        let root = parse_reader(body, config)?.map(Arc::new);
        Ok(Envelope::new(status, headers, root))
    }

    /// Parse the body delivered by a transport
    pub fn from_transport(result: TransportResult, config: &ParserConfig) -> Result<Self, ParseError> {
        let TransportResult {
            status,
            headers,
            body,
        } = result;
        Envelope::from_reader(status, headers, body, config)
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_error(&self) -> bool {
        self.status >= ERROR_STATUS_THRESHOLD
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Values of a header, matching the name case-insensitively
    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
    }

    /// The document root, `None` if the body held no element
    pub fn root(&self) -> Option<&Arc<Element>> {
        self.root.as_ref()
    }

    /// An attribute of the root element
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.root.as_ref()?.attribute(name)
    }

    /// The error document, built on first access; `None` for successful responses
    pub fn error(&self) -> Option<&ErrorDocument> {
        if !self.is_error() {
            return None;
        }
        Some(self.error.get_or_init(|| {
            let document = ErrorDocument::new(self.status, self.root.as_deref());
            tracing::warn!(
                code = document.code(),
                status = document.status(),
                message = document.message(),
                "service returned an error document"
            );
            document
        }))
    }
}
