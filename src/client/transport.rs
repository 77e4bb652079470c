//! Transport seam
//!
//! The client builds [`Request`]s and hands them to a [`Transport`]; whatever
//! performs the I/O returns the raw status, headers and body. Tests plug in
//! canned transports, production code uses [`HttpTransport`] (feature
//! `http`).

use std::fmt;
use std::io::Read;

use url::Url;

use crate::response::Headers;

/// One GET request against the catalog service
#[derive(Clone, PartialEq, Eq)]
pub struct Request {
    pub url: Url,
    /// Request headers in the order they are sent
    pub headers: Vec<(String, String)>,
}

impl Request {
    /// The URL without its query string (which carries the API key)
    pub fn redacted_url(&self) -> String {
        let mut url = self.url.clone();
        url.set_query(None);
        url.to_string()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("url", &self.redacted_url())
            .field("headers", &self.headers)
            .finish()
    }
}

/// What a transport got back: status, headers and the unread body
pub struct TransportResult {
    pub status: u16,
    pub headers: Headers,
    pub body: Box<dyn Read + Send>,
}

impl fmt::Debug for TransportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResult")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// The request never produced a response
#[derive(Debug, thiserror::Error)]
#[error("request to {url} failed")]
pub struct TransportError {
    /// Target URL, query string removed
    pub url: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new(request: &Request, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        TransportError {
            url: request.redacted_url(),
            source: source.into(),
        }
    }
}

/// Executes requests; implementations own connection handling
pub trait Transport {
    fn execute(&self, request: &Request) -> Result<TransportResult, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &Request) -> Result<TransportResult, TransportError> {
        (**self).execute(request)
    }
}

/// Blocking HTTP transport
#[cfg(feature = "http")]
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (timeouts, proxies)
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        HttpTransport { client }
    }
}

#[cfg(feature = "http")]
impl Transport for HttpTransport {
    fn execute(&self, request: &Request) -> Result<TransportResult, TransportError> {
        let mut builder = self.client.get(request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let response = builder
            .send()
            .map_err(|err| TransportError::new(request, err))?;

        let status = response.status().as_u16();
        let mut headers = Headers::new();
        for (name, value) in response.headers() {
            headers
                .entry(name.as_str().to_string())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }

        Ok(TransportResult {
            status,
            headers,
            body: Box::new(response),
        })
    }
}
