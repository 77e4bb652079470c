//! Catalog API client
//!
//! [`Client`] turns catalog operations into requests, runs them through a
//! [`Transport`] and wraps what comes back in typed responses. It performs no
//! retries; a failed transport call is returned as is.

pub mod query;
pub mod transport;

pub use transport::{Request, Transport, TransportError, TransportResult};

#[cfg(feature = "http")]
pub use transport::HttpTransport;

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use url::Url;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::response::{
    CollectionResponse, Envelope, ProductResponse, ProductsResponse, Response, StoreResponse,
    StoresResponse,
};

/// Service entry point, all resource paths are relative to it
pub const DEFAULT_ENTRY_POINT: &str = "http://api.remix.bestbuy.com/v1/";

/// Default product token of the `User-Agent` header
pub const DEFAULT_USER_AGENT: &str = "remixml Rust client";

/// Crate version, sent in the `User-Agent` header
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Connection settings for [`Client`]
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ClientConfig {
    pub entry_point: String,
    pub user_agent: String,
    pub api_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_key: String::new(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        ClientConfig {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// `<agent> v<version>`
    pub fn user_agent_header(&self) -> String {
        format!("{} v{}", self.user_agent, VERSION)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("entry_point", &self.entry_point)
            .field("user_agent", &self.user_agent)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Catalog client over a pluggable transport
pub struct Client<T> {
    config: ClientConfig,
    entry_point: Url,
    parser: ParserConfig,
    headers: BTreeMap<String, String>,
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(config: ClientConfig, transport: T) -> Result<Self> {
        let entry_point = Url::parse(&config.entry_point)?;
        Ok(Client {
            config,
            entry_point,
            parser: ParserConfig::default(),
            headers: BTreeMap::new(),
            transport,
        })
    }

    pub fn with_parser_config(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send an extra header with every request, replacing an earlier value
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn set_headers<I, K, V>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.set_header(name, value);
        }
        self
    }

    pub fn clear_headers(&mut self) -> &mut Self {
        self.headers.clear();
        self
    }

    /// A single product by SKU
    pub fn product(&self, sku: &str, params: &[(&str, Option<&str>)]) -> Result<ProductResponse> {
        self.get(&query::product_path(sku), params).map(Response::new)
    }

    /// Products matching all `filters`
    pub fn products<S: AsRef<str>>(
        &self,
        filters: &[S],
        params: &[(&str, Option<&str>)],
    ) -> Result<ProductsResponse> {
        self.get(&query::products_path(filters), params)
            .map(CollectionResponse::new)
    }

    /// A single store by id
    pub fn store(&self, store_id: &str, params: &[(&str, Option<&str>)]) -> Result<StoreResponse> {
        self.get(&query::store_path(store_id), params).map(Response::new)
    }

    /// Stores matching all `filters`
    pub fn stores<S: AsRef<str>>(
        &self,
        filters: &[S],
        params: &[(&str, Option<&str>)],
    ) -> Result<StoresResponse> {
        self.get(&query::stores_path(filters), params)
            .map(CollectionResponse::new)
    }

    /// Stores matching `store_filters` that carry products matching `product_filters`
    pub fn store_availability<S: AsRef<str>, P: AsRef<str>>(
        &self,
        store_filters: &[S],
        product_filters: &[P],
        params: &[(&str, Option<&str>)],
    ) -> Result<StoresResponse> {
        self.get(
            &query::availability_path(store_filters, product_filters),
            params,
        )
        .map(CollectionResponse::new)
    }

    /// Build the request for `path` without sending it
    pub fn request(&self, path: &str, params: &[(&str, Option<&str>)]) -> Result<Request> {
        let url = query::build_url(&self.entry_point, path, &self.config.api_key, params)?;
        let mut headers = Vec::with_capacity(self.headers.len() + 1);
        headers.push(("User-Agent".to_string(), self.config.user_agent_header()));
        headers.extend(self.headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(Request { url, headers })
    }

    fn get(&self, path: &str, params: &[(&str, Option<&str>)]) -> Result<Envelope> {
        let request = self.request(path, params)?;
        tracing::debug!(path, "catalog request");
        let result = self.transport.execute(&request)?;
        tracing::trace!(path, status = result.status, "catalog response received");
        Ok(Envelope::from_transport(result, &self.parser)?)
    }
}
