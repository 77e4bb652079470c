//! Single-entity and collection responses

use std::cell::OnceCell;
use std::io::Read;
use std::ops::Deref;
use std::str::FromStr;

use super::envelope::{Envelope, Headers};
use crate::config::ParserConfig;
use crate::entity::EntityView;
use crate::error::{FormatError, ParseError};

/// A response whose root is one entity
#[derive(Debug)]
pub struct Response<V> {
    envelope: Envelope,
    entity: OnceCell<V>,
}

impl<V: EntityView> Response<V> {
    pub fn new(envelope: Envelope) -> Self {
        Response {
            envelope,
            entity: OnceCell::new(),
        }
    }

    pub fn from_reader<R: Read>(
        status: u16,
        headers: Headers,
        body: R,
        config: &ParserConfig,
    ) -> Result<Self, ParseError> {
        Envelope::from_reader(status, headers, body, config).map(Response::new)
    }

    /// The projected root, built on first access; `None` for error responses
    pub fn entity(&self) -> Option<&V> {
        if self.envelope.is_error() {
            return None;
        }
        Some(
            self.entity
                .get_or_init(|| V::from_optional(self.envelope.root().map(|r| &**r))),
        )
    }

    pub fn into_envelope(self) -> Envelope {
        self.envelope
    }
}

impl<V> Deref for Response<V> {
    type Target = Envelope;

    fn deref(&self) -> &Envelope {
        &self.envelope
    }
}

/// A paged listing: root attributes describe the page, root children are the items
#[derive(Debug)]
pub struct CollectionResponse<V> {
    envelope: Envelope,
    items: OnceCell<Vec<V>>,
}

impl<V: EntityView> CollectionResponse<V> {
    pub fn new(envelope: Envelope) -> Self {
        CollectionResponse {
            envelope,
            items: OnceCell::new(),
        }
    }

    pub fn from_reader<R: Read>(
        status: u16,
        headers: Headers,
        body: R,
        config: &ParserConfig,
    ) -> Result<Self, ParseError> {
        Envelope::from_reader(status, headers, body, config).map(CollectionResponse::new)
    }

    pub fn current_page(&self) -> Result<i32, FormatError> {
        self.parse_attribute("currentPage")
    }

    pub fn total_pages(&self) -> Result<i32, FormatError> {
        self.parse_attribute("totalPages")
    }

    pub fn from(&self) -> Result<i32, FormatError> {
        self.parse_attribute("from")
    }

    pub fn to(&self) -> Result<i32, FormatError> {
        self.parse_attribute("to")
    }

    pub fn total(&self) -> Result<i32, FormatError> {
        self.parse_attribute("total")
    }

    /// Server-side query time in seconds
    pub fn query_time(&self) -> Result<f32, FormatError> {
        self.parse_float_attribute("queryTime")
    }

    /// Total server-side time in seconds
    pub fn total_time(&self) -> Result<f32, FormatError> {
        self.parse_float_attribute("totalTime")
    }

    pub fn canonical_url(&self) -> Result<&str, FormatError> {
        self.required_attribute("canonicalUrl")
    }

    /// Root children projected in document order, built on first access
    ///
    /// Empty for error responses and bodies without a root.
    pub fn items(&self) -> &[V] {
        self.items.get_or_init(|| {
            if self.envelope.is_error() {
                return Vec::new();
            }
            self.envelope
                .root()
                .map(|root| root.children().iter().map(|c| V::from_element(c)).collect())
                .unwrap_or_default()
        })
    }

    pub fn into_envelope(self) -> Envelope {
        self.envelope
    }

    fn required_attribute(&self, key: &str) -> Result<&str, FormatError> {
        self.envelope
            .attribute(key)
            .ok_or_else(|| FormatError::missing(key))
    }

    fn parse_attribute<T>(&self, key: &str) -> Result<T, FormatError>
    where
        T: FromStr<Err = std::num::ParseIntError>,
    {
        let raw = self.required_attribute(key)?;
        raw.parse().map_err(|source| FormatError::Integer {
            key: key.to_string(),
            value: raw.to_string(),
            source,
        })
    }

    fn parse_float_attribute(&self, key: &str) -> Result<f32, FormatError> {
        let raw = self.required_attribute(key)?;
        raw.parse().map_err(|source| FormatError::Float {
            key: key.to_string(),
            value: raw.to_string(),
            source,
        })
    }
}

impl<V> Deref for CollectionResponse<V> {
    type Target = Envelope;

    fn deref(&self) -> &Envelope {
        &self.envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Entity, Product, Store};
    use std::io::Cursor;

    const STORES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<stores currentPage="1" totalPages="3" from="1" to="2" total="6" queryTime="0.004" totalTime="0.012" canonicalUrl="/v1/stores(region=NY)">
  <store><storeId>281</storeId><name>Union Square</name></store>
  <store><storeId>1040</storeId><name>Chelsea</name></store>
</stores>"#;

    fn body(xml: &str) -> Cursor<Vec<u8>> {
        Cursor::new(xml.as_bytes().to_vec())
    }

    fn stores(status: u16, xml: &str) -> CollectionResponse<Store> {
        CollectionResponse::from_reader(status, Headers::new(), body(xml), &ParserConfig::default())
            .unwrap()
    }

    #[test]
    fn test_paging() {
        let response = stores(200, STORES);
        assert_eq!(response.current_page().unwrap(), 1);
        assert_eq!(response.total_pages().unwrap(), 3);
        assert_eq!(response.from().unwrap(), 1);
        assert_eq!(response.to().unwrap(), 2);
        assert_eq!(response.total().unwrap(), 6);
        assert_eq!(response.query_time().unwrap(), 0.004);
        assert_eq!(response.total_time().unwrap(), 0.012);
        assert_eq!(response.canonical_url().unwrap(), "/v1/stores(region=NY)");
    }

    #[test]
    fn test_missing_and_bad_paging() {
        let response = stores(200, "<stores total=\"many\"/>");
        assert!(matches!(response.current_page(), Err(FormatError::Missing { .. })));
        assert!(matches!(response.total(), Err(FormatError::Integer { .. })));
        assert_eq!(response.canonical_url().unwrap_err().key(), "canonicalUrl");
    }

    #[test]
    fn test_items_cached_in_order() {
        let response = stores(200, STORES);
        let names: Vec<_> = response.items().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec![Some("Union Square"), Some("Chelsea")]);
        assert!(std::ptr::eq(response.items(), response.items()));
    }

    #[test]
    fn test_items_empty_without_root_or_on_error() {
        assert!(stores(200, "").items().is_empty());
        let error = stores(403, "<error><store><storeId>1</storeId></store></error>");
        assert!(error.items().is_empty());
        assert!(error.is_error());
    }

    #[test]
    fn test_single_entity() {
        let response: Response<Product> = Response::from_reader(
            200,
            Headers::new(),
            body("<product><sku>42</sku><name>TV</name></product>"),
            &ParserConfig::default(),
        )
        .unwrap();
        let product = response.entity().unwrap();
        assert_eq!(product.sku(), Some("42"));
        assert!(std::ptr::eq(product, response.entity().unwrap()));
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn test_single_entity_empty_body() {
        let response: Response<Entity> =
            Response::from_reader(200, Headers::new(), body(""), &ParserConfig::default()).unwrap();
        assert!(response.root().is_none());
        assert!(response.entity().unwrap().is_empty());
    }

    #[test]
    fn test_single_entity_error() {
        let response: Response<Product> = Response::from_reader(
            404,
            Headers::new(),
            body("<error><message>Not found</message></error>"),
            &ParserConfig::default(),
        )
        .unwrap();
        assert!(response.entity().is_none());
        assert_eq!(response.error().map(|e| e.message()), Some("Not found"));
    }
}
