//! Envelope classification, paging and typed views over full response bodies

use std::cell::Cell;
use std::io::Cursor;

use remixml::{
    Client, ClientConfig, Entity, FormatError, Headers, ParserConfig, ProductResponse,
    ProductsResponse, Request, Response, StoresResponse, Transport, TransportError,
    TransportResult,
};

const PRODUCTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<products currentPage="2" totalPages="10" from="11" to="20" total="100" queryTime="0.006" totalTime="0.031"
          canonicalUrl="/v1/products(type=Movie)?page=2">
  <product>
    <sku>8880044</sku>
    <name>Batman Begins</name>
    <salePrice>9.99</salePrice>
    <onlineAvailability>true</onlineAvailability>
  </product>
  <product>
    <sku>9191921</sku>
    <name>The Dark
      Knight</name>
    <salePrice>n/a</salePrice>
  </product>
</products>"#;

fn body(xml: &str) -> Cursor<Vec<u8>> {
    Cursor::new(xml.as_bytes().to_vec())
}

#[test]
fn error_status_reads_error_document() {
    let response: Response<Entity> = Response::from_reader(
        404,
        Headers::new(),
        body("<error><message>Not found</message></error>"),
        &ParserConfig::default(),
    )
    .unwrap();
    assert!(response.is_error());
    let error = response.error().unwrap();
    assert_eq!(error.message(), "Not found");
    assert_eq!(error.status(), "403 Forbidden");
    assert_eq!(error.code(), 404);
}

#[test]
fn empty_success_body_has_absent_fields() {
    let response = ProductResponse::from_reader(200, Headers::new(), body(""), &ParserConfig::default())
        .unwrap();
    assert!(response.root().is_none());
    let product = response.entity().unwrap();
    assert_eq!(product.sku(), None);
    assert_eq!(product.sale_price().unwrap(), None);
    assert!(!product.is_active());
}

#[test]
fn collection_paging_values() {
    let response = ProductsResponse::from_reader(200, Headers::new(), body(PRODUCTS), &ParserConfig::default())
        .unwrap();
    assert_eq!(response.current_page().unwrap(), 2);
    assert_eq!(response.total_pages().unwrap(), 10);
    assert_eq!(response.from().unwrap(), 11);
    assert_eq!(response.to().unwrap(), 20);
    assert_eq!(response.total().unwrap(), 100);
    assert_eq!(response.query_time().unwrap(), 0.006);
    assert_eq!(response.total_time().unwrap(), 0.031);
    assert_eq!(response.canonical_url().unwrap(), "/v1/products(type=Movie)?page=2");
}

#[test]
fn collection_missing_total_fails() {
    let without_total = PRODUCTS.replace(" total=\"100\"", "");
    let response = ProductsResponse::from_reader(
        200,
        Headers::new(),
        body(&without_total),
        &ParserConfig::default(),
    )
    .unwrap();
    let err = response.total().unwrap_err();
    assert_eq!(err, FormatError::missing("total"));
    assert_eq!(response.total_pages().unwrap(), 10);
}

#[test]
fn collection_items_are_typed() {
    let response = ProductsResponse::from_reader(200, Headers::new(), body(PRODUCTS), &ParserConfig::default())
        .unwrap();
    let items = response.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].sale_price().unwrap(), Some(9.99));
    assert!(items[0].has_online_availability());
    assert_eq!(items[1].name(), Some("The Dark       Knight"));
    assert!(matches!(items[1].sale_price(), Err(FormatError::Float { .. })));
}

/// Counts calls and answers every request with the same stores document
struct StoresFixture {
    calls: Cell<usize>,
}

impl Transport for StoresFixture {
    fn execute(&self, request: &Request) -> Result<TransportResult, TransportError> {
        self.calls.set(self.calls.get() + 1);
        assert!(request.url.query().is_some_and(|q| q.starts_with("apiKey=")));
        let mut headers = Headers::new();
        headers.insert("X-Request-Id".into(), vec!["abc".into()]);
        Ok(TransportResult {
            status: 200,
            headers,
            body: Box::new(body(
                "<stores total=\"1\"><store><storeId>281</storeId>\
                 <products><product><sku>8880044</sku></product></products></store></stores>",
            )),
        })
    }
}

#[test]
fn client_store_availability() {
    let transport = StoresFixture { calls: Cell::new(0) };
    let client = Client::new(ClientConfig::new("KEY"), &transport).unwrap();
    let response: StoresResponse = client
        .store_availability(&["area(10001,25)"], &["sku=8880044"], &[("show", None)])
        .unwrap();

    assert_eq!(transport.calls.get(), 1);
    assert_eq!(response.header("x-request-id"), Some(&["abc".to_string()][..]));
    let store = &response.items()[0];
    assert_eq!(store.store_id(), Some("281"));
    assert_eq!(store.products()[0].sku(), Some("8880044"));
}
