//! remixml - XML catalog API client
//!
//! Fetches XML documents from the Best Buy Remix products/stores API and
//! exposes them as typed records.
//!
//! Layers, leaf to root:
//! - `core`, `reader`: strict zero-copy tokenizer (encodings, entities, attributes)
//! - `sax`: structure checks and push events into a [`ContentHandler`]
//! - `dom`: [`TreeBuilder`] assembles shared [`Element`] trees
//! - `entity`: [`Entity`] field tables and typed views ([`Product`], [`Store`], ...)
//! - `response`: [`Envelope`] classification, [`Response`], [`CollectionResponse`]
//! - `client`: paths, filters, query strings and the [`Transport`] seam
//!
//! ```
//! use remixml::{ParserConfig, StoresResponse, Headers};
//!
//! let body = r#"<stores total="1" currentPage="1"><store><storeId>281</storeId></store></stores>"#;
//! let stores = StoresResponse::from_reader(200, Headers::new(), body.as_bytes(), &ParserConfig::default())?;
//! assert_eq!(stores.total()?, 1);
//! assert_eq!(stores.items()[0].store_id(), Some("281"));
//! # Ok::<(), remixml::Error>(())
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod dom;
pub mod entity;
pub mod error;
pub mod reader;
pub mod response;
pub mod sax;

pub use client::{Client, ClientConfig, Request, Transport, TransportError, TransportResult};
#[cfg(feature = "http")]
pub use client::HttpTransport;
pub use config::ParserConfig;
pub use dom::{Element, TreeBuilder};
pub use entity::{Category, Entity, EntityView, FieldValue, Offer, Product, RelatedItem, Store};
pub use error::{Error, FormatError, NotFoundError, ParseError, Result};
pub use reader::SyntaxError;
pub use response::{
    CollectionResponse, Envelope, ErrorDocument, Headers, ProductResponse, ProductsResponse,
    Response, StoreResponse, StoresResponse,
};
pub use sax::{ContentHandler, SaxParser};
