//! Response envelopes
//!
//! ```text
//! TransportResult ---> Envelope (status, headers, root)
//!                        |-- is_error() --> ErrorDocument
//!                        |-- Response<V>::entity()
//!                        '-- CollectionResponse<V>::items() + paging
//! ```

pub mod envelope;
pub mod error;
pub mod typed;

pub use envelope::{Envelope, Headers, ERROR_STATUS_THRESHOLD};
pub use error::ErrorDocument;
pub use typed::{CollectionResponse, Response};

use crate::entity::{Product, Store};

pub type ProductResponse = Response<Product>;
pub type StoreResponse = Response<Store>;
pub type ProductsResponse = CollectionResponse<Product>;
pub type StoresResponse = CollectionResponse<Store>;
