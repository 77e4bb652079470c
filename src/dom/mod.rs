//! DOM Module - shared element trees
//!
//! Documents are materialized as [`Element`] trees. Children are held behind
//! `Arc`, so projections and cached views can keep a subtree alive without
//! copying it or borrowing from the response that parsed it.

pub mod builder;
pub mod element;

pub use builder::{normalize_text, parse_bytes, parse_reader, parse_str, TreeBuilder};
pub use element::Element;
