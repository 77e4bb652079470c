//! Entity projection and typed views
//!
//! A parsed document is generic. This module gives it names: [`Entity`]
//! maps child names to values and the views in [`views`] expose those
//! values under catalog field names.

pub mod projection;
pub mod views;

pub use projection::{Entity, FieldValue};
pub use views::{Category, Offer, Product, RelatedItem, Store};

use crate::dom::Element;

/// A typed wrapper over one projected [`Entity`]
pub trait EntityView: Sized {
    fn from_entity(entity: Entity) -> Self;

    /// The underlying field table
    fn entity(&self) -> &Entity;

    /// Project `element` and wrap it
    fn from_element(element: &Element) -> Self {
        Self::from_entity(Entity::from_element(element))
    }

    /// Project `element` if present, otherwise wrap an empty entity
    fn from_optional(element: Option<&Element>) -> Self {
        Self::from_entity(Entity::from_optional(element))
    }
}

impl EntityView for Entity {
    fn from_entity(entity: Entity) -> Self {
        entity
    }

    fn entity(&self) -> &Entity {
        self
    }
}
