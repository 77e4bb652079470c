//! Field projection over an element's children
//!
//! An [`Entity`] flattens one element into a name → [`FieldValue`] table.
//! Leaves become scalars, containers stay as shared subtrees. Lookups never
//! coerce; the typed helpers below are what views build on.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use crate::dom::Element;
use crate::error::FormatError;

use super::EntityView;

/// One projected field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValue {
    /// No such child, or a leaf child without a value
    #[default]
    Absent,
    /// The value of a leaf child
    Scalar(String),
    /// A child with children of its own, shared with the source tree
    Nested(Arc<Element>),
}

static ABSENT: FieldValue = FieldValue::Absent;

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_nested(&self) -> Option<&Arc<Element>> {
        match self {
            FieldValue::Nested(e) => Some(e),
            _ => None,
        }
    }
}

/// Immutable field table built from an element's children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entity {
    fields: HashMap<String, FieldValue>,
}

impl Entity {
    /// An entity with no fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Project the children of `source`; for repeated names the last child wins
    pub fn from_element(source: &Element) -> Self {
        let mut fields = HashMap::with_capacity(source.children().len());
        for child in source.children() {
            let value = if child.has_children() {
                FieldValue::Nested(Arc::clone(child))
            } else {
                match child.value() {
                    Some(v) => FieldValue::Scalar(v.to_string()),
                    None => FieldValue::Absent,
                }
            };
            fields.insert(child.name().to_string(), value);
        }
        Entity { fields }
    }

    /// Project `source`, or return an empty entity when there is none
    pub fn from_optional(source: Option<&Element>) -> Self {
        source.map(Self::from_element).unwrap_or_default()
    }

    /// Raw stored value, [`FieldValue::Absent`] if the key was never projected
    pub fn field(&self, key: &str) -> &FieldValue {
        self.fields.get(key).unwrap_or(&ABSENT)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.field(key).as_scalar()
    }

    /// Parse a scalar as an integer; absent or container fields are `Ok(None)`
    pub fn int<T>(&self, key: &str) -> Result<Option<T>, FormatError>
    where
        T: FromStr<Err = std::num::ParseIntError>,
    {
        self.scalar(key)
            .map(|raw| {
                raw.parse().map_err(|source| FormatError::Integer {
                    key: key.to_string(),
                    value: raw.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Parse a scalar as a float; absent or container fields are `Ok(None)`
    pub fn float(&self, key: &str) -> Result<Option<f32>, FormatError> {
        self.scalar(key)
            .map(|raw| {
                raw.parse().map_err(|source| FormatError::Float {
                    key: key.to_string(),
                    value: raw.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// `true` only for a scalar equal to "true", ignoring case
    pub fn flag(&self, key: &str) -> bool {
        self.scalar(key)
            .is_some_and(|raw| raw.eq_ignore_ascii_case("true"))
    }

    /// Values of a container's children in order; children without a value are skipped
    pub fn strings(&self, key: &str) -> Vec<String> {
        self.nested_children(key)
            .filter_map(|child| child.value().map(str::to_string))
            .collect()
    }

    /// Project each child of a container into a view, in order
    pub fn list<V: EntityView>(&self, key: &str) -> Vec<V> {
        self.nested_children(key)
            .map(|child| V::from_element(child))
            .collect()
    }

    fn nested_children(&self, key: &str) -> impl Iterator<Item = &Arc<Element>> {
        self.field(key)
            .as_nested()
            .map(|e| e.children())
            .unwrap_or(&[])
            .iter()
    }
}
