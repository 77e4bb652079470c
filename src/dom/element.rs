//! Generic element node
//!
//! An [`Element`] is mutable only while a [`TreeBuilder`](super::TreeBuilder)
//! assembles it. Once a document is built, elements are shared behind `Arc`
//! and treated as read-only; the chaining mutators exist for the builder and
//! for constructing fixtures, not as an invitation to edit parsed trees.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::core::entities::encode_text;
use crate::error::NotFoundError;

/// A named node with optional attributes, scalar value and ordered children
///
/// Value and children are not mutually exclusive here. An element with any
/// children is a container and projections ignore its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Option<HashMap<String, String>>,
    children: Option<Vec<Arc<Element>>>,
    value: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "element names are never empty");
        Element {
            name,
            attributes: None,
            children: None,
            value: None,
        }
    }

    /// Create a leaf element holding `value`
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut element = Element::new(name);
        element.value = Some(value.into());
        element
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    /// Get an attribute value; `None` if attributes were never set or the key is missing
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.as_ref()?.get(name).map(String::as_str)
    }

    /// All attributes, `None` if none were ever set
    pub fn attributes(&self) -> Option<&HashMap<String, String>> {
        self.attributes.as_ref()
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Append a child; sibling names need not be unique
    pub fn add_child(&mut self, child: impl Into<Arc<Element>>) -> &mut Self {
        self.children.get_or_insert_with(Vec::new).push(child.into());
        self
    }

    /// Remove the first child equal to `child`
    pub fn remove_child(&mut self, child: &Element) -> Result<&mut Self, NotFoundError> {
        let index = self
            .children
            .as_ref()
            .and_then(|children| children.iter().position(|c| **c == *child))
            .ok_or_else(|| NotFoundError {
                name: child.name.clone(),
            })?;

        if let Some(children) = self.children.as_mut() {
            children.remove(index);
        }
        Ok(self)
    }

    /// Children in document order (empty for a leaf)
    pub fn children(&self) -> &[Arc<Element>] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Count this element and all its descendants
    pub fn element_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| child.element_count())
            .sum::<usize>()
    }
}

/// Compact XML rendering, attributes sorted by name
///
/// Containers render only their children, matching what projection sees.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        if let Some(attributes) = &self.attributes {
            let mut sorted: Vec<_> = attributes.iter().collect();
            sorted.sort();
            for (name, value) in sorted {
                write!(f, " {}=\"{}\"", name, encode_text(value))?;
            }
        }

        if self.has_children() {
            f.write_str(">")?;
            for child in self.children() {
                write!(f, "{}", child)?;
            }
            write!(f, "</{}>", self.name)
        } else {
            match &self.value {
                Some(value) => write!(f, ">{}</{}>", encode_text(value), self.name),
                None => f.write_str("/>"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_containers() {
        let element = Element::new("store");
        assert_eq!(element.name(), "store");
        assert!(element.attributes().is_none());
        assert!(element.children().is_empty());
        assert!(!element.has_children());
        assert_eq!(element.attribute("id"), None);
        assert_eq!(element.value(), None);
    }

    #[test]
    fn test_chaining() {
        let mut element = Element::new("store");
        element
            .set_attribute("id", "281")
            .set_attribute("id", "282")
            .add_child(Element::with_value("name", "Union Square"))
            .add_child(Element::with_value("name", "Chelsea"));

        assert_eq!(element.attribute("id"), Some("282"));
        assert_eq!(element.attributes().map(|a| a.len()), Some(1));
        assert_eq!(element.children().len(), 2);
        assert!(element.has_children());
        assert_eq!(element.element_count(), 3);
    }

    #[test]
    fn test_remove_child_first_occurrence() {
        let mut element = Element::new("list");
        element
            .add_child(Element::with_value("x", "1"))
            .add_child(Element::with_value("x", "2"))
            .add_child(Element::with_value("x", "1"));

        element.remove_child(&Element::with_value("x", "1")).unwrap();
        let values: Vec<_> = element.children().iter().map(|c| c.value()).collect();
        assert_eq!(values, vec![Some("2"), Some("1")]);
    }

    #[test]
    fn test_remove_missing_child() {
        let mut leaf = Element::new("leaf");
        let err = leaf.remove_child(&Element::new("ghost")).unwrap_err();
        assert_eq!(err.name, "ghost");

        let mut parent = Element::new("parent");
        parent.add_child(Element::new("a"));
        assert!(parent.remove_child(&Element::new("b")).is_err());
        assert_eq!(parent.children().len(), 1);
    }

    #[test]
    fn test_emptied_container_is_leaf() {
        let mut parent = Element::new("parent");
        parent.add_child(Element::new("a"));
        parent.remove_child(&Element::new("a")).unwrap();
        assert!(!parent.has_children());
    }

    #[test]
    fn test_display() {
        let mut root = Element::new("products");
        root.set_attribute("total", "1").set_attribute("from", "1");
        let mut product = Element::new("product");
        product
            .add_child(Element::with_value("name", "Cables & Wires"))
            .add_child(Element::new("upc"));
        root.add_child(product);

        assert_eq!(
            root.to_string(),
            "<products from=\"1\" total=\"1\"><product><name>Cables &amp; Wires</name><upc/></product></products>"
        );
    }
}
