//! Element tree construction and projection from whole documents

use std::collections::BTreeMap;

use proptest::prelude::*;
use remixml::dom::parse_str;
use remixml::{Element, Entity, FieldValue, NotFoundError, ParseError, ParserConfig};

fn parse(xml: &str) -> Option<Element> {
    parse_str(xml, &ParserConfig::default()).unwrap()
}

#[test]
fn whitespace_is_normalized() {
    let root = parse("<a>  hello\nworld </a>").unwrap();
    assert_eq!(root.value(), Some("hello world"));
}

#[test]
fn container_projects_nested_even_with_text() {
    let root = parse("<r><c>text<d>1</d>more</c></r>").unwrap();
    let entity = Entity::from_element(&root);
    let nested = entity.field("c").as_nested().unwrap();
    assert_eq!(nested.value(), Some("textmore"));
    assert_eq!(nested.children().len(), 1);
}

#[test]
fn duplicate_names_last_wins() {
    let root = parse("<r><x>1</x><x>2</x></r>").unwrap();
    assert_eq!(Entity::from_element(&root).field("x"), &FieldValue::Scalar("2".into()));
}

#[test]
fn remove_non_child_fails() {
    let mut root = parse("<r><a>1</a></r>").unwrap();
    let err = root.remove_child(&Element::with_value("a", "2")).unwrap_err();
    assert_eq!(err, NotFoundError { name: "a".into() });
    root.remove_child(&Element::with_value("a", "1")).unwrap();
    assert!(!root.has_children());
}

#[test]
fn malformed_documents_fail() {
    for xml in ["<a>", "<a></b>", "<a/><b/>", "<a>&bogus;</a>", "<a x='1' x='2'/>"] {
        let err = parse_str(xml, &ParserConfig::default()).unwrap_err();
        assert!(matches!(err, ParseError::Syntax(_)), "input: {}", xml);
    }
}

#[test]
fn depth_limit_is_configurable() {
    let deep = "<a><b><c><d/></c></b></a>";
    assert!(parse_str(deep, &ParserConfig::default()).is_ok());
    assert!(parse_str(deep, &ParserConfig::default().with_max_depth(3)).is_err());
}

#[test]
fn utf16_body() {
    let mut body = vec![0xFF, 0xFE];
    for unit in "<a>é</a>".encode_utf16() {
        body.extend_from_slice(&unit.to_le_bytes());
    }
    let root = remixml::dom::parse_bytes(body, &ParserConfig::default()).unwrap().unwrap();
    assert_eq!(root.value(), Some("é"));
}

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}"
}

fn arb_attributes() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(arb_name(), "[a-zA-Z0-9 ]{0,8}", 0..3)
}

fn element(name: String, attributes: BTreeMap<String, String>) -> Element {
    let mut element = Element::new(name);
    for (key, value) in attributes {
        element.set_attribute(key, value);
    }
    element
}

fn arb_tree() -> impl Strategy<Value = Element> {
    let leaf = (arb_name(), arb_attributes(), proptest::option::of("[a-zA-Z0-9 ]{0,12}")).prop_map(
        |(name, attributes, value)| {
            let mut leaf = element(name, attributes);
            if let Some(value) = value {
                leaf.set_value(value);
            }
            leaf
        },
    );

    leaf.prop_recursive(3, 24, 4, |inner| {
        (arb_name(), arb_attributes(), prop::collection::vec(inner, 1..4)).prop_map(
            |(name, attributes, children)| {
                let mut container = element(name, attributes);
                for child in children {
                    container.add_child(child);
                }
                container
            },
        )
    })
}

/// What parsing the compact rendering of `source` must produce
fn expected(source: &Element) -> Element {
    let mut out = Element::new(source.name());
    if let Some(attributes) = source.attributes() {
        for (key, value) in attributes {
            out.set_attribute(key.as_str(), value.as_str());
        }
    }
    if source.has_children() {
        for child in source.children() {
            out.add_child(expected(child));
        }
    } else if let Some(text) = source.value().filter(|t| !t.is_empty()) {
        out.set_value(text.trim());
    }
    out
}

proptest! {
    #[test]
    fn tree_survives_render_and_parse(tree in arb_tree()) {
        let rendered = tree.to_string();
        let parsed = parse_str(&rendered, &ParserConfig::default()).unwrap();
        prop_assert_eq!(parsed, Some(expected(&tree)));
    }
}
