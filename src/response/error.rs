//! Error document returned with 4xx/5xx statuses

use crate::dom::Element;
use crate::entity::Entity;

/// Status text used when the document carries none
pub const DEFAULT_STATUS: &str = "403 Forbidden";

/// Message used when the document carries none
pub const DEFAULT_MESSAGE: &str = "Developer inactive";

/// Service error details, projected from the root of an error response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDocument {
    code: u16,
    entity: Entity,
}

impl ErrorDocument {
    pub fn new(code: u16, root: Option<&Element>) -> Self {
        ErrorDocument {
            code,
            entity: Entity::from_optional(root),
        }
    }

    /// The transport status code of the response
    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn status(&self) -> &str {
        self.entity.scalar("status").unwrap_or(DEFAULT_STATUS)
    }

    pub fn message(&self) -> &str {
        self.entity.scalar("message").unwrap_or(DEFAULT_MESSAGE)
    }

    /// Suggested request URIs, in document order
    pub fn examples(&self) -> Vec<String> {
        self.entity.strings("examples")
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;
    use crate::dom::parse_str;

    #[test]
    fn test_full_document() {
        let xml = "<error>\n  <status>400 Bad Request</status>\n  <message>Couldn't understand\n the query</message>\n  \
                   <examples>\n    <example>/v1/products(sku=1)</example>\n    <example>/v1/stores</example>\n  </examples>\n</error>";
        let root = parse_str(xml, &ParserConfig::default()).unwrap().unwrap();
        let doc = ErrorDocument::new(400, Some(&root));
        assert_eq!(doc.code(), 400);
        assert_eq!(doc.status(), "400 Bad Request");
        assert_eq!(doc.message(), "Couldn't understand  the query");
        assert_eq!(doc.examples(), vec!["/v1/products(sku=1)", "/v1/stores"]);
    }

    #[test]
    fn test_defaults() {
        let doc = ErrorDocument::new(403, None);
        assert_eq!(doc.status(), DEFAULT_STATUS);
        assert_eq!(doc.message(), DEFAULT_MESSAGE);
        assert!(doc.examples().is_empty());
        assert!(doc.entity().is_empty());
    }
}
