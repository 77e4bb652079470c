//! Parser configuration
//!
//! Passed explicitly to every parse. There is no global reader setup.

use serde::Deserialize;

/// Default limit on element nesting
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for turning a response body into an element tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ParserConfig {
    /// Maximum element nesting depth; deeper documents are rejected
    pub max_depth: usize,
    /// Whether CDATA sections contribute to an element's text
    pub cdata_as_text: bool,
    /// Whether a DOCTYPE declaration is tolerated (it is skipped, never expanded)
    pub allow_doctype: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            cdata_as_text: true,
            allow_doctype: true,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_cdata_as_text(mut self, enabled: bool) -> Self {
        self.cdata_as_text = enabled;
        self
    }

    pub fn with_allow_doctype(mut self, allowed: bool) -> Self {
        self.allow_doctype = allowed;
        self
    }
}
