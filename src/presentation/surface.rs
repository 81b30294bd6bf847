//! UI Surface
//!
//! The boundary between the applier and whatever renders the page. A
//! surface exposes the root element's class list and the stylesheet links
//! that may carry tier-specific alternates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Link Element
// =============================================================================

/// A stylesheet link with its attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkElement {
    /// Currently active resource
    pub href: String,
    /// Remaining attributes, including `data-href-<tier>` alternates
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl LinkElement {
    /// Create a link pointing at `href`
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Look up an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

// =============================================================================
// Surface Port
// =============================================================================

/// A UI root the presentation applier can write to
pub trait UiSurface {
    /// Current class attribute of the root element
    fn class_name(&self) -> &str;

    /// Replace the class attribute of the root element
    fn set_class_name(&mut self, class_name: String);

    /// Stylesheet links on the page
    fn links_mut(&mut self) -> &mut [LinkElement];
}

// =============================================================================
// In-Memory Document
// =============================================================================

/// In-memory page used by the CLI and tests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryDocument {
    /// Body class attribute
    pub body_class: String,
    /// Stylesheet links
    pub links: Vec<LinkElement>,
}

impl MemoryDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with an initial body class and links
    pub fn with_links(body_class: impl Into<String>, links: Vec<LinkElement>) -> Self {
        Self {
            body_class: body_class.into(),
            links,
        }
    }

    /// Class tokens of the body element
    pub fn body_classes(&self) -> Vec<&str> {
        self.body_class.split_whitespace().collect()
    }
}

impl UiSurface for MemoryDocument {
    fn class_name(&self) -> &str {
        &self.body_class
    }

    fn set_class_name(&mut self, class_name: String) {
        self.body_class = class_name;
    }

    fn links_mut(&mut self) -> &mut [LinkElement] {
        &mut self.links
    }
}
