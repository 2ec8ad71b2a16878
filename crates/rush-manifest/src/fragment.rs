//! Recursive serialization of manifest subtrees
//!
//! Layout of a fragment:
//!
//! ```text
//! <service android:name = ".Foo">
//! <meta-data android:name = "k" android:value = "v" />
//! </service>
//! ```
//!
//! Text and comment nodes never produce output, but they still count as
//! children: `<a>\n</a>` is emitted as an open/close pair, `<a/>` as `<a />`.

use crate::attributes::{render_attributes, substitute_placeholder};
use crate::document::{Element, ElementRef, Node};
use serde::Serialize;
use std::fmt;

/// A reconstructed manifest subtree
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fragment(String);

impl Fragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Fragment {
    fn from(value: &str) -> Self {
        Fragment(value.to_string())
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Serialize `node` if it is an element sitting directly under `expected_parent`
///
/// `parent` is the tag name of the element that actually contains `node`.
/// Anything else yields an empty fragment, which keeps a tag-name lookup from
/// picking up elements nested deeper than the intended scope.
pub fn serialize_node(node: &Node, parent: Option<&str>, expected_parent: &str) -> Fragment {
    match node {
        Node::Element(element) => serialize_element(
            ElementRef { element, parent },
            expected_parent,
        ),
        Node::Text(_) | Node::Comment(_) => Fragment::default(),
    }
}

/// [`serialize_node`] for an element found by a document walk
pub fn serialize_element(found: ElementRef<'_>, expected_parent: &str) -> Fragment {
    if found.parent != Some(expected_parent) {
        return Fragment::default();
    }
    Fragment(substitute_placeholder(&render_element(found.element)))
}

fn render_element(element: &Element) -> String {
    let mut out = format!("<{}", element.name);
    for token in render_attributes(element) {
        out.push(' ');
        out.push_str(&token);
    }

    if !element.has_children() {
        out.push_str(" />");
        return out;
    }

    out.push_str(">\n");
    for child in &element.children {
        let fragment = serialize_node(child, Some(element.name.as_str()), &element.name);
        if !fragment.0.is_empty() {
            out.push_str(&fragment.0);
            out.push('\n');
        }
    }
    out.push_str(&format!("</{}>", element.name));
    out
}
