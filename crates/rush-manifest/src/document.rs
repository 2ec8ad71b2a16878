//! Owned representation of a parsed manifest
//!
//! Nodes never point back at their parent. Walks that need the parent's tag
//! name carry it alongside the element in an [`ElementRef`].

use smallvec::SmallVec;

/// A parsed manifest document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDocument {
    root: Element,
}

/// A node in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Character data, already unescaped. CDATA sections land here too.
    Text(String),
    Comment(String),
}

/// An element with its attributes and children in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Qualified tag name as written (e.g. `meta-data`)
    pub name: String,
    pub attributes: SmallVec<[Attribute; 4]>,
    pub children: Vec<Node>,
}

/// A qualified attribute, e.g. `android:name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// An element together with the tag name of the element that contains it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementRef<'a> {
    pub element: &'a Element,
    /// `None` for the document root
    pub parent: Option<&'a str>,
}

impl ManifestDocument {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Every element named `tag`, in document (pre-order) order
    pub fn elements_by_tag<'a>(&'a self, tag: &str) -> Vec<ElementRef<'a>> {
        let mut found = Vec::new();
        collect_by_tag(&self.root, None, tag, &mut found);
        found
    }
}

fn collect_by_tag<'a>(
    element: &'a Element,
    parent: Option<&'a str>,
    tag: &str,
    found: &mut Vec<ElementRef<'a>>,
) {
    if element.name == tag {
        found.push(ElementRef { element, parent });
    }
    for child in element.child_elements() {
        collect_by_tag(child, Some(element.name.as_str()), tag, found);
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) | Node::Comment(_) => None,
        }
    }
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ManifestDocument {
        let application = Element::new("application")
            .with_child(
                Element::new("service")
                    .with_child(Element::new("meta-data").with_attribute("a", "1").into())
                    .into(),
            )
            .with_child(Element::new("meta-data").with_attribute("a", "2").into());
        ManifestDocument::new(Element::new("manifest").with_child(application.into()))
    }

    #[test]
    fn test_elements_by_tag_in_document_order() {
        let doc = sample();
        let found = doc.elements_by_tag("meta-data");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].element.attribute("a"), Some("1"));
        assert_eq!(found[0].parent, Some("service"));
        assert_eq!(found[1].element.attribute("a"), Some("2"));
        assert_eq!(found[1].parent, Some("application"));
    }

    #[test]
    fn test_root_has_no_parent() {
        let doc = sample();
        let found = doc.elements_by_tag("manifest");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].parent, None);
    }

    #[test]
    fn test_child_elements_skip_text() {
        let el = Element::new("queries")
            .with_child(Node::Text("\n  ".to_string()))
            .with_child(Element::new("package").into());
        assert!(el.has_children());
        assert_eq!(el.child_elements().count(), 1);
    }
}
