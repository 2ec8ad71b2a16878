//! quick-xml event reader that builds a [`ManifestDocument`]

use crate::document::{Attribute, Element, ManifestDocument, Node};
use crate::errors::ManifestError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse manifest XML from a file
pub fn parse_file(path: &Path) -> Result<ManifestDocument, ManifestError> {
    debug!("Parsing manifest {:?}", path);
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Parse manifest XML from a string
///
/// Text, CDATA and comments are kept in the tree, so an element written as
/// `<a>\n</a>` has one (whitespace) child while `<a></a>` has none.
pub fn parse(content: &str) -> Result<ManifestDocument, ManifestError> {
    let mut reader = Reader::from_str(content);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => open.push(element_from_start(&start)?),
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                close_element(&mut open, &mut root, element)?;
            }
            Event::End(end) => {
                let Some(element) = open.pop() else {
                    return Err(ManifestError::Malformed(format!(
                        "closing tag </{}> without matching opening tag",
                        String::from_utf8_lossy(end.name().as_ref())
                    )));
                };
                close_element(&mut open, &mut root, element)?;
            }
            Event::Text(text) => {
                if let Some(parent) = open.last_mut() {
                    parent.children.push(Node::Text(text.unescape()?.into_owned()));
                }
            }
            Event::CData(data) => {
                if let Some(parent) = open.last_mut() {
                    let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    parent.children.push(Node::Text(text));
                }
            }
            Event::Comment(comment) => {
                if let Some(parent) = open.last_mut() {
                    let text = String::from_utf8_lossy(&comment).into_owned();
                    parent.children.push(Node::Comment(text));
                }
            }
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(ManifestError::Malformed(format!(
            "element <{}> is never closed",
            unclosed.name
        )));
    }

    root.map(ManifestDocument::new)
        .ok_or_else(|| ManifestError::Malformed("document has no root element".to_string()))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, ManifestError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    for attr in start.attributes() {
        let attr = attr?;
        element.attributes.push(Attribute {
            name: String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            value: attr.unescape_value()?.into_owned(),
        });
    }
    Ok(element)
}

fn close_element(
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), ManifestError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(Node::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(ManifestError::Malformed(format!(
            "second root element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}
