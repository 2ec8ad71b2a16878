//! Allow-listed extraction of manifest entries
//!
//! Three sequences are collected from a manifest:
//! - children of `<application>` whose tag is on the allow-list
//! - names of every `<uses-permission>`
//! - children of every `<queries>` element

use crate::document::{ManifestDocument, Node};
use crate::errors::ManifestError;
use crate::fragment::{serialize_element, serialize_node, Fragment};
use crate::permission::{extract_permission, PERMISSION_TAG};
use serde::Serialize;
use tracing::debug;

pub const APPLICATION_TAG: &str = "application";
pub const QUERIES_TAG: &str = "queries";

/// Tags under `<application>` that are forwarded to the final manifest
pub const APPLICATION_ELEMENT_TAGS: &[&str] = &[
    "activity",
    "activity-alias",
    "meta-data",
    "provider",
    "profileable",
    "service",
    "receiver",
    "uses-library",
    "uses-native-library",
];

/// Everything the build info file needs from a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManifestFragments {
    pub application_elements: Vec<Fragment>,
    pub permissions: Vec<String>,
    pub queries: Vec<Fragment>,
}

/// Walks a manifest and collects [`ManifestFragments`]
#[derive(Debug, Clone, Copy)]
pub struct SubtreeCollector<'a> {
    allow_list: &'a [&'a str],
}

impl Default for SubtreeCollector<'static> {
    fn default() -> Self {
        Self {
            allow_list: APPLICATION_ELEMENT_TAGS,
        }
    }
}

impl<'a> SubtreeCollector<'a> {
    pub fn with_allow_list(allow_list: &'a [&'a str]) -> Self {
        Self { allow_list }
    }

    /// Collect all three sequences; fails on the first malformed permission
    pub fn collect(&self, doc: &ManifestDocument) -> Result<ManifestFragments, ManifestError> {
        let fragments = ManifestFragments {
            application_elements: self.application_elements(doc),
            permissions: self.permissions(doc)?,
            queries: self.queries(doc)?,
        };
        debug!(
            "Collected {} application elements, {} permissions, {} queries",
            fragments.application_elements.len(),
            fragments.permissions.len(),
            fragments.queries.len()
        );
        Ok(fragments)
    }

    /// Allow-listed `<application>` children, grouped by allow-list order and
    /// then by document order
    pub fn application_elements(&self, doc: &ManifestDocument) -> Vec<Fragment> {
        self.allow_list
            .iter()
            .flat_map(|tag| doc.elements_by_tag(tag))
            .map(|found| serialize_element(found, APPLICATION_TAG))
            .filter(|fragment| !fragment.is_blank())
            .collect()
    }

    /// Permission names of every `<uses-permission>`, at any depth
    pub fn permissions(&self, doc: &ManifestDocument) -> Result<Vec<String>, ManifestError> {
        let mut permissions = Vec::new();
        for found in doc.elements_by_tag(PERMISSION_TAG) {
            let permission = extract_permission(found.element)?;
            if !permission.trim().is_empty() {
                permissions.push(permission);
            }
        }
        Ok(permissions)
    }

    /// Children of every `<queries>` element
    ///
    /// A `<uses-permission>` found there is reduced to its name, the same
    /// way [`Self::permissions`] reports it.
    pub fn queries(&self, doc: &ManifestDocument) -> Result<Vec<Fragment>, ManifestError> {
        let mut queries = Vec::new();
        for found in doc.elements_by_tag(QUERIES_TAG) {
            let name = found.element.name.as_str();
            for child in &found.element.children {
                let fragment = match child {
                    Node::Element(element) if element.name == PERMISSION_TAG => {
                        Fragment::from(extract_permission(element)?.as_str())
                    }
                    _ => serialize_node(child, Some(name), name),
                };
                if !fragment.is_blank() {
                    queries.push(fragment);
                }
            }
        }
        Ok(queries)
    }
}
