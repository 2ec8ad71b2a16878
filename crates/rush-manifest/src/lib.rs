//! AndroidManifest.xml fragment extraction
//!
//! The App Inventor build pipeline merges the manifest entries of every
//! extension into the final app manifest. It does not understand arbitrary
//! XML, so the entries are shipped in `component_build_infos.json` as plain
//! strings. This crate parses the extension's manifest into an owned tree and
//! rebuilds those strings:
//!
//! - [`document`]: the owned, ordered element tree
//! - [`parser`]: quick-xml reader producing a [`ManifestDocument`]
//! - [`attributes`]: `name = "value"` rendering and placeholder substitution
//! - [`fragment`]: recursive subtree serialization
//! - [`permission`]: `<uses-permission>` reduced to its bare name
//! - [`collector`]: the allow-listed walk that ties the above together

pub mod attributes;
pub mod collector;
pub mod document;
pub mod errors;
pub mod fragment;
pub mod parser;
pub mod permission;

pub use collector::{ManifestFragments, SubtreeCollector, APPLICATION_ELEMENT_TAGS};
pub use document::{Attribute, Element, ElementRef, ManifestDocument, Node};
pub use errors::ManifestError;
pub use fragment::Fragment;
pub use parser::{parse, parse_file};
