use quick_xml::events::attributes::AttrError;
use std::io;
use thiserror::Error;

/// Errors raised while reading a manifest or extracting fragments from it
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse manifest: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid attribute in manifest: {0}")]
    Attribute(#[from] AttrError),

    #[error("Malformed manifest: {0}")]
    Malformed(String),

    /// A `<uses-permission>` without `android:name`; generation must abort
    #[error("No {attribute} attribute found in <{tag}>")]
    MissingPermissionName {
        tag: &'static str,
        attribute: &'static str,
    },
}
