//! Project configuration for rush-infogen
//!
//! This crate loads the project metadata file (`rush.yml`) and resolves the
//! on-disk layout of an extension project: where the manifest lives, where the
//! raw build output goes and where icon assets are read from.

pub mod errors;
pub mod layout;
pub mod project;

pub use errors::ConfigError;
pub use layout::BuildLayout;
pub use project::{ProjectMetadata, MIN_SDK_FLOOR};
