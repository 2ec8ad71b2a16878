//! Info file generation for App Inventor extensions
//!
//! Given the component descriptors of an extension project, this crate writes
//! the two files the App Inventor build consumes:
//!
//! - `components.json`: one description record per component
//! - `files/component_build_infos.json`: one build record per component, the
//!   first of which also carries the manifest entries, permissions and queries
//!   extracted by `rush-manifest`
//!
//! Both record sets are assembled in memory before either file is written, so
//! a malformed manifest never leaves a half-generated build directory.

pub mod blocks;
pub mod build_info;
pub mod component;
pub mod components;
pub mod description;
pub mod diagnostic;
pub mod errors;
pub mod generator;
pub mod icon;
pub mod links;
pub mod writer;

pub use blocks::{
    Block, DesignerPropertyDescriptor, EventDescriptor, FunctionDescriptor, ParameterDescriptor,
    PropertyAccess, PropertyDescriptor,
};
pub use build_info::{BuildInfoAssembler, BuildInfoRecord};
pub use component::{load_descriptors, validate_components, ComponentDescriptor};
pub use components::{ComponentRecord, ComponentRecordAssembler, VersionStamp};
pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use errors::GenerateError;
pub use generator::{GenerateOptions, GenerationReport, InfoFilesGenerator};
