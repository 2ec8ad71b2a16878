//! Path conventions of an extension project
//!
//! ```text
//! <root>/
//! ├── rush.yml
//! ├── assets/                      icon and asset sources
//! ├── src/AndroidManifest.xml      the project's own manifest
//! └── .rush/build/
//!     ├── files/AndroidManifest.xml  merged manifest (written by the CLI)
//!     └── raw/
//!         ├── components.json
//!         ├── aiwebres/            copied icons
//!         └── files/component_build_infos.json
//! ```

use crate::errors::ConfigError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable holding the project root when no flag is given
pub const PROJECT_ROOT_ENV: &str = "RUSH_PROJECT_ROOT";

/// Directory (relative to the raw build dir) that receives copied icons
pub const ICON_RESOURCE_DIR: &str = "aiwebres";

const COMPONENTS_JSON: &str = "components.json";
const BUILD_INFOS_JSON: &str = "component_build_infos.json";
const MANIFEST_FILE: &str = "AndroidManifest.xml";

/// Resolved paths for a single generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayout {
    project_root: PathBuf,
}

impl BuildLayout {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Use the explicit root if given, otherwise `RUSH_PROJECT_ROOT`
    pub fn resolve(explicit_root: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(root) = explicit_root {
            return Ok(Self::new(root));
        }
        env::var_os(PROJECT_ROOT_ENV)
            .filter(|v| !v.is_empty())
            .map(Self::new)
            .ok_or(ConfigError::ProjectRootUnset)
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.project_root.join("assets")
    }

    pub fn build_dir(&self) -> PathBuf {
        self.project_root.join(".rush").join("build")
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.build_dir().join("raw")
    }

    /// Create the raw build directory if it does not exist yet
    pub fn ensure_raw_dir(&self) -> Result<PathBuf, ConfigError> {
        let raw = self.raw_dir();
        fs::create_dir_all(&raw)?;
        Ok(raw)
    }

    pub fn icon_dir(&self) -> PathBuf {
        self.raw_dir().join(ICON_RESOURCE_DIR)
    }

    pub fn components_json(&self) -> PathBuf {
        self.raw_dir().join(COMPONENTS_JSON)
    }

    pub fn build_infos_json(&self) -> PathBuf {
        self.raw_dir().join("files").join(BUILD_INFOS_JSON)
    }

    /// Manifest produced by merging the manifests of all AAR dependencies
    pub fn merged_manifest(&self) -> PathBuf {
        self.build_dir().join("files").join(MANIFEST_FILE)
    }

    pub fn source_manifest(&self) -> PathBuf {
        self.project_root.join("src").join(MANIFEST_FILE)
    }

    /// The merged manifest when present, otherwise the project's own
    pub fn manifest_path(&self) -> PathBuf {
        let merged = self.merged_manifest();
        if merged.is_file() {
            debug!("Using merged manifest at {:?}", merged);
            merged
        } else {
            self.source_manifest()
        }
    }
}
