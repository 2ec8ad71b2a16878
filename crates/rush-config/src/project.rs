use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lowest Android API level an extension may declare
pub const MIN_SDK_FLOOR: u32 = 7;

const METADATA_FILE_NAMES: &[&str] = &["rush.yml", "rush.yaml"];

/// Project metadata from `rush.yml`
///
/// Only the keys used by info file generation are modelled; any other keys in
/// the file are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    /// Human readable version of the extension (e.g. "1.2.0")
    pub version: String,

    #[serde(default)]
    pub homepage: String,

    #[serde(default)]
    pub license: String,

    /// Minimum Android API level required by the extension
    #[serde(default = "default_min_sdk")]
    pub min_sdk: u32,

    /// Extra asset files bundled with the extension
    #[serde(default)]
    pub assets: Vec<String>,
}

fn default_min_sdk() -> u32 {
    MIN_SDK_FLOOR
}

impl ProjectMetadata {
    /// Load `rush.yml` from the project root, falling back to `rush.yaml`
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let path = Self::resolve_path(project_root)
            .ok_or_else(|| ConfigError::MetadataNotFound(project_root.to_path_buf()))?;
        Self::load_from_path(&path)
    }

    /// Load project metadata from a specific file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading project metadata from {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// The minimum SDK, raised to the platform floor
    pub fn effective_min_sdk(&self) -> u32 {
        self.min_sdk.max(MIN_SDK_FLOOR)
    }

    /// Asset entries with surrounding whitespace removed
    pub fn trimmed_assets(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.trim().to_string()).collect()
    }

    fn resolve_path(project_root: &Path) -> Option<PathBuf> {
        METADATA_FILE_NAMES
            .iter()
            .map(|name| project_root.join(name))
            .find(|candidate| candidate.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
name: FooBar
version: '1.2'
homepage: https://example.com/foobar
license: MIT
min_sdk: 21
assets:
  - ' data.json '
  - model.tflite
"#;

    #[test]
    fn test_parse_metadata() {
        let meta = ProjectMetadata::from_yaml(SAMPLE);
        assert!(meta.is_ok_and(|m| m.version == "1.2"
            && m.homepage == "https://example.com/foobar"
            && m.license == "MIT"
            && m.min_sdk == 21
            && m.assets.len() == 2));
    }

    #[test]
    fn test_defaults_when_keys_missing() {
        let Ok(meta) = ProjectMetadata::from_yaml("version: '0.1'\n") else {
            assert!(false, "minimal metadata should parse");
            return;
        };
        assert_eq!(meta.min_sdk, MIN_SDK_FLOOR);
        assert!(meta.assets.is_empty());
        assert!(meta.homepage.is_empty());
    }

    #[test]
    fn test_missing_version_is_an_error() {
        let result = ProjectMetadata::from_yaml("license: MIT\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_effective_min_sdk_is_floored() {
        let Ok(mut meta) = ProjectMetadata::from_yaml("version: '1'\nmin_sdk: 4\n") else {
            assert!(false, "fixture should be valid");
            return;
        };
        assert_eq!(meta.effective_min_sdk(), 7);
        meta.min_sdk = 26;
        assert_eq!(meta.effective_min_sdk(), 26);
    }

    #[test]
    fn test_trimmed_assets() {
        let Ok(meta) = ProjectMetadata::from_yaml(SAMPLE) else {
            assert!(false, "fixture should be valid");
            return;
        };
        assert_eq!(meta.trimmed_assets(), vec!["data.json", "model.tflite"]);
    }

    #[test]
    fn test_load_falls_back_to_yaml_extension() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        if fs::write(dir.path().join("rush.yaml"), SAMPLE).is_err() {
            return;
        }

        let meta = ProjectMetadata::load(dir.path());
        assert!(meta.is_ok_and(|m| m.license == "MIT"));
    }

    #[test]
    fn test_load_prefers_yml() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        if fs::write(dir.path().join("rush.yml"), "version: 'yml'\n").is_err()
            || fs::write(dir.path().join("rush.yaml"), "version: 'yaml'\n").is_err()
        {
            return;
        }

        let meta = ProjectMetadata::load(dir.path());
        assert!(meta.is_ok_and(|m| m.version == "yml"));
    }

    #[test]
    fn test_load_missing_metadata() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let result = ProjectMetadata::load(dir.path());
        assert!(matches!(result, Err(ConfigError::MetadataNotFound(_))));
    }
}
