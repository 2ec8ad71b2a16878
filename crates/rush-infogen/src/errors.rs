use rush_config::ConfigError;
use rush_manifest::ManifestError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Failed to read component descriptors from {}: {message}", path.display())]
    Descriptors { path: PathBuf, message: String },

    #[error("Icon asset not found: {}", .0.display())]
    IconNotFound(PathBuf),

    #[error("Invalid pattern: {0}")]
    Pattern(String),
}

#[cfg(test)]
mod tests {
    use crate::errors::*;

    #[test]
    fn test_manifest_error_is_transparent() {
        let err = GenerateError::from(ManifestError::MissingPermissionName {
            tag: "uses-permission",
            attribute: "android:name",
        });
        assert_eq!(
            err.to_string(),
            "No android:name attribute found in <uses-permission>"
        );
    }

    #[test]
    fn test_icon_not_found_display() {
        let err = GenerateError::IconNotFound(PathBuf::from("/p/assets/icon.png"));
        assert_eq!(err.to_string(), "Icon asset not found: /p/assets/icon.png");
    }
}
