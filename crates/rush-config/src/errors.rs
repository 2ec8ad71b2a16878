use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading project configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse project metadata: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("No rush.yml or rush.yaml found in {}", .0.display())]
    MetadataNotFound(PathBuf),

    #[error("Project root not set: pass --project-root or set RUSH_PROJECT_ROOT")]
    ProjectRootUnset,
}

#[cfg(test)]
mod tests {
    use crate::errors::*;

    #[test]
    fn test_metadata_not_found_display() {
        let err = ConfigError::MetadataNotFound(PathBuf::from("/tmp/ext"));
        assert_eq!(err.to_string(), "No rush.yml or rush.yaml found in /tmp/ext");
    }
}
