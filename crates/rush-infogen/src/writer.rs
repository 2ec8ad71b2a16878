//! Atomic JSON output
//!
//! A run stages every output file next to its destination first and only
//! renames once all of them are on disk, so a failure while writing leaves
//! the previous outputs in place.

use crate::errors::GenerateError;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Serialized JSON sitting in a sibling `.tmp` file, not yet moved into place
///
/// Dropping it without [`StagedJson::commit`] removes the temporary file.
#[derive(Debug)]
#[must_use]
pub struct StagedJson {
    temp_path: PathBuf,
    path: PathBuf,
    committed: bool,
}

impl StagedJson {
    /// Serialize `value` as compact JSON into the temporary file for `path`
    ///
    /// The parent directory is created if needed.
    pub fn stage<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<Self, GenerateError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string(value)?;

        let staged = Self {
            temp_path: path.with_extension("json.tmp"),
            path: path.to_path_buf(),
            committed: false,
        };
        let file = fs::File::create(&staged.temp_path)?;
        let mut writer = std::io::BufWriter::with_capacity(64 * 1024, file);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        debug!("Staged {:?}", staged.temp_path);
        Ok(staged)
    }

    /// Move the staged content to its destination
    pub fn commit(mut self) -> Result<(), GenerateError> {
        fs::rename(&self.temp_path, &self.path)?;
        self.committed = true;
        info!("Wrote {:?}", self.path);
        Ok(())
    }
}

impl Drop for StagedJson {
    fn drop(&mut self) {
        if !self.committed && fs::remove_file(&self.temp_path).is_ok() {
            debug!("Discarded {:?}", self.temp_path);
        }
    }
}

/// Commit staged files in order, discarding the rest if a rename fails
pub fn commit_all(staged: impl IntoIterator<Item = StagedJson>) -> Result<(), GenerateError> {
    for file in staged {
        file.commit()?;
    }
    Ok(())
}
