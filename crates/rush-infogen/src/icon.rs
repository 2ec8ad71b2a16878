use crate::errors::GenerateError;
use crate::links::is_url;
use rush_config::layout::ICON_RESOURCE_DIR;
use rush_config::BuildLayout;
use std::fs;
use tracing::debug;

/// Turns a component's icon reference into the `iconName` value
#[derive(Debug, Clone, Copy)]
pub struct IconResolver<'a> {
    layout: &'a BuildLayout,
}

impl<'a> IconResolver<'a> {
    pub fn new(layout: &'a BuildLayout) -> Self {
        Self { layout }
    }

    /// URLs are returned untouched. Anything else names a file under
    /// `assets/`, which is copied to `<raw>/aiwebres/` (replacing any previous
    /// copy) and referenced as `aiwebres/<icon>`.
    pub fn resolve(&self, icon: &str) -> Result<String, GenerateError> {
        if is_url(icon)? {
            return Ok(icon.to_string());
        }

        let source = self.layout.assets_dir().join(icon);
        if !source.is_file() {
            return Err(GenerateError::IconNotFound(source));
        }

        let destination = self.layout.icon_dir().join(icon);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        if destination.exists() {
            fs::remove_file(&destination)?;
        }
        fs::copy(&source, &destination)?;
        debug!("Copied icon {:?} to {:?}", source, destination);

        Ok(format!("{}/{}", ICON_RESOURCE_DIR, icon))
    }
}
