//! `<uses-permission>` handling
//!
//! Permissions are not shipped as XML strings; the build info file only
//! carries the permission name.

use crate::attributes::substitute_placeholder;
use crate::document::Element;
use crate::errors::ManifestError;

pub const PERMISSION_TAG: &str = "uses-permission";
pub const PERMISSION_NAME_ATTRIBUTE: &str = "android:name";

/// The permission's fully qualified name, e.g. `android.permission.INTERNET`
///
/// A permission without `android:name` means the manifest is malformed and the
/// whole generation run has to stop.
pub fn extract_permission(element: &Element) -> Result<String, ManifestError> {
    element
        .attribute(PERMISSION_NAME_ATTRIBUTE)
        .map(substitute_placeholder)
        .ok_or(ManifestError::MissingPermissionName {
            tag: PERMISSION_TAG,
            attribute: PERMISSION_NAME_ATTRIBUTE,
        })
}
