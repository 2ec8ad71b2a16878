//! Attribute rendering for manifest fragments

use crate::document::Element;

/// Gradle-style placeholder for the host app's package name
pub const APPLICATION_ID_MARKER: &str = "${applicationId}";

/// Placeholder understood by the App Inventor compiler
pub const PACKAGE_NAME_PLACEHOLDER: &str = "%packageName%";

/// Attributes from this namespace only guide the manifest merger
const TOOLS_NAMESPACE_PREFIX: &str = "tools:";

/// Replace every `${applicationId}` with `%packageName%`
pub fn substitute_placeholder(value: &str) -> String {
    value.replace(APPLICATION_ID_MARKER, PACKAGE_NAME_PLACEHOLDER)
}

pub fn is_tooling_attribute(name: &str) -> bool {
    name.contains(TOOLS_NAMESPACE_PREFIX)
}

/// Render an element's attributes as `name = "value"` tokens in source order
///
/// `tools:*` attributes are dropped. Values are emitted verbatim apart from
/// the application id substitution.
pub fn render_attributes(element: &Element) -> Vec<String> {
    element
        .attributes
        .iter()
        .filter(|attr| !is_tooling_attribute(&attr.name))
        .map(|attr| format!("{} = \"{}\"", attr.name, substitute_placeholder(&attr.value)))
        .collect()
}
