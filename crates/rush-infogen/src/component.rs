use crate::blocks::{
    Block, DesignerPropertyDescriptor, EventDescriptor, FunctionDescriptor, PropertyDescriptor,
};
use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::errors::GenerateError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Everything known about one extension component
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// Simple name as shown in the palette
    pub name: String,
    /// Fully qualified class name
    #[serde(rename = "type")]
    pub type_name: String,
    /// Markdown description
    #[serde(default)]
    pub description: String,
    /// Either a URL or a file name under the project's `assets/`
    pub icon: String,
    #[serde(default)]
    pub events: Vec<EventDescriptor>,
    #[serde(default, alias = "methods")]
    pub functions: Vec<FunctionDescriptor>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    pub designer_properties: Vec<DesignerPropertyDescriptor>,
}

impl ComponentDescriptor {
    /// Check the descriptor before any record is built
    ///
    /// A designer property without a simple property of the same name is an
    /// error. Blocks of one kind sharing a name get a warning.
    pub fn validate(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        for designer in &self.designer_properties {
            let has_setter = self.properties.iter().any(|p| p.name == designer.name);
            if !has_setter {
                diagnostics.push(
                    Diagnostic::error(format!(
                        "Unable to find corresponding simple property for designer property '{}'",
                        designer.name
                    ))
                    .at(self.location(&designer.name)),
                );
            }
        }

        self.check_duplicates("event", &self.events, &mut diagnostics);
        self.check_duplicates("method", &self.functions, &mut diagnostics);
        self.check_duplicates("property", &self.properties, &mut diagnostics);
        self.check_duplicates("designer property", &self.designer_properties, &mut diagnostics);
        diagnostics
    }

    fn check_duplicates<B: Block>(&self, kind: &str, blocks: &[B], diagnostics: &mut Diagnostics) {
        let mut seen = HashSet::new();
        for block in blocks {
            if !seen.insert(block.name()) {
                diagnostics.push(
                    Diagnostic::warning(format!("Duplicate {} '{}'", kind, block.name()))
                        .at(self.location(block.name())),
                );
            }
        }
    }

    fn location(&self, member: &str) -> String {
        format!("{}.{}", self.name, member)
    }
}

/// Validate every component, in input order
pub fn validate_components(components: &[ComponentDescriptor]) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    for component in components {
        diagnostics.extend(component.validate());
    }
    diagnostics
}

/// Read the JSON array of component descriptors written by the metadata
/// collector
pub fn load_descriptors(path: &Path) -> Result<Vec<ComponentDescriptor>, GenerateError> {
    debug!("Reading component descriptors from {:?}", path);
    let content = fs::read_to_string(path).map_err(|e| GenerateError::Descriptors {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| GenerateError::Descriptors {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DESCRIPTORS: &str = r#"[
  {
    "name": "FooBar",
    "type": "com.example.foobar.FooBar",
    "description": "A **foo** bar.",
    "icon": "icon.png",
    "events": [{"name": "Ready"}],
    "methods": [{"name": "Start", "params": [{"name": "delay", "type": "number"}]}],
    "properties": [{"name": "Speed", "type": "number"}],
    "designerProperties": [
      {"name": "Speed", "defaultValue": "1", "editorType": "non_negative_integer"},
      {"name": "Color", "defaultValue": "&HFF000000", "editorType": "color"}
    ]
  },
  {
    "name": "Baz",
    "type": "com.example.baz.Baz",
    "icon": "https://example.com/baz.png"
  }
]"#;

    fn parsed() -> Vec<ComponentDescriptor> {
        serde_json::from_str(DESCRIPTORS).unwrap_or_default()
    }

    #[test]
    fn test_parse_descriptors() {
        let components = parsed();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].type_name, "com.example.foobar.FooBar");
        assert_eq!(components[0].functions.len(), 1);
        assert_eq!(components[0].designer_properties.len(), 2);
        assert!(components[1].events.is_empty());
        assert!(components[1].description.is_empty());
    }

    #[test]
    fn test_designer_property_without_setter_is_reported() {
        let components = parsed();
        let diagnostics = validate_components(&components);
        assert_eq!(diagnostics.error_count(), 1);
        let Some(diag) = diagnostics.errors().next() else {
            assert!(false, "fixture should be valid");
            return;
        };
        assert!(diag.message.contains("'Color'"));
        assert_eq!(diag.location.as_deref(), Some("FooBar.Color"));
    }

    #[test]
    fn test_every_component_is_checked() {
        let mut components = parsed();
        let Some(mut second) = components.first().cloned() else {
            assert!(false, "fixture should be valid");
            return;
        };
        second.name = "Second".to_string();
        components.push(second);

        let diagnostics = validate_components(&components);
        assert_eq!(diagnostics.error_count(), 2);
    }

    #[test]
    fn test_duplicate_block_names_are_warnings() {
        let mut components = parsed();
        let Some(foobar) = components.first_mut() else {
            assert!(false, "fixture should be valid");
            return;
        };
        let Some(method) = foobar.functions.first().cloned() else {
            assert!(false, "fixture should be valid");
            return;
        };
        foobar.functions.push(method.clone());

        let diagnostics = validate_components(&components);
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(diagnostics.len(), 2);
        let warning = diagnostics.iter().find(|d| !d.severity.is_error());
        assert!(warning.is_some_and(|d| {
            d.message == format!("Duplicate method '{}'", method.name)
                && d.location == Some(format!("FooBar.{}", method.name))
        }));
    }

    #[test]
    fn test_load_descriptors_from_file() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let path = dir.path().join("components.descriptor.json");
        if fs::write(&path, DESCRIPTORS).is_err() {
            return;
        }
        let loaded = load_descriptors(&path);
        assert!(loaded.is_ok_and(|c| c.len() == 2 && c[1].name == "Baz"));
    }

    #[test]
    fn test_load_descriptors_reports_path() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let path = dir.path().join("broken.json");
        if fs::write(&path, "[{\"name\": 1}]").is_err() {
            return;
        }
        let result = load_descriptors(&path);
        assert!(matches!(result, Err(GenerateError::Descriptors { .. })));
    }
}
