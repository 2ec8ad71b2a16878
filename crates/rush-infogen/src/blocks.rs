//! Block descriptors and their `components.json` record form
//!
//! The descriptors are produced by the source metadata collector and arrive
//! already populated. App Inventor expects every flag as a string
//! (`"true"`/`"false"`), which the record rendering takes care of.

use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt;

/// Anything rendered into one of the block arrays of a component record
pub trait Block {
    fn name(&self) -> &str;

    /// The JSON object App Inventor reads for this block
    fn to_record(&self) -> Value;
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl ParameterDescriptor {
    fn to_record(&self) -> Value {
        json!({ "name": self.name, "type": self.type_name })
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default, alias = "parameters")]
    pub params: Vec<ParameterDescriptor>,
}

impl Block for EventDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn to_record(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "deprecated": self.deprecated.to_string(),
            "params": self.params.iter().map(ParameterDescriptor::to_record).collect::<Vec<_>>(),
        })
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default, alias = "parameters")]
    pub params: Vec<ParameterDescriptor>,
    /// `None` for functions without a return value
    #[serde(default)]
    pub return_type: Option<String>,
}

impl Block for FunctionDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn to_record(&self) -> Value {
        let mut record = json!({
            "name": self.name,
            "description": self.description,
            "deprecated": self.deprecated.to_string(),
            "params": self.params.iter().map(ParameterDescriptor::to_record).collect::<Vec<_>>(),
        });
        if let (Some(return_type), Some(obj)) = (&self.return_type, record.as_object_mut()) {
            obj.insert("returnType".to_string(), Value::from(return_type.as_str()));
        }
        record
    }
}

/// How a simple property can be used from the blocks editor
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyAccess {
    ReadOnly,
    WriteOnly,
    #[default]
    ReadWrite,
    Invisible,
}

impl fmt::Display for PropertyAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PropertyAccess::ReadOnly => "read-only",
            PropertyAccess::WriteOnly => "write-only",
            PropertyAccess::ReadWrite => "read-write",
            PropertyAccess::Invisible => "invisible",
        };
        f.write_str(s)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub rw: PropertyAccess,
    #[serde(default)]
    pub deprecated: bool,
}

impl Block for PropertyDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn to_record(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "type": self.type_name,
            "rw": self.rw.to_string(),
            "deprecated": self.deprecated.to_string(),
        })
    }
}

/// A property shown in the designer's property panel
///
/// Every designer property must be backed by a simple property of the same
/// name; see [`crate::component::ComponentDescriptor::validate`].
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DesignerPropertyDescriptor {
    pub name: String,
    #[serde(default)]
    pub default_value: String,
    #[serde(default = "default_editor_type")]
    pub editor_type: String,
    #[serde(default)]
    pub editor_args: Vec<String>,
    #[serde(default)]
    pub always_send: bool,
}

fn default_editor_type() -> String {
    "text".to_string()
}

impl Block for DesignerPropertyDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn to_record(&self) -> Value {
        json!({
            "name": self.name,
            "defaultValue": self.default_value,
            "editorType": self.editor_type,
            "editorArgs": self.editor_args,
            "alwaysSend": self.always_send.to_string(),
        })
    }
}

/// Render a list of blocks in order
pub fn to_records<B: Block>(blocks: &[B]) -> Vec<Value> {
    blocks.iter().map(Block::to_record).collect()
}
