use crate::blocks::to_records;
use crate::component::ComponentDescriptor;
use crate::description::render_description;
use crate::errors::GenerateError;
use crate::icon::IconResolver;
use chrono::NaiveDate;
use rand::Rng;
use rush_config::ProjectMetadata;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

const CATEGORY_EXTENSION: &str = "EXTENSION";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the `version` field of component records
///
/// The value has no meaning to the consumer beyond being present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionStamp {
    /// A fresh value in `0..=999` for every record
    #[default]
    Random,
    Fixed(u32),
}

impl VersionStamp {
    pub fn next(&self) -> u32 {
        match self {
            VersionStamp::Random => rand::rng().random_range(0..=999),
            VersionStamp::Fixed(value) => *value,
        }
    }
}

/// One entry of `components.json`
///
/// Field order follows what the App Inventor component loader reads.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub external: String,
    pub category_string: String,
    pub show_on_palette: String,
    pub non_visible: String,
    pub name: String,
    pub help_string: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub help_url: String,
    pub license_name: String,
    pub version_name: String,
    pub version: String,
    pub android_min_sdk: u32,
    pub icon_name: String,
    pub date_built: String,
    pub events: Vec<Value>,
    pub methods: Vec<Value>,
    pub block_properties: Vec<Value>,
    pub properties: Vec<Value>,
}

pub struct ComponentRecordAssembler<'a> {
    metadata: &'a ProjectMetadata,
    icons: IconResolver<'a>,
    build_date: NaiveDate,
    version_stamp: VersionStamp,
}

impl<'a> ComponentRecordAssembler<'a> {
    pub fn new(
        metadata: &'a ProjectMetadata,
        icons: IconResolver<'a>,
        build_date: NaiveDate,
        version_stamp: VersionStamp,
    ) -> Self {
        Self {
            metadata,
            icons,
            build_date,
            version_stamp,
        }
    }

    /// One record per component, in input order
    pub fn assemble(
        &self,
        components: &[ComponentDescriptor],
    ) -> Result<Vec<ComponentRecord>, GenerateError> {
        components.iter().map(|c| self.record(c)).collect()
    }

    fn record(&self, component: &ComponentDescriptor) -> Result<ComponentRecord, GenerateError> {
        debug!("Assembling component record for {}", component.type_name);
        let flag = |value: bool| value.to_string();

        Ok(ComponentRecord {
            external: flag(true),
            category_string: CATEGORY_EXTENSION.to_string(),
            show_on_palette: flag(true),
            non_visible: flag(true),
            name: component.name.clone(),
            help_string: render_description(&component.description)?,
            type_name: component.type_name.clone(),
            help_url: self.metadata.homepage.clone(),
            license_name: self.metadata.license.clone(),
            version_name: self.metadata.version.clone(),
            version: self.version_stamp.next().to_string(),
            android_min_sdk: self.metadata.effective_min_sdk(),
            icon_name: self.icons.resolve(&component.icon)?,
            date_built: self.build_date.format(DATE_FORMAT).to_string(),
            events: to_records(&component.events),
            methods: to_records(&component.functions),
            block_properties: to_records(&component.properties),
            properties: to_records(&component.designer_properties),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{DesignerPropertyDescriptor, EventDescriptor, PropertyDescriptor};
    use rush_config::BuildLayout;
    use std::fs;
    use tempfile::TempDir;

    fn metadata() -> ProjectMetadata {
        ProjectMetadata {
            version: "2.1".to_string(),
            homepage: "https://example.com/foobar".to_string(),
            license: "MIT".to_string(),
            min_sdk: 21,
            assets: Vec::new(),
        }
    }

    fn component(icon: &str) -> ComponentDescriptor {
        ComponentDescriptor {
            name: "FooBar".to_string(),
            type_name: "com.example.FooBar".to_string(),
            description: "Does **foo**.".to_string(),
            icon: icon.to_string(),
            events: vec![EventDescriptor {
                name: "Ready".to_string(),
                description: String::new(),
                deprecated: false,
                params: Vec::new(),
            }],
            functions: Vec::new(),
            properties: vec![PropertyDescriptor {
                name: "Speed".to_string(),
                description: String::new(),
                type_name: "number".to_string(),
                rw: Default::default(),
                deprecated: false,
            }],
            designer_properties: vec![DesignerPropertyDescriptor {
                name: "Speed".to_string(),
                default_value: "1".to_string(),
                editor_type: "non_negative_integer".to_string(),
                editor_args: Vec::new(),
                always_send: false,
            }],
        }
    }

    fn build_date() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 3, 9)
    }

    #[test]
    fn test_record_fields() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let Some(date) = build_date() else {
            assert!(false, "fixture should be valid");
            return;
        };
        let layout = BuildLayout::new(dir.path());
        let meta = metadata();
        let assembler = ComponentRecordAssembler::new(
            &meta,
            IconResolver::new(&layout),
            date,
            VersionStamp::Fixed(42),
        );

        let Ok(records) = assembler.assemble(&[component("https://example.com/i.png")]) else {
            assert!(false, "assembly should succeed");
            return;
        };
        let record = &records[0];
        assert_eq!(record.external, "true");
        assert_eq!(record.category_string, "EXTENSION");
        assert_eq!(record.non_visible, "true");
        assert_eq!(record.help_string, "<p>Does <strong>foo</strong>.</p>\n");
        assert_eq!(record.help_url, "https://example.com/foobar");
        assert_eq!(record.version_name, "2.1");
        assert_eq!(record.version, "42");
        assert_eq!(record.android_min_sdk, 21);
        assert_eq!(record.icon_name, "https://example.com/i.png");
        assert_eq!(record.date_built, "2024-03-09");
        assert_eq!(record.events.len(), 1);
        assert_eq!(record.block_properties[0]["rw"], "read-write");
        assert_eq!(record.properties[0]["editorType"], "non_negative_integer");
    }

    #[test]
    fn test_serialized_key_order() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let Some(date) = build_date() else {
            assert!(false, "fixture should be valid");
            return;
        };
        let layout = BuildLayout::new(dir.path());
        let meta = metadata();
        let assembler = ComponentRecordAssembler::new(
            &meta,
            IconResolver::new(&layout),
            date,
            VersionStamp::Fixed(1),
        );
        let Ok(records) = assembler.assemble(&[component("https://example.com/i.png")]) else {
            assert!(false, "fixture should be valid");
            return;
        };
        let Ok(json) = serde_json::to_string(&records[0]) else {
            assert!(false, "fixture should be valid");
            return;
        };

        let keys = [
            "\"external\"",
            "\"categoryString\"",
            "\"showOnPalette\"",
            "\"nonVisible\"",
            "\"name\"",
            "\"helpString\"",
            "\"type\"",
            "\"helpUrl\"",
            "\"licenseName\"",
            "\"versionName\"",
            "\"version\"",
            "\"androidMinSdk\"",
            "\"iconName\"",
            "\"dateBuilt\"",
            "\"events\"",
            "\"methods\"",
            "\"blockProperties\"",
            "\"properties\"",
        ];
        let positions: Vec<Option<usize>> = keys.iter().map(|k| json.find(k)).collect();
        assert!(positions.iter().all(Option::is_some));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_local_icon_is_copied() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let Some(date) = build_date() else {
            assert!(false, "fixture should be valid");
            return;
        };
        let layout = BuildLayout::new(dir.path());
        if fs::create_dir_all(layout.assets_dir()).is_err()
            || fs::write(layout.assets_dir().join("icon.png"), "png").is_err()
        {
            return;
        }
        let meta = metadata();
        let assembler = ComponentRecordAssembler::new(
            &meta,
            IconResolver::new(&layout),
            date,
            VersionStamp::Fixed(0),
        );

        let records = assembler.assemble(&[component("icon.png")]);
        assert!(records.is_ok_and(|r| r[0].icon_name == "aiwebres/icon.png"));
        assert!(layout.icon_dir().join("icon.png").is_file());
    }

    #[test]
    fn test_random_version_in_range() {
        for _ in 0..64 {
            assert!(VersionStamp::Random.next() <= 999);
        }
        assert_eq!(VersionStamp::Fixed(7).next(), 7);
    }
}
