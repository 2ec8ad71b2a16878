use crate::component::ComponentDescriptor;
use rush_config::ProjectMetadata;
use rush_manifest::{Fragment, ManifestFragments};
use serde::Serialize;
use tracing::debug;

/// One entry of `component_build_infos.json`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfoRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    pub android_min_sdk: Vec<u32>,
    pub assets: Vec<String>,
    /// Allow-listed `<application>` children. The build consumes them all
    /// through this one key, whatever their tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Fragment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<Fragment>>,
}

pub struct BuildInfoAssembler<'a> {
    metadata: &'a ProjectMetadata,
}

impl<'a> BuildInfoAssembler<'a> {
    pub fn new(metadata: &'a ProjectMetadata) -> Self {
        Self { metadata }
    }

    /// One record per component, in input order. The manifest data goes on
    /// the first record only and is dropped when there are no components.
    pub fn assemble(
        &self,
        components: &[ComponentDescriptor],
        fragments: ManifestFragments,
    ) -> Vec<BuildInfoRecord> {
        let min_sdk = self.metadata.effective_min_sdk();
        let assets = self.metadata.trimmed_assets();
        let mut manifest = Some(fragments);

        components
            .iter()
            .map(|component| {
                debug!("Assembling build info for {}", component.type_name);
                let mut record = BuildInfoRecord {
                    type_name: component.type_name.clone(),
                    android_min_sdk: vec![min_sdk],
                    assets: assets.clone(),
                    activities: None,
                    permissions: None,
                    queries: None,
                };
                if let Some(fragments) = manifest.take() {
                    record.activities = Some(fragments.application_elements);
                    record.permissions = Some(fragments.permissions);
                    record.queries = Some(fragments.queries);
                }
                record
            })
            .collect()
    }
}
