//! One generation run, from descriptors to the two info files

use crate::build_info::{BuildInfoAssembler, BuildInfoRecord};
use crate::component::{validate_components, ComponentDescriptor};
use crate::components::{ComponentRecord, ComponentRecordAssembler, VersionStamp};
use crate::diagnostic::Diagnostics;
use crate::errors::GenerateError;
use crate::icon::IconResolver;
use crate::writer::{commit_all, StagedJson};
use chrono::{Local, NaiveDate};
use rush_config::{BuildLayout, ProjectMetadata};
use rush_manifest::{parse_file, ManifestFragments, SubtreeCollector};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub version_stamp: VersionStamp,
    /// Date written to `dateBuilt`
    pub build_date: NaiveDate,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            version_stamp: VersionStamp::Random,
            build_date: Local::now().date_naive(),
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Validation findings. Errors here mean the build should fail even
    /// though the files were written.
    pub diagnostics: Diagnostics,
    pub components_json: PathBuf,
    pub build_infos_json: PathBuf,
    pub component_count: usize,
    pub application_element_count: usize,
    pub permission_count: usize,
    pub query_count: usize,
}

pub struct InfoFilesGenerator {
    layout: BuildLayout,
    components: Vec<ComponentDescriptor>,
    options: GenerateOptions,
}

impl InfoFilesGenerator {
    pub fn new(layout: BuildLayout, components: Vec<ComponentDescriptor>) -> Self {
        Self {
            layout,
            components,
            options: GenerateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn layout(&self) -> &BuildLayout {
        &self.layout
    }

    pub fn components(&self) -> &[ComponentDescriptor] {
        &self.components
    }

    pub fn validate(&self) -> Diagnostics {
        validate_components(&self.components)
    }

    pub fn assemble_component_records(
        &self,
        metadata: &ProjectMetadata,
    ) -> Result<Vec<ComponentRecord>, GenerateError> {
        ComponentRecordAssembler::new(
            metadata,
            IconResolver::new(&self.layout),
            self.options.build_date,
            self.options.version_stamp,
        )
        .assemble(&self.components)
    }

    pub fn assemble_build_infos(
        &self,
        metadata: &ProjectMetadata,
        fragments: ManifestFragments,
    ) -> Vec<BuildInfoRecord> {
        BuildInfoAssembler::new(metadata).assemble(&self.components, fragments)
    }

    /// Parse the manifest and collect its fragments
    pub fn collect_manifest(&self) -> Result<ManifestFragments, GenerateError> {
        let manifest = self.layout.manifest_path();
        debug!("Reading manifest {:?}", manifest);
        let doc = parse_file(&manifest)?;
        Ok(SubtreeCollector::default().collect(&doc)?)
    }

    /// Run validation, assemble both record sets, then write both files
    ///
    /// Nothing is written unless every step before the writes succeeded, and
    /// neither file is replaced until both have been staged.
    pub fn run(&self) -> Result<GenerationReport, GenerateError> {
        let diagnostics = self.validate();
        for diagnostic in &diagnostics {
            debug!("{}", diagnostic);
        }
        if diagnostics.has_errors() {
            warn!(
                "{} validation error(s); generating anyway",
                diagnostics.error_count()
            );
        }

        let metadata = ProjectMetadata::load(self.layout.project_root())?;
        self.layout.ensure_raw_dir()?;

        let fragments = self.collect_manifest()?;
        let application_element_count = fragments.application_elements.len();
        let permission_count = fragments.permissions.len();
        let query_count = fragments.queries.len();

        let component_records = self.assemble_component_records(&metadata)?;
        let build_infos = self.assemble_build_infos(&metadata, fragments);

        let components_json = self.layout.components_json();
        let build_infos_json = self.layout.build_infos_json();
        let staged = [
            StagedJson::stage(&component_records, &components_json)?,
            StagedJson::stage(&build_infos, &build_infos_json)?,
        ];
        commit_all(staged)?;

        info!(
            "Generated info files for {} component(s)",
            component_records.len()
        );

        Ok(GenerationReport {
            diagnostics,
            components_json,
            build_infos_json,
            component_count: component_records.len(),
            application_element_count,
            permission_count,
            query_count,
        })
    }
}
