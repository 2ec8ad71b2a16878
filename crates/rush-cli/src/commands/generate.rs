use super::report_diagnostics;
use anyhow::{bail, Context};
use clap::Args;
use colored::Colorize;
use rush_config::layout::PROJECT_ROOT_ENV;
use rush_config::BuildLayout;
use rush_infogen::{load_descriptors, GenerateOptions, InfoFilesGenerator, VersionStamp};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
    /// Component descriptor JSON produced by the metadata collector
    #[arg(long, value_name = "FILE")]
    pub descriptors: PathBuf,

    /// Extension project root
    #[arg(long, value_name = "DIR", env = PROJECT_ROOT_ENV)]
    pub project_root: Option<PathBuf>,

    /// Use a fixed value for the `version` field instead of a random one
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(0..=999))]
    pub version_stamp: Option<u32>,
}

pub fn handle_generate(cmd: &GenerateCommand) -> anyhow::Result<()> {
    let layout = BuildLayout::resolve(cmd.project_root.as_deref())?;
    rush_logger::step(&format!("Reading {}", cmd.descriptors.display()));
    let components = load_descriptors(&cmd.descriptors)
        .with_context(|| format!("Failed to load {}", cmd.descriptors.display()))?;

    let mut options = GenerateOptions::default();
    if let Some(stamp) = cmd.version_stamp {
        options.version_stamp = VersionStamp::Fixed(stamp);
    }

    rush_logger::debug(&format!(
        "Generating info files for {} in {}",
        components.len(),
        layout.project_root().display()
    ));
    rush_logger::spinner_start("Generating info files...");

    let report = match InfoFilesGenerator::new(layout, components)
        .with_options(options)
        .run()
    {
        Ok(report) => report,
        Err(e) => {
            rush_logger::spinner_error("Generation failed");
            return Err(e.into());
        }
    };
    rush_logger::spinner_stop();

    let errors = report_diagnostics(&report.diagnostics);

    println!(
        "{} {}",
        "Wrote".green().bold(),
        report.components_json.display()
    );
    println!(
        "{} {}",
        "Wrote".green().bold(),
        report.build_infos_json.display()
    );
    rush_logger::info(&format!(
        "{} application element(s), {} permission(s), {} query entries",
        report.application_element_count, report.permission_count, report.query_count
    ));

    if errors > 0 {
        bail!("{} validation error(s)", errors);
    }

    rush_logger::success(&format!(
        "Generated info files for {} component(s)",
        report.component_count
    ));
    Ok(())
}
