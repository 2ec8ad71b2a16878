use super::report_diagnostics;
use anyhow::{bail, Context};
use clap::Args;
use rush_infogen::{load_descriptors, validate_components};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    /// Component descriptor JSON produced by the metadata collector
    #[arg(long, value_name = "FILE")]
    pub descriptors: PathBuf,
}

/// Validate descriptors without touching the build directory
pub fn handle_check(cmd: &CheckCommand) -> anyhow::Result<()> {
    let components = load_descriptors(&cmd.descriptors)
        .with_context(|| format!("Failed to load {}", cmd.descriptors.display()))?;

    let diagnostics = validate_components(&components);
    let errors = report_diagnostics(&diagnostics);
    if errors > 0 {
        bail!("{} error(s) in {} component(s)", errors, components.len());
    }

    rush_logger::success(&format!(
        "No problems found in {} component(s)",
        components.len()
    ));
    Ok(())
}
