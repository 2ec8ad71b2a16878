use anyhow::Context;
use clap::Args;
use rush_manifest::{parse_file, SubtreeCollector};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct FragmentsCommand {
    /// Path to an AndroidManifest.xml
    pub manifest: PathBuf,
}

/// Print the entries that would go into the build info file, as JSON
pub fn handle_fragments(cmd: &FragmentsCommand) -> anyhow::Result<()> {
    let doc = parse_file(&cmd.manifest)
        .with_context(|| format!("Failed to parse {}", cmd.manifest.display()))?;
    let fragments = SubtreeCollector::default().collect(&doc)?;
    println!("{}", serde_json::to_string_pretty(&fragments)?);
    Ok(())
}
