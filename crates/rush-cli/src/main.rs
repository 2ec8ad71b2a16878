use clap::{Parser, Subcommand};
use rush_cli::commands::{
    check::{self, CheckCommand},
    fragments::{self, FragmentsCommand},
    generate::{self, GenerateCommand},
};
use rush_cli::{init_logging, GlobalOpts};

#[derive(Parser)]
#[command(name = "rush-infogen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "App Inventor extension info file generator",
    long_about = "rush-infogen writes components.json and component_build_infos.json for an App Inventor extension project."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate both info files for a project
    Generate(GenerateCommand),
    /// Validate component descriptors without writing anything
    Check(CheckCommand),
    /// Show the manifest entries that would be shipped in the build info file
    Fragments(FragmentsCommand),
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let result = match &cli.command {
        Commands::Generate(cmd) => generate::handle_generate(cmd),
        Commands::Check(cmd) => check::handle_check(cmd),
        Commands::Fragments(cmd) => fragments::handle_fragments(cmd),
    };

    if let Err(e) = result {
        rush_logger::error(&format!("{:#}", e));
        if cli.global.verbosity_level() > 0 {
            rush_logger::show_log_path();
        }
        std::process::exit(1);
    }
}
