//! rush-infogen command line front end
//!
//! Exposes the command handlers so they can be exercised from tests.

pub mod commands;
pub mod common;

pub use common::GlobalOpts;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "rush_infogen=warn,rush_manifest=warn,rush_config=warn";

/// Install the console logger and the tracing subscriber
///
/// `RUST_LOG` wins over the verbosity flags.
pub fn init_logging(opts: &GlobalOpts) {
    let verbosity = opts.verbosity_level();
    if let Err(e) = rush_logger::init_with_verbosity(verbosity) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    let fallback = if verbosity == 0 {
        DEFAULT_FILTER
    } else {
        rush_logger::verbosity_to_filter()
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
