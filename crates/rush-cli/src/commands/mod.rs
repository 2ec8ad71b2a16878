pub mod check;
pub mod fragments;
pub mod generate;

use rush_infogen::{Diagnostics, Severity};

/// Print diagnostics through the logger and return the number of errors
pub(crate) fn report_diagnostics(diagnostics: &Diagnostics) -> usize {
    for diagnostic in diagnostics {
        let text = match &diagnostic.location {
            Some(location) => format!("{}: {}", location, diagnostic.message),
            None => diagnostic.message.clone(),
        };
        match diagnostic.severity {
            Severity::Error => rush_logger::error(&text),
            Severity::Warning => rush_logger::warn(&text),
        }
    }
    diagnostics.error_count()
}
