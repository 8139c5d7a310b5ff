//! Rendering and writing of scan results.
//!
//! - [`report`]: one text report per directory, flat totals
//! - [`summary`]: one CSV at the scan root, roll-up totals
//! - [`console`]: totals and per-file breakdown printed for the user

pub mod console;
pub mod report;
pub mod summary;

pub use console::{format_breakdown, format_directory_totals, should_use_colors};
pub use report::{ReportStats, ReportWriter};
pub use summary::{summary_label, SummaryRow, SummaryWriter};

use std::path::Path;

/// Last component of `path`, used to name a directory in artifacts.
///
/// Paths like `.` have no file name of their own; those are resolved
/// against the file system before falling back to the path as given.
pub fn base_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    path.canonicalize()
        .ok()
        .and_then(|resolved| resolved.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| path.display().to_string())
}
