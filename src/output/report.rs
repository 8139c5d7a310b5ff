//! Per-directory text report.
//!
//! Layout of one report:
//!
//! ```text
//! Grading report for directory: week1
//!
//! File: a.py
//! ### Grading: 4/5
//! ### Grading: 1/1
//! Total for a.py: 5 / 6
//!
//! File: b.py
//! ### Grading: 2/2
//! Total for b.py: 2 / 2
//!
//! Grand total: 7 / 8
//! ```
//!
//! The grand total covers only the files directly inside the directory.

use crate::aggregation::{directories_with_files, files_in_directory};
use crate::config::OutputConfig;
use crate::core::{FileTable, ScoreTotals};
use crate::io::destinations::{DestinationFactory, OutputDestination};
use crate::output::base_name;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of writing all reports of one scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReportStats {
    pub written: usize,
    pub failed: usize,
}

pub struct ReportWriter {
    config: OutputConfig,
}

impl ReportWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Where the report for `dir` goes.
    pub fn report_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.config.report_file_name)
    }

    /// Render the report for the files located directly in `dir`.
    pub fn render(&self, dir: &Path, files: &FileTable) -> String {
        let mut out = String::new();
        let mut grand_total = ScoreTotals::ZERO;

        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", self.config.preamble_for(&base_name(dir)));
        let _ = writeln!(out);

        for result in files_in_directory(files, dir) {
            let name = result.file_name();
            let _ = writeln!(out, "File: {}", name);
            for comment in &result.comments {
                let _ = writeln!(out, "{}", comment);
            }
            let _ = writeln!(out, "Total for {}: {}", name, result.totals);
            let _ = writeln!(out);
            grand_total += result.totals;
        }

        let _ = writeln!(out, "Grand total: {}", grand_total);
        out
    }

    /// Write one report into every directory holding processed files.
    ///
    /// A failed write is logged and counted; the remaining directories are
    /// still written.
    pub fn write_reports<D: DestinationFactory>(
        &self,
        files: &FileTable,
        destinations: &D,
    ) -> ReportStats {
        let mut stats = ReportStats::default();

        for dir in directories_with_files(files) {
            let path = self.report_path(&dir);
            let destination = destinations.destination_for(&path);
            let content = self.render(&dir, files);

            match destination
                .write_str(&content)
                .and_then(|()| destination.flush())
            {
                Ok(()) => {
                    info!("Wrote report {}", destination.description());
                    stats.written += 1;
                }
                Err(e) => {
                    warn!("Could not write report to '{}': {}", path.display(), e);
                    stats.failed += 1;
                }
            }
        }

        stats
    }
}
