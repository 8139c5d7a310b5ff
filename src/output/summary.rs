//! Whole-tree CSV summary.
//!
//! One row per visited directory with roll-up totals. Rows are labeled by
//! the directory's path relative to the scan root (`/`-separated); the root
//! row carries the root's own name.

use crate::aggregation::rollup_totals;
use crate::core::{FileTable, ScoreTotals};
use crate::errors::{Error, Result};
use crate::io::destinations::OutputDestination;
use crate::output::base_name;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Header of the summary file, kept in sync with [`SummaryRow`]'s fields.
pub const SUMMARY_HEADER: [&str; 3] = ["Directory", "TotalObtained", "TotalPossible"];

/// One CSV record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Directory")]
    pub directory: String,
    #[serde(rename = "TotalObtained")]
    pub total_obtained: u64,
    #[serde(rename = "TotalPossible")]
    pub total_possible: u64,
}

impl SummaryRow {
    pub fn new(directory: impl Into<String>, totals: ScoreTotals) -> Self {
        Self {
            directory: directory.into(),
            total_obtained: totals.obtained,
            total_possible: totals.possible,
        }
    }
}

/// Label of `dir` inside a summary for a scan of `root`.
pub fn summary_label(root: &Path, dir: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => base_name(root),
        Ok(relative) => relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => dir.display().to_string(),
    }
}

pub struct SummaryWriter {
    file_name: String,
}

impl SummaryWriter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Where the summary for a scan of `root` goes.
    pub fn summary_path(&self, root: &Path) -> PathBuf {
        root.join(&self.file_name)
    }

    /// One row per visited directory, in visit order.
    pub fn rows(&self, root: &Path, visited: &[PathBuf], files: &FileTable) -> Vec<SummaryRow> {
        let totals = rollup_totals(root, visited, files);
        visited
            .iter()
            .map(|dir| {
                let dir_totals = totals.get(dir).copied().unwrap_or_default();
                SummaryRow::new(summary_label(root, dir), dir_totals)
            })
            .collect()
    }

    /// Render the summary CSV, header included even when there are no rows.
    pub fn render(&self, root: &Path, visited: &[PathBuf], files: &FileTable) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(SUMMARY_HEADER)?;
        for row in self.rows(root, visited, files) {
            writer.serialize(row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Render and write the summary to `destination`.
    pub fn write_summary<D: OutputDestination>(
        &self,
        destination: &D,
        root: &Path,
        visited: &[PathBuf],
        files: &FileTable,
    ) -> Result<()> {
        let content = self.render(root, visited, files)?;
        destination.write_str(&content)?;
        destination.flush()
    }
}
