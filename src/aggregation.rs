//! Directory-level totals over a per-file table.
//!
//! Two different questions are answered here and they must not be mixed up:
//!
//! - [`flat_totals`]: what did the files *directly inside* a directory score?
//!   The per-directory text report prints this.
//! - [`rollup_totals`]: what did a directory and *everything below it*
//!   score? The CSV summary prints this.

use crate::core::{FileResult, FileTable, ScoreTotals};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Totals per directory, counting only each directory's own files.
///
/// Directories without processed files do not appear.
pub fn flat_totals(files: &FileTable) -> BTreeMap<PathBuf, ScoreTotals> {
    let mut totals: BTreeMap<PathBuf, ScoreTotals> = BTreeMap::new();
    for result in files.values() {
        *totals.entry(result.directory().to_path_buf()).or_default() += result.totals;
    }
    totals
}

/// Totals per visited directory, including every descendant directory.
///
/// Every directory in `visited` gets an entry, zero if nothing below it
/// scored. A file is folded into each visited ancestor from its own
/// directory up to `root`.
pub fn rollup_totals(
    root: &Path,
    visited: &[PathBuf],
    files: &FileTable,
) -> BTreeMap<PathBuf, ScoreTotals> {
    let mut totals: BTreeMap<PathBuf, ScoreTotals> = visited
        .iter()
        .map(|dir| (dir.clone(), ScoreTotals::ZERO))
        .collect();

    for result in files.values() {
        for ancestor in result.directory().ancestors() {
            if !ancestor.starts_with(root) {
                break;
            }
            if let Some(entry) = totals.get_mut(ancestor) {
                *entry += result.totals;
            }
            if ancestor == root {
                break;
            }
        }
    }

    totals
}

/// Files located directly in `dir`, in name order.
pub fn files_in_directory<'a>(
    files: &'a FileTable,
    dir: &'a Path,
) -> impl Iterator<Item = &'a FileResult> + 'a {
    files.values().filter(move |result| result.directory() == dir)
}

/// Directories that directly contain at least one processed file, sorted.
pub fn directories_with_files(files: &FileTable) -> Vec<PathBuf> {
    flat_totals(files).into_keys().collect()
}
