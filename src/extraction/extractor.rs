//! Marker line extraction for a single file.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gradetally::extraction::extract_marker_lines;
//! use gradetally::io::RealFileSystem;
//! use std::path::Path;
//!
//! let lines = extract_marker_lines(&RealFileSystem, Path::new("hw1/circles.py"), "### Grading:");
//! for line in &lines {
//!     println!("{line}");
//! }
//! ```

use crate::core::MarkerLine;
use crate::io::traits::FileSystem;
use std::path::Path;
use tracing::{debug, warn};

/// Extract the marker lines of the file at `path`.
///
/// Never fails: a missing or unreadable file is reported through `tracing`
/// and yields an empty list.
pub fn extract_marker_lines<F: FileSystem>(fs: &F, path: &Path, marker: &str) -> Vec<MarkerLine> {
    match fs.read_to_string(path) {
        Ok(content) => {
            let lines = extract_from_content(&content, marker);
            debug!(
                "Found {} marker line(s) in '{}'",
                lines.len(),
                path.display()
            );
            lines
        }
        Err(e) if e.is_not_found() => {
            warn!("The file '{}' was not found.", path.display());
            Vec::new()
        }
        Err(e) => {
            warn!(
                "An I/O error occurred while reading '{}': {}",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

/// Pure part of the extractor, working on already loaded content.
pub fn extract_from_content(content: &str, marker: &str) -> Vec<MarkerLine> {
    content
        .lines()
        .filter_map(|line| MarkerLine::from_source_line(line, marker))
        .collect()
}
