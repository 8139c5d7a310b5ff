//! Grading comment extraction.
//!
//! Reads one source file and returns the lines that carry the marker, in
//! file order, each cut to start at the marker.

pub mod extractor;

pub use extractor::{extract_from_content, extract_marker_lines};
