// Export modules for library usage
pub mod aggregation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod extraction;
pub mod io;
pub mod output;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{FileResult, FileTable, MarkerLine, ScoreTotals};
pub use crate::errors::{Error, Result};
pub use crate::extraction::{extract_from_content, extract_marker_lines};
pub use crate::io::{DirectoryWalker, FileSystem, RealFileSystem, WalkOutcome};
pub use crate::scoring::{compute_score_totals, ScorePattern};
