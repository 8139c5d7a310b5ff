//! Score pair parsing and summation.

pub mod pattern;

pub use pattern::{compute_score_totals, ScorePattern};
