//! Terminal lines printed by `scan`.

use crate::core::{FileTable, ScoreTotals};
use colored::Colorize;
use std::env;
use std::fmt::Write as _;
use std::io::IsTerminal;
use std::path::Path;

/// Whether stdout should get ANSI colors.
pub fn should_use_colors() -> bool {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn paint_totals(totals: ScoreTotals, use_colors: bool) -> String {
    let text = totals.to_string();
    if !use_colors {
        return text;
    }
    if totals.is_zero() {
        text.dimmed().to_string()
    } else {
        text.bold().to_string()
    }
}

/// `Directory totals for '<root>' (recursive=<bool>): <o> / <p>`
pub fn format_directory_totals(
    root: &Path,
    recursive: bool,
    totals: ScoreTotals,
    use_colors: bool,
) -> String {
    format!(
        "Directory totals for '{}' (recursive={}): {}",
        root.display(),
        recursive,
        paint_totals(totals, use_colors)
    )
}

/// Per-file listing, one line per file ordered by path text, so `a.py`
/// comes before `a/x.py`.
pub fn format_breakdown(files: &FileTable, use_colors: bool) -> String {
    let mut out = String::new();
    let heading = "Per-file breakdown:";
    if use_colors {
        let _ = writeln!(out, "{}", heading.cyan().bold());
    } else {
        let _ = writeln!(out, "{}", heading);
    }

    let mut lines: Vec<(String, ScoreTotals)> = files
        .iter()
        .map(|(path, result)| (path.to_string_lossy().into_owned(), result.totals))
        .collect();
    lines.sort_by(|a, b| a.0.cmp(&b.0));

    for (path, totals) in lines {
        let _ = writeln!(out, "  {}: {}", path, paint_totals(totals, use_colors));
    }
    out
}
