use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::{Path, PathBuf};

/// Default marker that introduces a graded comment.
pub const DEFAULT_MARKER: &str = "### Grading:";

/// Default suffix of the files that are scanned.
pub const DEFAULT_SUFFIX: &str = ".py";

/// Obtained and possible points, summed over any number of score pairs.
///
/// Both counters are unsigned so a total can never go negative. Additions
/// saturate at `u64::MAX` instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ScoreTotals {
    pub obtained: u64,
    pub possible: u64,
}

impl ScoreTotals {
    pub const ZERO: ScoreTotals = ScoreTotals {
        obtained: 0,
        possible: 0,
    };

    pub fn new(obtained: u64, possible: u64) -> Self {
        Self { obtained, possible }
    }

    pub fn is_zero(&self) -> bool {
        self.obtained == 0 && self.possible == 0
    }
}

impl Add for ScoreTotals {
    type Output = ScoreTotals;

    fn add(self, rhs: ScoreTotals) -> ScoreTotals {
        ScoreTotals {
            obtained: self.obtained.saturating_add(rhs.obtained),
            possible: self.possible.saturating_add(rhs.possible),
        }
    }
}

impl AddAssign for ScoreTotals {
    fn add_assign(&mut self, rhs: ScoreTotals) {
        *self = *self + rhs;
    }
}

impl Sum for ScoreTotals {
    fn sum<I: Iterator<Item = ScoreTotals>>(iter: I) -> Self {
        iter.fold(ScoreTotals::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a ScoreTotals> for ScoreTotals {
    fn sum<I: Iterator<Item = &'a ScoreTotals>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Formats as `obtained / possible`, the notation used in every report.
impl fmt::Display for ScoreTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.obtained, self.possible)
    }
}

/// A line that carries the marker, cut so it starts at the marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarkerLine(String);

impl MarkerLine {
    /// Build a marker line from a raw source line.
    ///
    /// Returns `None` when the line is blank or does not contain `marker`.
    pub fn from_source_line(line: &str, marker: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let start = trimmed.find(marker)?;
        Some(Self(trimmed[start..].trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MarkerLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything learned about one scanned file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub path: PathBuf,
    pub comments: Vec<MarkerLine>,
    pub totals: ScoreTotals,
}

impl FileResult {
    pub fn new(path: PathBuf, comments: Vec<MarkerLine>, totals: ScoreTotals) -> Self {
        Self {
            path,
            comments,
            totals,
        }
    }

    /// Directory that physically contains the file.
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Bare file name, used as the label inside reports.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Per-file results keyed by path.
///
/// Sorted by path, so the files of one directory come out in name order.
pub type FileTable = BTreeMap<PathBuf, FileResult>;
