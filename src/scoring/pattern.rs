use crate::core::ScoreTotals;
use crate::errors::Result;
use regex::Regex;
use tracing::debug;

/// Compiled matcher for `<marker> <obtained>/<possible>` pairs.
///
/// Whitespace is allowed between the marker and the first number and on
/// both sides of the slash. Pairs are found anywhere in a line, and every
/// pair on a line counts.
#[derive(Debug, Clone)]
pub struct ScorePattern {
    regex: Regex,
}

impl ScorePattern {
    pub fn new(marker: &str) -> Result<Self> {
        let pattern = format!(r"{}\s*([0-9]+)\s*/\s*([0-9]+)", regex::escape(marker));
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Sum of every pair found in `line`.
    pub fn line_totals(&self, line: &str) -> ScoreTotals {
        self.regex
            .captures_iter(line)
            .filter_map(|caps| {
                let obtained = caps[1].parse::<u64>();
                let possible = caps[2].parse::<u64>();
                match (obtained, possible) {
                    (Ok(obtained), Ok(possible)) => Some(ScoreTotals::new(obtained, possible)),
                    _ => {
                        debug!("Skipping unparsable score pair '{}'", &caps[0]);
                        None
                    }
                }
            })
            .sum()
    }

    /// Sum of every pair found in all `lines`. Empty input gives (0, 0).
    pub fn totals<I, S>(&self, lines: I) -> ScoreTotals
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.line_totals(line.as_ref()))
            .sum()
    }
}

/// One-shot helper compiling the pattern for `marker` and summing `lines`.
pub fn compute_score_totals<I, S>(lines: I, marker: &str) -> Result<ScoreTotals>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(ScorePattern::new(marker)?.totals(lines))
}
