use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_MARKER, DEFAULT_SUFFIX};

/// Name of the configuration file looked up during discovery.
pub const CONFIG_FILE_NAME: &str = ".gradetally.toml";

/// Placeholder replaced by the directory name in the report preamble.
const DIR_PLACEHOLDER: &str = "{dir}";

/// Root configuration structure for gradetally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradetallyConfig {
    /// Literal token that starts a graded comment
    #[serde(default = "default_marker")]
    pub marker: String,

    /// File name suffix of the files to scan
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Names and wording of the written artifacts
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for GradetallyConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            suffix: default_suffix(),
            output: OutputConfig::default(),
        }
    }
}

/// Output artifact configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Report written into every directory with scanned files
    #[serde(default = "default_report_file_name")]
    pub report_file_name: String,

    /// CSV summary written at the scan root
    #[serde(default = "default_summary_file_name")]
    pub summary_file_name: String,

    /// First line of each report; `{dir}` becomes the directory name
    #[serde(default = "default_report_preamble")]
    pub report_preamble: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_file_name: default_report_file_name(),
            summary_file_name: default_summary_file_name(),
            report_preamble: default_report_preamble(),
        }
    }
}

impl OutputConfig {
    pub fn preamble_for(&self, dir_name: &str) -> String {
        self.report_preamble.replace(DIR_PLACEHOLDER, dir_name)
    }
}

pub fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

pub fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

pub fn default_report_file_name() -> String {
    "grading_report.txt".to_string()
}

pub fn default_summary_file_name() -> String {
    "grading_summary.csv".to_string()
}

pub fn default_report_preamble() -> String {
    "Grading report for directory: {dir}".to_string()
}
