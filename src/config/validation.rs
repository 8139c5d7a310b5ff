//! Configuration validation.
//!
//! All problems are collected before reporting, so a user fixing a config
//! file sees every issue in one run.

use super::GradetallyConfig;

/// Validate a configuration, returning one message per problem.
pub fn validate_config(config: &GradetallyConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.marker.trim().is_empty() {
        errors.push("marker: must not be empty".to_string());
    }
    if config.suffix.is_empty() {
        errors.push("suffix: must not be empty".to_string());
    }
    validate_file_name(
        "output.report_file_name",
        &config.output.report_file_name,
        &mut errors,
    );
    validate_file_name(
        "output.summary_file_name",
        &config.output.summary_file_name,
        &mut errors,
    );
    if config.output.report_file_name == config.output.summary_file_name {
        errors.push(format!(
            "output: report and summary file names must differ (both '{}')",
            config.output.report_file_name
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Artifact names are plain file names placed inside scanned directories.
fn validate_file_name(field: &str, name: &str, errors: &mut Vec<String>) {
    if name.trim().is_empty() {
        errors.push(format!("{}: must not be empty", field));
    } else if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        errors.push(format!(
            "{}: '{}' must be a bare file name, not a path",
            field, name
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GradetallyConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_marker() {
        let mut config = GradetallyConfig::default();
        config.marker = "   ".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("marker"));
    }

    #[test]
    fn test_path_as_file_name() {
        let mut config = GradetallyConfig::default();
        config.output.report_file_name = "../report.txt".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("output.report_file_name"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = GradetallyConfig::default();
        config.marker = String::new();
        config.suffix = String::new();
        config.output.summary_file_name = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_same_artifact_names() {
        let mut config = GradetallyConfig::default();
        config.output.summary_file_name = config.output.report_file_name.clone();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("must differ"));
    }
}
