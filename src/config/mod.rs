//! Configuration for gradetally.
//!
//! Settings come from a `.gradetally.toml` file. The file is either named
//! explicitly on the command line or discovered by walking up from the scan
//! root. Every field has a default, so an empty file (or no file) is valid.

mod core;
mod loader;
pub mod validation;

pub use self::core::{GradetallyConfig, OutputConfig, CONFIG_FILE_NAME};
pub use loader::{
    directory_ancestors, load_config, load_config_file, parse_and_validate_config,
};
pub use validation::validate_config;
