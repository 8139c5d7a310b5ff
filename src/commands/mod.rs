//! Command implementations behind the `gradetally` binary.
//!
//! Available commands:
//! - **scan**: Total the grading comments under a directory and write reports
//! - **init**: Write a default `.gradetally.toml`

pub mod init;
pub mod scan;

pub use init::init_config;
pub use scan::{handle_scan, resolve_config, run_scan, ScanConfig};
