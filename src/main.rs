use anyhow::Result;
use gradetally::cli::{self, Commands};
use gradetally::commands::{self, ScanConfig};

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity());

    match cli.command {
        Commands::Scan {
            path,
            recursive,
            per_file,
            report,
            summary,
            marker,
            suffix,
            config,
            plain,
            verbosity: _,
        } => {
            commands::handle_scan(ScanConfig {
                path,
                recursive,
                per_file,
                report,
                summary,
                marker,
                suffix,
                config,
                plain,
            })?;
            Ok(())
        }
        Commands::Init { force } => commands::init_config(force),
    }
}
