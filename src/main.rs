use anyhow::Result;
use clap::Parser;
use skinplan::cli::{Cli, Commands};
use skinplan::commands::{compare::CompareConfig, plan::PlanConfig};
use skinplan::config::CONFIG_FILE_NAME;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = skinplan::observability::init_tracing(cli.verbosity) {
        eprintln!("warning: {e}");
    }

    match cli.command {
        Commands::Plan {
            intake,
            max_serums,
            texture,
            timestamp,
            format,
            output,
            config,
            no_color,
        } => skinplan::commands::plan::generate_plan(PlanConfig {
            intake,
            max_serums,
            texture: texture.map(Into::into),
            timestamp,
            format,
            output,
            config,
            no_color,
        }),
        Commands::Compare {
            previous,
            latest,
            format,
            output,
            no_color,
        } => skinplan::commands::compare::compare_snapshots(CompareConfig {
            previous,
            latest,
            format,
            output,
            no_color,
        }),
        Commands::Init { force } => {
            skinplan::commands::init::init_config(Path::new(CONFIG_FILE_NAME), force)
        }
    }
}
