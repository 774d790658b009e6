//! `classcal` command-line entry point

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use classcal_infra::observability::{init_tracing, with_startup_logging};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let input = match &cli.command {
        Command::Parse { input, .. } | Command::Publish { input, .. } => input,
    };
    let app_config =
        with_startup_logging(|| commands::load_config(cli.config.as_deref(), input))?;
    init_tracing(&app_config.logging)?;

    match cli.command {
        Command::Parse { pretty, .. } => {
            commands::parse(&app_config, pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Publish { dry_run, .. } => {
            let all_published = commands::publish(&app_config, dry_run).await?;
            Ok(if all_published { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}
