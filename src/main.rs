use anyhow::Context;
use clap::Parser;
use colored::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use snapdel::cli::Cli;
use snapdel::commands::execute_delete;
use snapdel::config::Config;

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load()
        .context("Failed to load configuration")?
        .with_overrides(cli.url.clone(), cli.account.clone());

    execute_delete(&cli, &config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG가 있으면 우선, --debug면 debug 레벨
    let filter = if cli.debug {
        EnvFilter::new("snapdel=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
