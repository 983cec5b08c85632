use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gh_changelog::app::{AppContext, ChangelogError, Result};
use gh_changelog::cli::{commands, Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing on stderr; stdout carries the rendered changelog
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    let ctx = AppContext::new(config)?;
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Open { id }) => {
            commands::open_entry(&ctx, id, &mut stdout).await?;
        }
        None => {
            commands::list_entries(&ctx, cli.pretty, cli.use_color(), &mut stdout).await?;
        }
    }

    Ok(())
}

fn report(e: &ChangelogError) {
    if e.is_fatal() {
        eprintln!("Error: {}", e);
    } else {
        eprintln!("{}", e);
    }
}
