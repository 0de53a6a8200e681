//! cleanfy - Normalize file and directory names into portable ASCII

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod clean;
mod cli;
mod config;
mod rename;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for results
    let filter = if cli.verbose {
        "cleanfy=debug"
    } else {
        "cleanfy=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Config { init }) => {
            cli::commands::config(init)?;
        }
        Some(Commands::Completion { shell }) => {
            cli::commands::completion(shell);
        }
        None => {
            let all_ok = cli::commands::clean(cli.clean)?;
            if !all_ok {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
