mod cli;
mod commands;
mod config;
mod file_io;
mod ofp;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;
use vtofp::Decoder;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "vtofp=debug,vtofp_cli=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Plan {
            mission,
            map,
            format,
            output,
            formula,
        } => {
            let decoder = Decoder::new(config::formula_constants(&formula)?);
            commands::plan::generate(&mission, &map, format, output.as_deref(), &decoder)?;
        }

        Commands::Decode {
            input,
            output,
            raw,
            formula,
        } => {
            let decoder = Decoder::new(config::formula_constants(&formula)?);
            commands::plan::decode(input.as_deref(), output.as_deref(), raw, &decoder)?;
        }

        Commands::Configure {
            formula_a,
            formula_b,
            show,
        } => {
            commands::configure::handle(formula_a, formula_b, show)?;
        }
    }

    Ok(())
}
