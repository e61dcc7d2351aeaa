//! Yieldline CLI - fixed-rate bond valuation from the command line.
//!
//! # Usage
//!
//! ```bash
//! # List the fixed-rate bonds in the dataset
//! yieldline bonds --currency CZK
//!
//! # Value a trade and solve its yield from a clean price
//! yieldline value -i CZ0001005037 -t 2024-11-24 -p 10 --clean-price 98.5
//!
//! # NPV under parallel shifts of -2% to +2%
//! yieldline scenarios -i CZ0001005037 -t 2024-11-24 --from -2 --to 2 --step 0.5
//! ```
//!
//! Set `RUST_LOG` to override the log filter.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let session = Session::from_cli(&cli)?;

    match cli.command {
        Commands::Bonds(args) => commands::bonds::execute(args, &session),
        Commands::Currencies(args) => commands::currencies::execute(args, &session),
        Commands::Curve(args) => commands::curve::execute(args, &session),
        Commands::Schedule(args) => commands::schedule::execute(args, &session),
        Commands::Cashflows(args) => commands::cashflows::execute(args, &session),
        Commands::Value(args) => commands::value::execute(args, &session),
        Commands::Scenarios(args) => commands::scenarios::execute(args, &session),
    }
}

/// Logs go to stderr so table, JSON and CSV output stay clean.
fn init_logging(cli: &Cli) {
    let default_filter = if cli.verbose {
        "yieldline_cli=debug,yieldline_ext_file=debug"
    } else if cli.quiet {
        "error"
    } else {
        "yieldline_cli=warn,yieldline_ext_file=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
