//! Trolley CLI
//!
//! Loads a product catalog, replays cart commands against a fresh cart and prints
//! the cart summary.

use std::{io, process::ExitCode};

use tracing::{error, info};
use trolley::{cart::Cart, catalog::Catalog, summary};

use crate::{commands::CliError, config::Config};

mod commands;
mod config;
mod logging;

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            _ = err.print();

            return ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(2));
        }
    };

    if let Err(err) = logging::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Logging error: {err}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");

            ExitCode::from(err.exit_code())
        }
    }
}

fn run(config: &Config) -> Result<(), CliError> {
    let catalog = Catalog::from_file(&config.catalog)?;

    info!(
        catalog = %config.catalog.display(),
        products = catalog.len(),
        "loaded catalog"
    );

    let commands = commands::parse(&config.commands)?;
    let stdout = io::stdout().lock();

    if commands.is_empty() {
        commands::write_catalog(stdout, &catalog)?;

        return Ok(());
    }

    let mut cart = Cart::new(catalog.currency());

    commands::apply(&mut cart, &catalog, &commands);

    summary::write_to(stdout, &cart)?;

    Ok(())
}
