//! Cart commands

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;
use tracing::{info, warn};
use trolley::{
    cart::Cart,
    catalog::{Catalog, CatalogError},
    display::format_money,
    pricing::effective_price,
    products::Product,
    summary::SummaryError,
};

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Summary could not be written.
    #[error(transparent)]
    Summary(#[from] SummaryError),

    /// Catalog listing could not be written.
    #[error("failed to write catalog listing: {0}")]
    Io(#[from] io::Error),

    /// A command is missing its argument.
    #[error("`{command}` expects a {argument}")]
    MissingArgument {
        /// Command word
        command: &'static str,
        /// What was expected
        argument: &'static str,
    },

    /// Unrecognised command word.
    #[error("unknown command `{0}`; expected add, remove, set or clear")]
    UnknownCommand(String),

    /// Quantity is not an integer.
    #[error("invalid quantity `{0}`")]
    InvalidQuantity(String),
}

impl CliError {
    /// Usage errors exit with 2, everything else with 1.
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            CliError::MissingArgument { .. }
            | CliError::UnknownCommand(_)
            | CliError::InvalidQuantity(_) => 2,
            CliError::Catalog(_) | CliError::Summary(_) | CliError::Io(_) => 1,
        }
    }
}

/// A single cart mutation, addressed by catalog key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Add(String),
    Remove(String),
    Set { key: String, quantity: i64 },
    Clear,
}

const KEY: &str = "product key";

/// Parse command words into commands.
pub(crate) fn parse(words: &[String]) -> Result<Vec<Command>, CliError> {
    let mut words = words.iter().map(String::as_str);
    let mut commands = Vec::new();

    while let Some(word) = words.next() {
        let command = match word {
            "add" => Command::Add(next_word(&mut words, "add", KEY)?.to_string()),
            "remove" => Command::Remove(next_word(&mut words, "remove", KEY)?.to_string()),
            "set" => {
                let key = next_word(&mut words, "set", KEY)?.to_string();
                let quantity = next_word(&mut words, "set", "quantity")?;
                let quantity = quantity
                    .parse()
                    .map_err(|_err| CliError::InvalidQuantity(quantity.to_string()))?;

                Command::Set { key, quantity }
            }
            "clear" => Command::Clear,
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };

        commands.push(command);
    }

    Ok(commands)
}

fn next_word<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CliError> {
    words
        .next()
        .ok_or(CliError::MissingArgument { command, argument })
}

/// Replay `commands` against `cart`. Keys missing from the catalog are skipped.
pub(crate) fn apply(cart: &mut Cart, catalog: &Catalog, commands: &[Command]) {
    for command in commands {
        match command {
            Command::Add(key) => {
                if let Some(product) = lookup(catalog, key) {
                    cart.add_to_cart(product.clone());
                }
            }
            Command::Remove(key) => {
                if let Some(product) = lookup(catalog, key) {
                    cart.remove_from_cart(product.id());
                }
            }
            Command::Set { key, quantity } => {
                if let Some(product) = lookup(catalog, key) {
                    cart.update_quantity(product.id(), *quantity);
                }
            }
            Command::Clear => cart.clear_cart(),
        }
    }

    info!(
        commands = commands.len(),
        lines = cart.len(),
        items = cart.item_count(),
        "replayed cart commands"
    );
}

fn lookup<'a>(catalog: &'a Catalog, key: &str) -> Option<&'a Product> {
    match catalog.get(key) {
        Ok(product) => Some(product),
        Err(err) => {
            warn!(key, "skipping command: {err}");

            None
        }
    }
}

/// Write the catalog as a table of keys, titles and prices.
pub(crate) fn write_catalog(mut out: impl io::Write, catalog: &Catalog) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Key", "Product", "Price", "Category"]);

    for (key, product) in catalog.iter() {
        builder.push_record([
            key.to_string(),
            product.title().to_string(),
            format_money(&effective_price(product)),
            product.category().to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..3), Alignment::right());

    writeln!(out, "{table}")
}
