//! Cart summary

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Alignment, Style, Theme, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::Cart,
    display::{format_money, format_percent},
    pricing::discount_percent,
};

/// Errors that can occur when writing a cart summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Output could not be written.
    #[error("failed to write cart summary: {0}")]
    Io(#[from] io::Error),
}

/// Writes the cart as a table of lines followed by the order summary.
///
/// Shipping is always free.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
pub fn write_to(mut out: impl io::Write, cart: &Cart) -> Result<(), SummaryError> {
    if cart.is_empty() {
        writeln!(out, "Your cart is empty")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Item", "Unit Price", "Qty", "Line Total"]);

    for item in cart {
        let product = item.product();

        let unit_price = match discount_percent(product) {
            Some(percent) => format!(
                "{} (was {}, -{})",
                format_money(&item.unit_price()),
                format_money(product.price()),
                format_percent(percent)
            ),
            None => format_money(&item.unit_price()),
        };

        builder.push_record([
            product.title().to_string(),
            unit_price,
            item.quantity().to_string(),
            format_money(&item.line_total()),
        ]);
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(
        1,
        HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
    );

    table.with(theme);
    table.modify(Columns::new(1..4), Alignment::right());

    writeln!(out, "{table}")?;

    let total = format_money(&cart.total_amount());

    writeln!(out, " Items:    {}", cart.item_count())?;
    writeln!(out, " Subtotal: {total}")?;
    writeln!(out, " Shipping: Free")?;
    writeln!(out, " Total:    {total}")?;

    Ok(())
}
