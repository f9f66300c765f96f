//! Pricing
//!
//! Every place that shows or totals a price goes through [`effective_price`], so
//! cart totals, checkout and display can never disagree about which price applies.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};

use crate::products::Product;

/// Returns the price a customer pays for one unit: the discount price if set,
/// otherwise the list price.
#[must_use]
pub fn effective_price(product: &Product) -> Money<'static, Currency> {
    product
        .discount_price()
        .copied()
        .unwrap_or(*product.price())
}

/// Multiplies a unit price by a quantity.
///
/// Saturates at the largest representable amount rather than overflowing.
#[must_use]
pub fn line_total(
    unit_price: &Money<'static, Currency>,
    quantity: u32,
) -> Money<'static, Currency> {
    let minor = unit_price
        .to_minor_units()
        .saturating_mul(i64::from(quantity));

    Money::from_minor(minor, unit_price.currency())
}

/// Sums amounts that are already known to share `currency`.
///
/// An empty iterator yields zero in `currency`.
#[must_use]
pub fn total_price<I>(amounts: I, currency: &'static Currency) -> Money<'static, Currency>
where
    I: IntoIterator<Item = Money<'static, Currency>>,
{
    let minor = amounts
        .into_iter()
        .map(|amount| amount.to_minor_units())
        .fold(0_i64, i64::saturating_add);

    Money::from_minor(minor, currency)
}

/// Percentage saved by buying at the discount price, rounded to whole percent points.
///
/// Returns `None` when the product has no discount, the list price is zero, or the
/// discount is not actually cheaper than the list price. A zero discount price gets
/// no percentage either, matching the storefront's sale badge.
#[must_use]
pub fn discount_percent(product: &Product) -> Option<Percentage> {
    let discount = product.discount_price()?.to_minor_units();
    let price = product.price().to_minor_units();

    if price <= 0 || discount <= 0 || discount >= price {
        return None;
    }

    let saving = Decimal::from(price - discount);
    let points = saving
        .checked_div(Decimal::from(price))?
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    Some(Percentage::from(points / Decimal::ONE_HUNDRED))
}
