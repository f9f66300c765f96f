//! Display helpers for money and percentages.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

/// Formats an amount with its currency symbol and thousands separators.
///
/// Fraction digits are only shown when non-zero, so `1000 NGN` renders as
/// `₦1,000` and `1000.50 NGN` as `₦1,000.5`.
#[must_use]
pub fn format_money(money: &Money<'_, Currency>) -> String {
    let currency = money.currency();
    let minor = Decimal::new(money.to_minor_units(), currency.exponent);
    let amount = minor.normalize();

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = amount.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = format!("{sign}{}{}", currency.symbol, group_thousands(whole));

    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }

    out
}

/// Formats a fractional percentage as whole-or-decimal percent points, e.g. `25%`.
#[must_use]
pub fn format_percent(percentage: Percentage) -> String {
    let points = ((percentage * Decimal::ONE) * Decimal::ONE_HUNDRED)
        .round_dp(2)
        .normalize();

    format!("{points}%")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }

        out.push(ch);
    }

    out
}
