//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;

use crate::{
    catalog::CatalogError,
    ids::{DealId, ProductId, ShopId},
    products::{Product, Stock},
};

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: ProductId,

    /// Product title
    pub title: String,

    /// List price (e.g., "1500 NGN")
    pub price: String,

    /// Discounted price, in the same format as `price`
    #[serde(default)]
    pub discount_price: Option<String>,

    /// Image reference
    #[serde(default)]
    pub image_url: String,

    /// Category slug
    #[serde(default)]
    pub category: String,

    /// Whether the product can be bought
    #[serde(default)]
    pub in_stock: bool,

    /// Units on hand
    #[serde(default)]
    pub stock_quantity: u32,

    /// Owning shop
    #[serde(default)]
    pub shop_id: Option<ShopId>,

    /// Long description
    #[serde(default)]
    pub description: Option<String>,

    /// Deal the product is featured in
    #[serde(default)]
    pub deal_id: Option<DealId>,
}

impl TryFrom<ProductFixture> for Product {
    type Error = CatalogError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        let mut product = Product::new(
            fixture.id,
            fixture.title,
            Money::from_minor(minor_units, currency),
        )?
        .with_image_url(fixture.image_url)
        .with_category(fixture.category)
        .with_stock(Stock {
            in_stock: fixture.in_stock,
            quantity: fixture.stock_quantity,
        });

        if let Some(discount_price) = fixture.discount_price {
            let (minor_units, currency) = parse_price(&discount_price)?;
            let discount_price = Money::from_minor(minor_units, currency);

            product = product.with_discount_price(discount_price)?;
        }

        if let Some(shop_id) = fixture.shop_id {
            product = product.with_shop(shop_id);
        }

        if let Some(description) = fixture.description {
            product = product.with_description(description);
        }

        if let Some(deal_id) = fixture.deal_id {
            product = product.with_deal(deal_id);
        }

        Ok(product)
    }
}

/// Parse price string (e.g., "1500.50 NGN") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a decimal number, or if the currency code
/// is not a known ISO currency.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), CatalogError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(CatalogError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = iso::find(currency_code)
        .ok_or_else(|| CatalogError::UnknownCurrency((*currency_code).to_string()))?;

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidPrice(s.to_string()))?;

    let minor_units = Decimal::from(10_u64.pow(currency.exponent))
        .checked_mul(amount)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}
