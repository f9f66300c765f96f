//! Products

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

pub use crate::ids::{DealId, ProductId, ShopId};

/// Errors raised while constructing a product.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// The discount price uses a different currency to the list price (discount, list).
    #[error("discount price is in {0}, but list price is in {1}")]
    DiscountCurrencyMismatch(&'static str, &'static str),

    /// A price was below zero.
    #[error("price must not be negative, got {0} minor units")]
    NegativePrice(i64),
}

/// Stock availability for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stock {
    /// Whether the product can currently be bought.
    pub in_stock: bool,

    /// Units on hand.
    pub quantity: u32,
}

impl Stock {
    /// Stock with the given number of units; in stock when non-zero.
    #[must_use]
    pub fn with_quantity(quantity: u32) -> Self {
        Self {
            in_stock: quantity > 0,
            quantity,
        }
    }
}

/// Product
///
/// Products are read-only from the cart's point of view. The discount price,
/// when present, always shares the list price's currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    title: String,
    price: Money<'static, Currency>,
    discount_price: Option<Money<'static, Currency>>,
    image_url: String,
    category: String,
    stock: Stock,
    shop_id: Option<ShopId>,
    description: Option<String>,
    deal_id: Option<DealId>,
}

impl Product {
    /// Creates a product with a list price and no discount.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NegativePrice`] if the price is below zero.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Money<'static, Currency>,
    ) -> Result<Self, ProductError> {
        ensure_not_negative(&price)?;

        Ok(Self {
            id,
            title: title.into(),
            price,
            discount_price: None,
            image_url: String::new(),
            category: String::new(),
            stock: Stock::default(),
            shop_id: None,
            description: None,
            deal_id: None,
        })
    }

    /// Sets the discounted price.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] if the discount is negative or in another currency.
    pub fn with_discount_price(
        mut self,
        discount_price: Money<'static, Currency>,
    ) -> Result<Self, ProductError> {
        ensure_not_negative(&discount_price)?;

        if discount_price.currency() != self.price.currency() {
            return Err(ProductError::DiscountCurrencyMismatch(
                discount_price.currency().iso_alpha_code,
                self.price.currency().iso_alpha_code,
            ));
        }

        self.discount_price = Some(discount_price);

        Ok(self)
    }

    /// Sets the image reference.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the stock fields.
    #[must_use]
    pub fn with_stock(mut self, stock: Stock) -> Self {
        self.stock = stock;
        self
    }

    /// Sets the owning shop.
    #[must_use]
    pub fn with_shop(mut self, shop_id: ShopId) -> Self {
        self.shop_id = Some(shop_id);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Links the product to a deal.
    #[must_use]
    pub fn with_deal(mut self, deal_id: DealId) -> Self {
        self.deal_id = Some(deal_id);
        self
    }

    /// Returns the product identifier.
    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the product title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the list price.
    #[must_use]
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }

    /// Returns the discounted price, if any.
    #[must_use]
    pub fn discount_price(&self) -> Option<&Money<'static, Currency>> {
        self.discount_price.as_ref()
    }

    /// Returns the currency the product is priced in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.price.currency()
    }

    /// Returns the image reference.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the stock fields.
    #[must_use]
    pub fn stock(&self) -> Stock {
        self.stock
    }

    /// Returns the owning shop, if known.
    #[must_use]
    pub fn shop_id(&self) -> Option<ShopId> {
        self.shop_id
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the linked deal, if any.
    #[must_use]
    pub fn deal_id(&self) -> Option<DealId> {
        self.deal_id
    }
}

fn ensure_not_negative(price: &Money<'static, Currency>) -> Result<(), ProductError> {
    let minor = price.to_minor_units();

    if minor < 0 {
        Err(ProductError::NegativePrice(minor))
    } else {
        Ok(())
    }
}
