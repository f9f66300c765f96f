//! Items

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::{effective_price, line_total},
    products::{Product, ProductId},
};

/// One line in the cart: a product and how many of it.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    product: Product,
    quantity: NonZeroU32,
}

impl CartItem {
    /// Creates a line holding a single unit of `product`.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Returns the product on this line.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the product identifier on this line.
    pub fn product_id(&self) -> ProductId {
        self.product.id()
    }

    /// Returns the quantity, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Returns the price paid for one unit of this line.
    pub fn unit_price(&self) -> Money<'static, Currency> {
        effective_price(&self.product)
    }

    /// Returns the unit price multiplied by the quantity.
    pub fn line_total(&self) -> Money<'static, Currency> {
        line_total(&self.unit_price(), self.quantity())
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(crate) fn set_quantity(&mut self, quantity: NonZeroU32) {
        self.quantity = quantity;
    }
}
