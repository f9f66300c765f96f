//! Checkout
//!
//! Turns a paid-for cart into the order record handed to the data store. The
//! order is drafted only after the payment provider confirms payment, so drafts
//! are always `processing` and `paid`.

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::{
    cart::Cart,
    ids::{ProductId, UserId},
    items::CartItem,
    orders::{OrderStatus, PaymentStatus},
};

/// Errors raised while drafting an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart has no lines to order.
    #[error("cannot check out an empty cart")]
    EmptyCart,
}

/// Where an order is shipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// Postal code
    pub zip: String,

    /// Contact phone number
    pub phone: String,
}

/// An order line ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    /// Product bought
    pub product_id: ProductId,

    /// Units bought
    pub quantity: u32,

    /// Effective unit price at the time of purchase
    pub price_at_purchase: Money<'static, Currency>,
}

impl From<&CartItem> for NewOrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id(),
            quantity: item.quantity(),
            price_at_purchase: item.unit_price(),
        }
    }
}

/// An order ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    /// Shopper placing the order
    pub user_id: UserId,

    /// Amount charged
    pub total_amount: Money<'static, Currency>,

    /// Fulfilment status
    pub status: OrderStatus,

    /// Payment status
    pub payment_status: PaymentStatus,

    /// Where to ship
    pub shipping_address: ShippingAddress,

    /// Reference returned by the payment provider
    pub payment_reference: Option<String>,

    /// Order lines, in cart order
    pub items: Vec<NewOrderItem>,
}

impl NewOrder {
    /// The total in minor units (kobo, pence, cents), as charged by payment providers.
    #[must_use]
    pub fn payment_amount_minor(&self) -> i64 {
        self.total_amount.to_minor_units()
    }

    /// Attach the payment provider's reference.
    #[must_use]
    pub fn with_payment_reference(mut self, reference: impl Into<String>) -> Self {
        self.payment_reference = Some(reference.into());
        self
    }
}

/// Draft the order for a paid cart.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if the cart has no lines.
pub fn draft_order(
    cart: &Cart,
    user_id: UserId,
    shipping_address: ShippingAddress,
) -> Result<NewOrder, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let order = NewOrder {
        user_id,
        total_amount: cart.total_amount(),
        status: OrderStatus::Processing,
        payment_status: PaymentStatus::Paid,
        shipping_address,
        payment_reference: None,
        items: cart.iter().map(NewOrderItem::from).collect(),
    };

    info!(
        %user_id,
        lines = order.items.len(),
        total_minor = order.payment_amount_minor(),
        "drafted order"
    );

    Ok(order)
}
