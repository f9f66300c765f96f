//! Orders
//!
//! Order records as returned by the data store, plus the order-history logic
//! applied to them: status timelines and delivery estimates.

use std::ops::RangeInclusive;

use jiff::{SignedDuration, Timestamp};
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

use crate::ids::{OrderId, OrderItemId, ProductId, UserId};

const DELIVERY_MIN_DAYS: i64 = 3;
const DELIVERY_MAX_DAYS: i64 = 5;

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, awaiting payment confirmation.
    Pending,
    /// Paid and being prepared.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Received by the shopper.
    Delivered,
    /// Closed after delivery.
    Completed,
    /// Cancelled before fulfilment.
    Cancelled,
}

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// No payment received yet.
    Pending,
    /// Payment captured.
    Paid,
    /// Payment attempt failed.
    Failed,
    /// Payment returned to the shopper.
    Refunded,
}

/// One stage of the order-history timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineStage {
    /// Status this stage represents.
    pub status: OrderStatus,

    /// Label shown to the shopper.
    pub label: &'static str,

    /// Whether the order has reached this stage.
    pub completed: bool,
}

const TIMELINE: [(OrderStatus, &str); 4] = [
    (OrderStatus::Pending, "Ordered"),
    (OrderStatus::Processing, "Processing"),
    (OrderStatus::Shipped, "Shipped"),
    (OrderStatus::Delivered, "Delivered"),
];

impl OrderStatus {
    /// The four display stages, each marked completed up to and including the
    /// current status. Statuses outside the timeline complete no stage.
    #[must_use]
    pub fn timeline(self) -> [TimelineStage; 4] {
        let current = TIMELINE.iter().position(|(status, _)| *status == self);

        let mut idx = 0;

        TIMELINE.map(|(status, label)| {
            let completed = current.is_some_and(|current| idx <= current);
            idx += 1;

            TimelineStage {
                status,
                label,
                completed,
            }
        })
    }

    /// Whether the shopper has received the order.
    #[must_use]
    pub fn is_fulfilled(self) -> bool {
        matches!(self, Self::Delivered | Self::Completed)
    }
}

/// A line on a placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// Line identifier
    pub id: OrderItemId,

    /// Order this line belongs to
    pub order_id: OrderId,

    /// Product bought
    pub product_id: ProductId,

    /// Units bought
    pub quantity: u32,

    /// Unit price charged at checkout
    pub price_at_purchase: Money<'static, Currency>,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Order identifier
    pub id: OrderId,

    /// When the order was placed
    pub created_at: Timestamp,

    /// Shopper who placed it
    pub user_id: UserId,

    /// Amount charged
    pub total_amount: Money<'static, Currency>,

    /// Fulfilment status
    pub status: OrderStatus,

    /// Payment status
    pub payment_status: PaymentStatus,

    /// Order lines
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Window in which the order should arrive: three to five days after it was placed.
    #[must_use]
    pub fn delivery_estimate(&self) -> RangeInclusive<Timestamp> {
        let earliest = after_days(self.created_at, DELIVERY_MIN_DAYS);
        let latest = after_days(self.created_at, DELIVERY_MAX_DAYS);

        earliest..=latest
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// Sorts orders newest first, as shown in order history.
pub fn sort_recent_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

fn after_days(start: Timestamp, days: i64) -> Timestamp {
    start
        .checked_add(SignedDuration::from_hours(days * 24))
        .unwrap_or(Timestamp::MAX)
}
