//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    addresses::{AddressBook, AddressBookError, UserAddress},
    cart::Cart,
    catalog::{
        Catalog, CatalogError,
        filter::{ProductFilter, ProductSort},
    },
    checkout::{CheckoutError, NewOrder, NewOrderItem, ShippingAddress, draft_order},
    clock::{FixedTimeSource, ServerClock, SystemTimeSource, TimeSource},
    countdown::Countdown,
    deals::{ActiveDeal, Deal},
    display::{format_money, format_percent},
    ids::{AddressId, DealId, OrderId, OrderItemId, ProductId, ReviewId, ShopId, UserId},
    items::CartItem,
    orders::{Order, OrderItem, OrderStatus, PaymentStatus, TimelineStage},
    pricing::{discount_percent, effective_price},
    products::{Product, ProductError, Stock},
    reviews::{Rating, Review, ReviewError, average_rating},
    summary::SummaryError,
    wishlist::Wishlist,
};
