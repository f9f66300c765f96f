//! Trolley
//!
//! Trolley is the shopping cart core of a multi-vendor storefront: a session cart with
//! derived totals, plus the wishlist, deals, checkout and order-history models around it.

pub mod addresses;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod clock;
pub mod countdown;
pub mod deals;
pub mod display;
pub mod ids;
pub mod items;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod reviews;
pub mod summary;
pub mod wishlist;
