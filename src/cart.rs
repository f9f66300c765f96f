//! Cart
//!
//! The session cart: at most one line per product, quantities of at least one,
//! and totals derived from the lines on every read. Nothing here is persisted;
//! dropping the cart ends the session.

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};
use tracing::{debug, warn};

use crate::{
    items::CartItem,
    pricing::total_price,
    products::{Product, ProductId},
};

/// Cart
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: &'static Currency,
}

impl Cart {
    /// Create a new, empty cart that totals in `currency`.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line for the product, or appends a new line with a
    /// quantity of one. Products priced in another currency are ignored.
    pub fn add_to_cart(&mut self, product: Product) {
        if product.currency() != self.currency {
            warn!(
                product_id = %product.id(),
                product_currency = product.currency().iso_alpha_code,
                cart_currency = self.currency.iso_alpha_code,
                "ignoring product priced in another currency"
            );

            return;
        }

        if let Some(item) = self.find_mut(product.id()) {
            item.increment();

            debug!(
                product_id = %item.product_id(),
                quantity = item.quantity(),
                "incremented cart line"
            );

            return;
        }

        debug!(product_id = %product.id(), "added cart line");

        self.items.push(CartItem::new(product));
    }

    /// Remove the line for `product_id`, if there is one.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let before = self.items.len();

        self.items.retain(|item| item.product_id() != product_id);

        if self.items.len() < before {
            debug!(%product_id, "removed cart line");
        }
    }

    /// Set the quantity of the line for `product_id`.
    ///
    /// A quantity of zero or less removes the line. Quantities above `u32::MAX`
    /// are clamped. Unknown products are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        let Some(quantity) = clamp_quantity(quantity) else {
            self.remove_from_cart(product_id);
            return;
        };

        if let Some(item) = self.find_mut(product_id) {
            item.set_quantity(quantity);

            debug!(%product_id, quantity = quantity.get(), "updated cart line quantity");
        }
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        debug!(lines = self.items.len(), "cleared cart");

        self.items.clear();
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity()))
            .sum()
    }

    /// Sum of every line's effective unit price multiplied by its quantity.
    #[must_use]
    pub fn total_amount(&self) -> Money<'static, Currency> {
        total_price(self.items.iter().map(CartItem::line_total), self.currency)
    }

    /// Get the line for `product_id`.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items
            .iter()
            .find(|item| item.product_id() == product_id)
    }

    /// Check whether the cart has a line for `product_id`.
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Iterate over the lines in the order they were first added.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// Get the number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn find_mut(&mut self, product_id: ProductId) -> Option<&mut CartItem> {
        self.items
            .iter_mut()
            .find(|item| item.product_id() == product_id)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// `None` for quantities that should remove the line.
fn clamp_quantity(quantity: i64) -> Option<NonZeroU32> {
    if quantity <= 0 {
        return None;
    }

    let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

    NonZeroU32::new(quantity)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{NGN, USD};
    use testresult::TestResult;

    use crate::products::ProductError;

    use super::*;

    fn product(title: &str, price: i64) -> Result<Product, ProductError> {
        Product::new(ProductId::random(), title, Money::from_minor(price, NGN))
    }

    fn discounted(title: &str, price: i64, discount: i64) -> Result<Product, ProductError> {
        let discount = Money::from_minor(discount, NGN);

        product(title, price)?.with_discount_price(discount)
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new(NGN);

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_amount(), Money::from_minor(0, NGN));
        assert_eq!(cart.currency(), NGN);
    }

    #[test]
    fn adding_same_product_accumulates_quantity() -> TestResult {
        let a = product("A", 1000_00)?;
        let mut cart = Cart::new(NGN);

        for expected in 1..=5 {
            cart.add_to_cart(a.clone());

            assert_eq!(cart.item_count(), expected);
            assert_eq!(cart.len(), 1);
        }

        Ok(())
    }

    #[test]
    fn adding_twice_totals_twice_the_price() -> TestResult {
        let a = product("A", 1000_00)?;
        let mut cart = Cart::new(NGN);

        cart.add_to_cart(a.clone());
        cart.add_to_cart(a.clone());

        let item = cart.get(a.id()).ok_or("missing line")?;

        assert_eq!(item.quantity(), 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_amount(), Money::from_minor(2000_00, NGN));

        Ok(())
    }

    #[test]
    fn update_quantity_sets_absolute_value() -> TestResult {
        let b = discounted("B", 2000_00, 1500_00)?;
        let mut cart = Cart::new(NGN);

        cart.add_to_cart(b.clone());
        cart.update_quantity(b.id(), 3);

        assert_eq!(cart.get(b.id()).map(CartItem::quantity), Some(3));
        assert_eq!(cart.total_amount(), Money::from_minor(4500_00, NGN));

        cart.update_quantity(b.id(), 1);

        assert_eq!(cart.item_count(), 1);

        Ok(())
    }

    #[test]
    fn update_quantity_to_zero_or_less_removes() -> TestResult {
        let a = product("A", 1000_00)?;
        let b = product("B", 2000_00)?;
        let mut cart = Cart::new(NGN);

        cart.add_to_cart(a.clone());
        cart.add_to_cart(b.clone());

        cart.update_quantity(a.id(), 0);
        assert!(!cart.contains(a.id()));

        cart.update_quantity(b.id(), -4);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);

        Ok(())
    }

    #[test]
    fn update_quantity_of_unknown_product_is_noop() -> TestResult {
        let a = product("A", 1000_00)?;
        let mut cart = Cart::new(NGN);

        cart.add_to_cart(a);
        cart.update_quantity(ProductId::random(), 7);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 1);

        Ok(())
    }

    #[test]
    fn update_quantity_clamps_huge_values() -> TestResult {
        let a = product("A", 1)?;
        let mut cart = Cart::new(NGN);

        cart.add_to_cart(a.clone());
        cart.update_quantity(a.id(), i64::MAX);

        assert_eq!(cart.item_count(), u64::from(u32::MAX));

        Ok(())
    }

    #[test]
    fn changing_one_quantity_leaves_other_lines_alone() -> TestResult {
        let a = product("A", 1000_00)?;
        let b = discounted("B", 2000_00, 1500_00)?;
        let mut cart = Cart::new(NGN);

        cart.add_to_cart(a.clone());
        cart.add_to_cart(b.clone());
        assert_eq!(cart.total_amount(), Money::from_minor(2500_00, NGN));

        cart.update_quantity(a.id(), 4);

        assert_eq!(cart.total_amount(), Money::from_minor(5500_00, NGN));
        assert_eq!(
            cart.get(b.id()).map(CartItem::line_total),
            Some(Money::from_minor(1500_00, NGN))
        );

        Ok(())
    }

    #[test]
    fn remove_from_cart_keeps_other_lines() -> TestResult {
        let a = product("A", 1000_00)?;
        let b = discounted("B", 2000_00, 1500_00)?;
        let mut cart = Cart::new(NGN);

        cart.add_to_cart(a.clone());
        cart.add_to_cart(a.clone());
        cart.add_to_cart(b.clone());
        cart.update_quantity(b.id(), 3);

        cart.remove_from_cart(a.id());

        assert_eq!(cart.len(), 1);
        assert!(cart.contains(b.id()));
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total_amount(), Money::from_minor(4500_00, NGN));

        Ok(())
    }

    #[test]
    fn remove_unknown_product_is_noop() -> TestResult {
        let mut cart = Cart::new(NGN);
        cart.add_to_cart(product("A", 1000_00)?);

        cart.remove_from_cart(ProductId::random());

        assert_eq!(cart.len(), 1);

        Ok(())
    }

    #[test]
    fn clear_cart_zeroes_everything() -> TestResult {
        let mut cart = Cart::new(NGN);
        cart.add_to_cart(product("A", 1000_00)?);
        cart.add_to_cart(discounted("B", 2000_00, 1500_00)?);

        cart.clear_cart();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_amount(), Money::from_minor(0, NGN));

        Ok(())
    }

    #[test]
    fn product_in_other_currency_is_ignored() -> TestResult {
        let mut cart = Cart::new(NGN);
        let dollars = Product::new(ProductId::random(), "Import", Money::from_minor(10_00, USD))?;

        cart.add_to_cart(dollars);

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn iter_returns_lines_in_insertion_order() -> TestResult {
        let a = product("A", 100)?;
        let b = product("B", 200)?;
        let c = product("C", 300)?;
        let mut cart = Cart::new(NGN);

        cart.add_to_cart(b.clone());
        cart.add_to_cart(a.clone());
        cart.add_to_cart(c.clone());
        cart.add_to_cart(b.clone());

        let titles: Vec<&str> = cart.iter().map(|item| item.product().title()).collect();

        assert_eq!(titles, vec!["B", "A", "C"]);

        Ok(())
    }
}
