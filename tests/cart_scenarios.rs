//! Cart behaviour through the public API.
//!
//! Product A costs ₦1,000 with no discount. Product B lists at ₦2,000 and is
//! discounted to ₦1,500, so it contributes ₦1,500 per unit.

use rusty_money::{Money, iso::NGN};
use testresult::TestResult;

use trolley::prelude::*;

fn products() -> Result<(Product, Product), ProductError> {
    let a = Product::new(ProductId::random(), "A", Money::from_minor(1000_00, NGN))?;
    let b = Product::new(ProductId::random(), "B", Money::from_minor(2000_00, NGN))?
        .with_discount_price(Money::from_minor(1500_00, NGN))?;

    Ok((a, b))
}

#[test]
fn adding_twice_accumulates_quantity() -> TestResult {
    let (a, _) = products()?;
    let mut cart = Cart::new(NGN);

    cart.add_to_cart(a.clone());
    cart.add_to_cart(a.clone());

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get(a.id()).map(CartItem::quantity), Some(2));
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total_amount(), Money::from_minor(2000_00, NGN));

    Ok(())
}

#[test]
fn discounted_product_totals_at_discount_price() -> TestResult {
    let (_, b) = products()?;
    let mut cart = Cart::new(NGN);

    cart.add_to_cart(b.clone());
    cart.update_quantity(b.id(), 3);

    assert_eq!(cart.get(b.id()).map(CartItem::quantity), Some(3));
    assert_eq!(cart.total_amount(), Money::from_minor(4500_00, NGN));

    Ok(())
}

#[test]
fn removing_a_line_leaves_the_rest() -> TestResult {
    let (a, b) = products()?;
    let mut cart = Cart::new(NGN);

    cart.add_to_cart(a.clone());
    cart.add_to_cart(b.clone());
    cart.update_quantity(b.id(), 3);
    cart.remove_from_cart(a.id());

    assert!(!cart.contains(a.id()));
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total_amount(), Money::from_minor(4500_00, NGN));

    Ok(())
}

#[test]
fn non_positive_quantities_remove_the_line() -> TestResult {
    let (a, b) = products()?;
    let mut cart = Cart::new(NGN);

    cart.add_to_cart(a.clone());
    cart.add_to_cart(b.clone());
    cart.update_quantity(a.id(), 0);
    cart.update_quantity(b.id(), -4);

    assert!(cart.is_empty());
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total_amount(), Money::from_minor(0, NGN));

    Ok(())
}

#[test]
fn changing_one_quantity_only_moves_its_own_contribution() -> TestResult {
    let (a, b) = products()?;
    let mut cart = Cart::new(NGN);

    cart.add_to_cart(a.clone());
    cart.add_to_cart(b.clone());

    let before = cart.total_amount().to_minor_units();

    cart.update_quantity(a.id(), 5);

    let after = cart.total_amount().to_minor_units();

    assert_eq!(after - before, 4 * 1000_00);

    Ok(())
}

#[test]
fn clearing_resets_every_read() -> TestResult {
    let (a, b) = products()?;
    let mut cart = Cart::new(NGN);

    cart.add_to_cart(a);
    cart.add_to_cart(b);
    cart.clear_cart();

    assert_eq!(cart.iter().count(), 0);
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total_amount(), Money::from_minor(0, NGN));

    Ok(())
}

#[test]
fn unknown_ids_are_ignored() -> TestResult {
    let (a, _) = products()?;
    let mut cart = Cart::new(NGN);

    cart.add_to_cart(a.clone());
    cart.remove_from_cart(ProductId::random());
    cart.update_quantity(ProductId::random(), 7);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.item_count(), 1);

    Ok(())
}
