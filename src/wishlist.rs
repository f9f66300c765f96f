//! Wishlist

use tracing::debug;

use crate::products::{Product, ProductId};

/// Products a shopper has saved for later, in the order they were saved.
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    products: Vec<Product>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `product`. Saving a product twice keeps a single entry.
    pub fn add(&mut self, product: Product) {
        if self.contains(product.id()) {
            return;
        }

        debug!(product_id = %product.id(), "added product to wishlist");

        self.products.push(product);
    }

    /// Forget `product_id`; unknown products are ignored.
    pub fn remove(&mut self, product_id: ProductId) {
        let before = self.products.len();

        self.products.retain(|product| product.id() != product_id);

        if self.products.len() < before {
            debug!(%product_id, "removed product from wishlist");
        }
    }

    /// Flip membership of `product`, returning whether it is now wishlisted.
    pub fn toggle(&mut self, product: Product) -> bool {
        if self.contains(product.id()) {
            self.remove(product.id());
            false
        } else {
            self.add(product);
            true
        }
    }

    /// Check whether `product_id` is wishlisted.
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.products
            .iter()
            .any(|product| product.id() == product_id)
    }

    /// Iterate over saved products.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of saved products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
