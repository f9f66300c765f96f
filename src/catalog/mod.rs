//! Catalog
//!
//! Product catalogs loaded from YAML, standing in for the remote products table.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::products::ProductFixture,
    ids::ProductId,
    products::{Product, ProductError},
};

pub mod filter;
pub mod products;

/// Catalog Loading Errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading catalog files
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Two products share an identifier
    #[error("Duplicate product id {id} for key {key}")]
    DuplicateProduct {
        /// Catalog key of the second product
        key: String,
        /// Identifier both products claim
        id: ProductId,
    },

    /// Sort is not `price` or `title` with an optional direction
    #[error("Invalid sort: {0}")]
    InvalidSort(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The catalog defines no products
    #[error("Catalog has no products; currency unknown")]
    Empty,

    /// Product failed validation
    #[error(transparent)]
    Product(#[from] ProductError),
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
struct CatalogFixture {
    products: FxHashMap<String, ProductFixture>,
}

/// A set of products sharing one currency, addressable by catalog key or id.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    keys: Vec<String>,
    by_key: FxHashMap<String, usize>,
    by_id: FxHashMap<ProductId, usize>,
    currency: &'static Currency,
}

impl Catalog {
    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the catalog is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        debug!(path = %path.display(), "loading catalog");

        Self::from_yaml(&contents)
    }

    /// Parse a catalog from YAML text.
    ///
    /// Products are ordered by catalog key.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a price is invalid, products use
    /// different currencies, two products share an id, or there are no products.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

        let mut entries: Vec<(String, ProductFixture)> = fixture.products.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut products = Vec::with_capacity(entries.len());
        let mut keys = Vec::with_capacity(entries.len());
        let mut by_key = FxHashMap::default();
        let mut by_id = FxHashMap::default();
        let mut currency: Option<&'static Currency> = None;

        for (key, product_fixture) in entries {
            let product = Product::try_from(product_fixture)?;

            match currency {
                Some(existing) if existing != product.currency() => {
                    return Err(CatalogError::CurrencyMismatch(
                        existing.iso_alpha_code.to_string(),
                        product.currency().iso_alpha_code.to_string(),
                    ));
                }
                Some(_) => {}
                None => currency = Some(product.currency()),
            }

            let idx = products.len();

            if by_id.insert(product.id(), idx).is_some() {
                return Err(CatalogError::DuplicateProduct {
                    key,
                    id: product.id(),
                });
            }

            by_key.insert(key.clone(), idx);
            keys.push(key);
            products.push(product);
        }

        let currency = currency.ok_or(CatalogError::Empty)?;

        debug!(
            products = products.len(),
            currency = currency.iso_alpha_code,
            "loaded catalog"
        );

        Ok(Self {
            products,
            keys,
            by_key,
            by_id,
            currency,
        })
    }

    /// Get a product by its catalog key.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn get(&self, key: &str) -> Result<&Product, CatalogError> {
        self.by_key
            .get(key)
            .and_then(|idx| self.products.get(*idx))
            .ok_or_else(|| CatalogError::ProductNotFound(key.to_string()))
    }

    /// Get a product by its identifier.
    #[must_use]
    pub fn by_id(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).and_then(|idx| self.products.get(*idx))
    }

    /// Iterate over `(key, product)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Product)> {
        self.keys
            .iter()
            .map(String::as_str)
            .zip(self.products.iter())
    }

    /// Products whose category matches `category`.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |product| product.category() == category)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always false; catalogs with no products fail to load.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency shared by every product.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
