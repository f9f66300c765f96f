//! Catalog Filters

use std::{cmp::Ordering, str::FromStr};

use rusty_money::{Money, iso::Currency};
use tracing::debug;

use crate::{
    catalog::{Catalog, CatalogError},
    products::Product,
};

/// Order for filtered products, parsed from `column:direction`.
///
/// A missing or unrecognised direction sorts descending, as the storefront's
/// listing query does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    /// Cheapest list price first
    PriceAscending,

    /// Dearest list price first
    PriceDescending,

    /// Titles A to Z
    TitleAscending,

    /// Titles Z to A
    TitleDescending,
}

impl ProductSort {
    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::PriceAscending => list_price(a).cmp(&list_price(b)),
            Self::PriceDescending => list_price(b).cmp(&list_price(a)),
            Self::TitleAscending => a.title().cmp(b.title()),
            Self::TitleDescending => b.title().cmp(a.title()),
        }
    }
}

impl FromStr for ProductSort {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, direction) = s.split_once(':').unwrap_or((s, ""));
        let ascending = direction == "asc";

        match (column, ascending) {
            ("price", true) => Ok(Self::PriceAscending),
            ("price", false) => Ok(Self::PriceDescending),
            ("title", true) => Ok(Self::TitleAscending),
            ("title", false) => Ok(Self::TitleDescending),
            _ => Err(CatalogError::InvalidSort(s.to_string())),
        }
    }
}

fn list_price(product: &Product) -> i64 {
    product.price().to_minor_units()
}

/// Criteria for [`Catalog::filter`].
///
/// Price bounds are inclusive and apply to the list price.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    category: Option<String>,
    min_price: Option<Money<'static, Currency>>,
    max_price: Option<Money<'static, Currency>>,
    sort: Option<ProductSort>,
}

impl ProductFilter {
    /// Only products in `category`.
    #[must_use]
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Only products listed at `price` or more.
    #[must_use]
    pub fn min_price(mut self, price: Money<'static, Currency>) -> Self {
        self.min_price = Some(price);
        self
    }

    /// Only products listed at `price` or less.
    #[must_use]
    pub fn max_price(mut self, price: Money<'static, Currency>) -> Self {
        self.max_price = Some(price);
        self
    }

    /// Sort the matches.
    #[must_use]
    pub fn sorted(mut self, sort: ProductSort) -> Self {
        self.sort = Some(sort);
        self
    }
}

impl Catalog {
    /// Products matching `filter`, in catalog key order unless a sort is set.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CurrencyMismatch`] if a price bound is not in the
    /// catalog's currency.
    pub fn filter(&self, filter: &ProductFilter) -> Result<Vec<&Product>, CatalogError> {
        let min = self.bound(filter.min_price.as_ref())?;
        let max = self.bound(filter.max_price.as_ref())?;

        let mut products: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| {
                filter
                    .category
                    .as_deref()
                    .is_none_or(|category| product.category() == category)
            })
            .filter(|product| {
                let price = list_price(product);

                min.is_none_or(|min| price >= min) && max.is_none_or(|max| price <= max)
            })
            .collect();

        if let Some(sort) = filter.sort {
            products.sort_by(|a, b| sort.compare(a, b));
        }

        debug!(matches = products.len(), ?filter, "filtered catalog");

        Ok(products)
    }

    fn bound(
        &self,
        price: Option<&Money<'static, Currency>>,
    ) -> Result<Option<i64>, CatalogError> {
        let Some(price) = price else {
            return Ok(None);
        };

        if price.currency() != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                self.currency.iso_alpha_code.to_string(),
                price.currency().iso_alpha_code.to_string(),
            ));
        }

        Ok(Some(price.to_minor_units()))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{NGN, USD};
    use testresult::TestResult;

    use super::*;

    const CATALOG: &str = "
products:
  blender:
    id: 2c7e4d10-9b1a-4f3e-8a55-1d2e3f4a5b60
    title: Blender
    price: 4000 NGN
    category: kitchen
  fan:
    id: 0b5d8a52-4d1e-4f51-9a3e-6c1f1b2e9a10
    title: Standing Fan
    price: 2000 NGN
    discount_price: 1500 NGN
    category: appliances
  kettle:
    id: 6f1b7c1e-2a44-4c55-8f0e-0d1c2b3a4f50
    title: Electric Kettle
    price: 1000 NGN
    category: kitchen
";

    fn ngn(major: i64) -> Money<'static, Currency> {
        Money::from_minor(major * 100, NGN)
    }

    fn titles(products: &[&Product]) -> Vec<String> {
        products
            .iter()
            .map(|product| product.title().to_string())
            .collect()
    }

    #[test]
    fn no_criteria_keeps_key_order() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG)?;

        let products = catalog.filter(&ProductFilter::default())?;

        assert_eq!(
            titles(&products),
            ["Blender", "Standing Fan", "Electric Kettle"]
        );

        Ok(())
    }

    #[test]
    fn price_bounds_are_inclusive_on_list_price() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG)?;
        let filter = ProductFilter::default()
            .min_price(ngn(1000))
            .max_price(ngn(2000));

        let products = catalog.filter(&filter)?;

        assert_eq!(titles(&products), ["Standing Fan", "Electric Kettle"]);

        Ok(())
    }

    #[test]
    fn discounted_price_does_not_count_against_bounds() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG)?;
        let filter = ProductFilter::default().max_price(ngn(1500));

        let products = catalog.filter(&filter)?;

        assert_eq!(titles(&products), ["Electric Kettle"]);

        Ok(())
    }

    #[test]
    fn category_and_sort_combine() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG)?;
        let filter = ProductFilter::default()
            .in_category("kitchen")
            .sorted("price:asc".parse()?);

        let products = catalog.filter(&filter)?;

        assert_eq!(titles(&products), ["Electric Kettle", "Blender"]);

        Ok(())
    }

    #[test]
    fn title_sort_descending() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG)?;
        let filter = ProductFilter::default()
            .sorted(ProductSort::TitleDescending);

        let products = catalog.filter(&filter)?;

        assert_eq!(
            titles(&products),
            ["Standing Fan", "Electric Kettle", "Blender"]
        );

        Ok(())
    }

    #[test]
    fn bound_in_another_currency_is_rejected() -> TestResult {
        let catalog = Catalog::from_yaml(CATALOG)?;
        let dollars = Money::from_minor(10, USD);
        let filter = ProductFilter::default().min_price(dollars);

        assert!(matches!(
            catalog.filter(&filter),
            Err(CatalogError::CurrencyMismatch(expected, found))
                if expected == "NGN" && found == "USD"
        ));

        Ok(())
    }

    #[test]
    fn parses_sort_columns_and_directions() -> TestResult {
        let cases = [
            ("price:asc", ProductSort::PriceAscending),
            ("price:desc", ProductSort::PriceDescending),
            ("title:asc", ProductSort::TitleAscending),
            ("title", ProductSort::TitleDescending),
        ];

        for (sort, expected) in cases {
            assert_eq!(sort.parse::<ProductSort>()?, expected, "{sort}");
        }

        Ok(())
    }

    #[test]
    fn unknown_sort_column_is_rejected() {
        assert!(matches!(
            "rating:asc".parse::<ProductSort>(),
            Err(CatalogError::InvalidSort(sort)) if sort == "rating:asc"
        ));
    }
}
