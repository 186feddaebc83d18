//! The product catalog.
//!
//! The catalog is an immutable, ordered list of products loaded once at
//! startup. Products are grouped by category for display, in the order each
//! category is first seen.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CurrencyCode, Price, ProductId};

/// Errors that can occur when building a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),
    #[error("product {id} is priced in {found:?} but the catalog uses {expected:?}")]
    MixedCurrency {
        id: ProductId,
        expected: CurrencyCode,
        found: CurrencyCode,
    },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Grouping key, used only for display.
    pub category: String,
    /// Image path or URL.
    pub thumbnail: String,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        category: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            thumbnail: thumbnail.into(),
        }
    }
}

/// Products sharing a category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub name: &'a str,
    pub products: Vec<&'a Product>,
}

/// The static, ordered product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an ordered list of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if two products share an id,
    /// or [`CatalogError::MixedCurrency`] if a product is not priced in the
    /// currency of the first one. Cart totals are only meaningful in a single
    /// currency.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        let expected = products.first().map(|product| product.price.currency_code());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
            let found = product.price.currency_code();
            if let Some(expected) = expected.filter(|&expected| expected != found) {
                return Err(CatalogError::MixedCurrency {
                    id: product.id,
                    expected,
                    found,
                });
            }
        }
        Ok(Self { products })
    }

    /// Load a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the input is not a valid product list
    /// (including negative prices), or any error [`Catalog::new`] returns.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The built-in GreenThumb houseplant catalog.
    #[must_use]
    pub fn greenthumb() -> Self {
        let plant = |id, name: &str, dollars, category: &str, thumbnail: &str| {
            Product::new(
                ProductId::new(id),
                name,
                Price::usd(dollars),
                category,
                thumbnail,
            )
        };

        Self {
            products: vec![
                plant(1, "Monstera", 20, "Tropical", "/static/plant_1.jpg"),
                plant(2, "Fiddle Leaf Fig", 25, "Tropical", "/static/plant_2.jpg"),
                plant(3, "Snake Plant", 15, "Succulent", "/static/plant_3.jpeg"),
                plant(4, "Aloe Vera", 12, "Succulent", "/static/plant_4.jpg"),
                plant(5, "English Ivy", 18, "Vine", "/static/plant_5.jpeg"),
                plant(6, "Pothos", 14, "Vine", "/static/plant_6.jpg"),
            ],
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Products grouped by category, preserving first-seen category order.
    #[must_use]
    pub fn by_category(&self) -> Vec<CategoryGroup<'_>> {
        self.categories()
            .into_iter()
            .map(|name| CategoryGroup {
                name,
                products: self
                    .products
                    .iter()
                    .filter(|product| product.category == name)
                    .collect(),
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::greenthumb()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_greenthumb_catalog() {
        let catalog = Catalog::greenthumb();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.categories(), vec!["Tropical", "Succulent", "Vine"]);

        let monstera = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(monstera.name, "Monstera");
        assert_eq!(monstera.price, Price::usd(20));
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_by_category_preserves_first_seen_order() {
        let catalog = Catalog::new(vec![
            Product::new(ProductId::new(1), "A", Price::usd(1), "Vine", "/a.jpg"),
            Product::new(ProductId::new(2), "B", Price::usd(2), "Tropical", "/b.jpg"),
            Product::new(ProductId::new(3), "C", Price::usd(3), "Vine", "/c.jpg"),
        ])
        .unwrap();

        let groups = catalog.by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Vine");
        let vine_ids: Vec<i32> = groups[0].products.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(vine_ids, vec![1, 3]);
        assert_eq!(groups[1].name, "Tropical");
        assert_eq!(groups[1].products.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![
            Product::new(ProductId::new(1), "A", Price::usd(1), "Vine", "/a.jpg"),
            Product::new(ProductId::new(1), "B", Price::usd(2), "Vine", "/b.jpg"),
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateProduct(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_mixed_currencies_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "price": {"amount": "10"},
             "category": "Vine", "thumbnail": "/a.jpg"},
            {"id": 2, "name": "B", "price": {"amount": "10", "currency_code": "GBP"},
             "category": "Vine", "thumbnail": "/b.jpg"}
        ]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MixedCurrency {
                id,
                expected: CurrencyCode::USD,
                found: CurrencyCode::GBP,
            } if id == ProductId::new(2)
        ));
        assert_eq!(
            err.to_string(),
            "product 2 is priced in GBP but the catalog uses USD"
        );
    }

    #[test]
    fn test_single_foreign_currency_accepted() {
        let gbp = Price::try_new(rust_decimal::Decimal::from(10), CurrencyCode::GBP).unwrap();
        let catalog = Catalog::new(vec![
            Product::new(ProductId::new(1), "A", gbp, "Vine", "/a.jpg"),
            Product::new(ProductId::new(2), "B", gbp.times(2), "Vine", "/b.jpg"),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 10, "name": "Cactus", "price": {"amount": "9.50"},
             "category": "Succulent", "thumbnail": "/cactus.jpg"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].price.to_string(), "$9.50");

        let negative = r#"[{"id": 1, "name": "X", "price": {"amount": "-1"},
             "category": "Vine", "thumbnail": "/x.jpg"}]"#;
        assert!(matches!(
            Catalog::from_json(negative),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.by_category().is_empty());
    }
}
