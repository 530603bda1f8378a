//! The catalog store: the read-only set of categories the storefront renders.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::{BrowseQuery, BrowseResults};

/// Static, read-only collection of categories.
///
/// Loaded once before first render (hardcoded, from a file, or from a
/// service, the storefront doesn't care) and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from categories, preserving their order.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The categories in merchandising order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Check whether the catalog holds no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of pieces across every category.
    pub fn product_count(&self) -> usize {
        self.categories.iter().map(Category::product_count).sum()
    }

    /// Look up a category by exact name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Look up a category by exact name, as an error when absent.
    pub fn require_category(&self, name: &str) -> Result<&Category, CommerceError> {
        self.category(name)
            .ok_or_else(|| CommerceError::CategoryNotFound(name.to_string()))
    }

    /// Look up a product anywhere in the catalog.
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.categories
            .iter()
            .flat_map(|c| c.products.iter())
            .find(|p| p.id == id)
    }

    /// Look up a product anywhere in the catalog, as an error when absent.
    pub fn require_product(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.find_product(id)
            .ok_or(CommerceError::ProductNotFound(id))
    }

    /// Run a browse query against this catalog.
    pub fn browse(&self, query: &BrowseQuery) -> BrowseResults {
        query.execute(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Category::new("Faux Jacket", Money::from_rupees(2499)).with_products(vec![
                Product::new(101, "Faux Jacket - View 1", "Faux Jacket",
                    Money::from_rupees(2499), "/faux-jacket-1.jpg"),
                Product::new(102, "Faux Jacket - View 2", "Faux Jacket",
                    Money::from_rupees(2499), "/faux-jacket-2.jpg"),
            ]),
            Category::new("Shoes", Money::from_rupees(2999)).with_products(vec![Product::new(
                201, "Shoes - View 1", "Shoes", Money::from_rupees(2999), "/shoes-1.jpg",
            )]),
        ])
    }

    #[test]
    fn test_product_count() {
        assert_eq!(catalog().product_count(), 3);
    }

    #[test]
    fn test_category_lookup() {
        let catalog = catalog();
        assert!(catalog.category("Shoes").is_some());
        assert!(catalog.category("shoes").is_none()); // exact match only
        assert!(matches!(
            catalog.require_category("Hats"),
            Err(CommerceError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn test_product_lookup() {
        let catalog = catalog();
        let product = catalog.find_product(ProductId::new(102)).unwrap();
        assert_eq!(product.name, "Faux Jacket - View 2");

        assert!(catalog.find_product(ProductId::new(999)).is_none());
        assert!(matches!(
            catalog.require_product(ProductId::new(999)),
            Err(CommerceError::ProductNotFound(_))
        ));
    }
}
