//! Browse results.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Filtered view of the catalog, preserving merchandising order.
///
/// Each surviving category holds only the products that matched; an
/// empty result set is a normal outcome for an unmatched query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BrowseResults {
    /// Categories that survived filtering.
    pub categories: Vec<Category>,
}

impl BrowseResults {
    /// Create empty results.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of categories that survived.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Total number of matching products across all categories.
    pub fn product_count(&self) -> usize {
        self.categories.iter().map(Category::product_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    #[test]
    fn test_empty_results() {
        let results = BrowseResults::empty();
        assert!(results.is_empty());
        assert_eq!(results.len(), 0);
        assert_eq!(results.product_count(), 0);
    }

    #[test]
    fn test_product_count_spans_categories() {
        let results = BrowseResults {
            categories: vec![
                Category::new("Shoes", Money::from_rupees(2999)).with_products(vec![
                    Product::new(201, "Shoes - View 1", "Shoes",
                        Money::from_rupees(2999), "/shoes-1.jpg"),
                    Product::new(202, "Shoes - View 2", "Shoes",
                        Money::from_rupees(2999), "/shoes-2.jpg"),
                ]),
                Category::new("Tote Bag", Money::from_rupees(1999)).with_products(vec![
                    Product::new(301, "Tote Bag - View 1", "Tote Bag",
                        Money::from_rupees(1999), "/tote-bag-1.jpg"),
                ]),
            ],
        };

        assert_eq!(results.len(), 2);
        assert_eq!(results.product_count(), 3);
    }
}
