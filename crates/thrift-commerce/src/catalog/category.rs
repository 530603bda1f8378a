//! Category types for product organization.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::Money;

/// A rack of related pieces, ordered as merchandised.
///
/// Categories are flat: each owns its products outright, and products
/// reference the category by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category name, unique within the catalog.
    pub name: String,
    /// Base price for the rack; individual pieces usually repeat it.
    pub price: Money,
    /// Marketing copy for the rack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered size labels shared by the rack, when sized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    /// The pieces on this rack, in merchandising order.
    pub products: Vec<Product>,
}

impl Category {
    /// Create an empty category.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
            description: None,
            sizes: None,
            products: Vec::new(),
        }
    }

    /// Set the marketing copy.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the shared size labels.
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.sizes = Some(sizes.into_iter().map(Into::into).collect());
        self
    }

    /// Set the products on this rack.
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    /// Number of pieces on this rack.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Check whether the rack is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
