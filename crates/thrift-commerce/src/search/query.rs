//! Browse query over the catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Category};
use crate::search::BrowseResults;

/// Shopper-facing filter state: free search text plus an optional
/// category selection.
///
/// The raw text is kept as typed; normalization (trim + case-fold)
/// happens at execution time. A blank category selection means "all
/// categories".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseQuery {
    /// Raw search text as typed.
    pub text: String,
    /// Category name to restrict to, compared exactly.
    pub category: Option<String>,
}

impl BrowseQuery {
    /// Create an unfiltered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Restrict to a single category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The search text normalized for matching.
    pub fn normalized_text(&self) -> String {
        self.text.trim().to_lowercase()
    }

    /// The effective category selection; blank collapses to none.
    pub fn selected_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Check whether this query filters nothing out.
    pub fn is_unfiltered(&self) -> bool {
        self.normalized_text().is_empty() && self.selected_category().is_none()
    }

    /// Run this query against `catalog`.
    ///
    /// A product survives when the normalized text is empty or appears in
    /// its name or its category's name; categories left without products
    /// are dropped, then the category selection is applied by exact name.
    /// Catalog order is preserved, and an empty result is a normal
    /// outcome, not an error.
    pub fn execute(&self, catalog: &Catalog) -> BrowseResults {
        let text = self.normalized_text();
        let selected = self.selected_category();

        let categories = catalog
            .categories()
            .iter()
            .filter(|category| selected.map_or(true, |name| category.name == name))
            .filter_map(|category| {
                let rack_matches = category.name.to_lowercase().contains(&text);
                let products: Vec<_> = category
                    .products
                    .iter()
                    .filter(|product| {
                        text.is_empty()
                            || rack_matches
                            || product.name.to_lowercase().contains(&text)
                    })
                    .cloned()
                    .collect();
                if products.is_empty() {
                    None
                } else {
                    Some(Category {
                        name: category.name.clone(),
                        price: category.price,
                        description: category.description.clone(),
                        sizes: category.sizes.clone(),
                        products,
                    })
                }
            })
            .collect();

        BrowseResults { categories }
    }
}
