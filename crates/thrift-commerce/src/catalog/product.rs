//! Product types.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::money::Money;

/// A sellable piece in the catalog.
///
/// Products are immutable inputs to the storefront: the catalog defines
/// them and the cart snapshots them, so later catalog edits never change
/// what a shopper already agreed to pay.
///
/// Serialized field names are camelCase to stay compatible with the
/// snapshot layout the storefront has always persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier across the whole catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Name of the category this piece hangs on.
    pub category: String,
    /// Price in minor units.
    pub price: Money,
    /// Primary display image reference (opaque, not validated).
    pub image: String,
    /// Ordered size labels available for this piece, when sized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    /// Free-text description for the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Every image reference for the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_images: Option<Vec<String>>,
}

impl Product {
    /// Create a product with the required fields.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            image: image.into(),
            sizes: None,
            description: None,
            all_images: None,
        }
    }

    /// Set the available sizes.
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.sizes = Some(sizes.into_iter().map(Into::into).collect());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the full image list.
    pub fn with_all_images(mut self, images: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.all_images = Some(images.into_iter().map(Into::into).collect());
        self
    }

    /// Check whether this piece comes in sizes.
    pub fn has_sizes(&self) -> bool {
        self.sizes.as_ref().is_some_and(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let product = Product::new(1, "Contrast T-Shirt - View 1", "Contrast T-Shirt",
            Money::from_rupees(999), "/contrast-tshirt-1.jpg")
            .with_sizes(["M", "L", "XL"])
            .with_description("Vintage Contrast T-Shirt, excellent condition.");

        assert_eq!(product.id, ProductId::new(1));
        assert!(product.has_sizes());
        assert_eq!(product.sizes.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_product_without_sizes() {
        let product = Product::new(301, "Tote Bag - View 1", "Tote Bag",
            Money::from_rupees(1999), "/tote-bag-1.jpg");
        assert!(!product.has_sizes());
    }

    #[test]
    fn test_optional_fields_omitted_from_json() {
        let product = Product::new(301, "Tote Bag - View 1", "Tote Bag",
            Money::from_rupees(1999), "/tote-bag-1.jpg");
        let raw = serde_json::to_string(&product).unwrap();

        assert!(!raw.contains("sizes"));
        assert!(!raw.contains("description"));
        assert!(!raw.contains("allImages"));
    }

    #[test]
    fn test_camel_case_field_names() {
        let product = Product::new(1, "Piece", "Rack", Money::from_rupees(1), "/p.jpg")
            .with_all_images(["/p.jpg", "/p-b.jpg"]);
        let raw = serde_json::to_string(&product).unwrap();

        assert!(raw.contains("\"allImages\""));
    }
}
