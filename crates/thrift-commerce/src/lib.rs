//! Storefront domain types and logic for the BSS Fashion vintage shop.
//!
//! This crate provides the in-memory core of the storefront:
//!
//! - **Catalog**: read-only categories and the pieces on each rack
//! - **Cart**: line items keyed by product + size, derived count/total,
//!   and a persistence session over any [`thrift_kv::KeyValueStore`]
//! - **Search**: free-text + category filtering of the catalog
//!
//! # Example
//!
//! ```
//! use thrift_commerce::prelude::*;
//! use thrift_kv::MemoryStore;
//!
//! let shoes = Category::new("Shoes", Money::from_rupees(2999))
//!     .with_sizes(["UK 43", "UK 44", "UK 45"])
//!     .with_products(vec![Product::new(
//!         201,
//!         "Shoes - View 1",
//!         "Shoes",
//!         Money::from_rupees(2999),
//!         "/shoes-1.jpg",
//!     )]);
//! let catalog = Catalog::new(vec![shoes]);
//!
//! // Restore the cart (empty on first visit) and add a piece.
//! let mut session = CartSession::restore(MemoryStore::new());
//! let product = catalog.find_product(ProductId::new(201)).unwrap();
//! session.add(product, Some("UK 43"));
//! assert_eq!(session.cart().item_count(), 1);
//!
//! // Filter the catalog as the shopper types.
//! let results = BrowseQuery::new().with_text("shoe").execute(&catalog);
//! assert_eq!(results.product_count(), 1);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartSession, LineItem, CART_STORAGE_KEY};

    // Search
    pub use crate::search::{BrowseQuery, BrowseResults};
}
