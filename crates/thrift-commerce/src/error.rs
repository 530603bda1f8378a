//! Commerce error types.
//!
//! Cart and browse operations themselves never fail; errors surface only
//! from the persistence plumbing and catalog lookups around them.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Category not found in the catalog.
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    /// Storage layer failure.
    #[error("storage error: {0}")]
    Storage(#[from] thrift_kv::StoreError),
}
