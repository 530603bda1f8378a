//! Cart persistence session.
//!
//! Wraps a [`Cart`] together with a key-value store. Every mutation is
//! applied in memory first and then snapshotted to the store under a
//! fixed key, so the cart a shopper sees never waits on the medium and a
//! failed write costs nothing but durability.

use thrift_kv::{KeyValueStore, KeyValueStoreExt};
use tracing::{debug, warn};

use crate::cart::{Cart, LineItem};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Fixed storage slot for the cart snapshot.
pub const CART_STORAGE_KEY: &str = "bssfashion_cart_v1";

/// A cart bound to a persistence medium.
#[derive(Debug)]
pub struct CartSession<S> {
    cart: Cart,
    store: S,
}

impl<S: KeyValueStore> CartSession<S> {
    /// Restore the session from `store`, starting empty when no usable
    /// snapshot exists.
    pub fn restore(store: S) -> Self {
        Self::restore_or(store, Cart::new())
    }

    /// Restore the session from `store`, falling back to `fallback` when
    /// the slot is missing, unreadable, or unparseable.
    pub fn restore_or(store: S, fallback: Cart) -> Self {
        let cart = match store.get_json::<Vec<LineItem>>(CART_STORAGE_KEY) {
            Ok(Some(items)) => Cart::from_items(items),
            Ok(None) => fallback,
            Err(err) => {
                debug!(key = CART_STORAGE_KEY, error = %err, "cart snapshot unusable, starting fresh");
                fallback
            }
        };
        Self { cart, store }
    }

    /// The current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Consume the session, returning the cart and the store.
    pub fn into_parts(self) -> (Cart, S) {
        (self.cart, self.store)
    }

    /// Add one unit of `product` (with an optional size) and snapshot.
    pub fn add(&mut self, product: &Product, size: Option<&str>) {
        self.cart.add(product, size);
        self.persist_best_effort();
    }

    /// Remove the line matching `(id, size)` and snapshot.
    pub fn remove(&mut self, id: ProductId, size: Option<&str>) -> bool {
        let removed = self.cart.remove(id, size);
        self.persist_best_effort();
        removed
    }

    /// Set the quantity for `(id, size)` and snapshot; zero or less
    /// removes the line.
    pub fn update_quantity(&mut self, id: ProductId, size: Option<&str>, quantity: i64) -> bool {
        let changed = self.cart.update_quantity(id, size, quantity);
        self.persist_best_effort();
        changed
    }

    /// Empty the cart and snapshot.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist_best_effort();
    }

    /// Write the current line items to the store.
    ///
    /// Mutating operations call this internally and swallow failures;
    /// hosts that need to observe a flush can call it directly.
    pub fn persist(&self) -> Result<(), CommerceError> {
        self.store
            .set_json(CART_STORAGE_KEY, &self.cart.items())
            .map_err(CommerceError::from)
    }

    fn persist_best_effort(&self) {
        if let Err(err) = self.persist() {
            warn!(key = CART_STORAGE_KEY, error = %err, "failed to persist cart snapshot");
        }
    }
}
