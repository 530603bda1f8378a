//! Type-safe key-value snapshot storage for the BSS Fashion storefront.
//!
//! Provides a simple, ergonomic API for persisting small snapshots (a cart,
//! a preference blob) in whatever medium a host has: a process-local map, a
//! JSON file, or the browser's `localStorage` behind the same trait.
//!
//! # Example
//!
//! ```
//! use thrift_kv::{KeyValueStore, KeyValueStoreExt, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Snapshot {
//!     items: Vec<String>,
//! }
//!
//! let store = MemoryStore::new();
//!
//! // Store a value
//! store.set_json("cart", &Snapshot { items: vec!["tote".into()] })?;
//!
//! // Retrieve a value
//! let snapshot: Option<Snapshot> = store.get_json("cart")?;
//! assert!(snapshot.is_some());
//!
//! // Delete a value
//! store.delete("cart")?;
//! # Ok::<(), thrift_kv::StoreError>(())
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::{KeyValueStore, KeyValueStoreExt};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, KeyValueStore, KeyValueStoreExt, MemoryStore, StoreError};
}
