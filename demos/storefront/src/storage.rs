//! Storage selection for the storefront host.
//!
//! Browser builds persist through `localStorage`; every other build keeps
//! the cart in memory for the lifetime of the process. Either way the
//! cart session only sees the [`thrift_kv::KeyValueStore`] trait.

use thrift_kv::{KeyValueStore, MemoryStore};

/// The store handle the app threads through the cart session.
pub type StoreHandle = Box<dyn KeyValueStore>;

/// Open the best medium available on this host.
pub fn open_store() -> StoreHandle {
    #[cfg(target_arch = "wasm32")]
    {
        match browser::BrowserStore::open() {
            Ok(store) => return Box::new(store),
            Err(err) => {
                tracing::warn!(error = %err, "localStorage unavailable, cart will not survive reload");
            }
        }
    }
    Box::new(MemoryStore::new())
}

#[cfg(target_arch = "wasm32")]
mod browser {
    //! `localStorage`-backed store.

    use thrift_kv::{KeyValueStore, StoreError};

    pub struct BrowserStore {
        storage: web_sys::Storage,
    }

    impl BrowserStore {
        /// Bind to the window's `localStorage`.
        pub fn open() -> Result<Self, StoreError> {
            let storage = web_sys::window()
                .ok_or_else(|| StoreError::Open("no window".to_string()))?
                .local_storage()
                .map_err(|_| StoreError::Open("localStorage blocked".to_string()))?
                .ok_or_else(|| StoreError::Open("localStorage disabled".to_string()))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.storage
                .get_item(key)
                .map_err(|_| StoreError::Backend("localStorage read failed".to_string()))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.storage
                .set_item(key, value)
                .map_err(|_| StoreError::Backend("localStorage write failed".to_string()))
        }

        fn delete(&self, key: &str) -> Result<(), StoreError> {
            self.storage
                .remove_item(key)
                .map_err(|_| StoreError::Backend("localStorage delete failed".to_string()))
        }
    }
}
