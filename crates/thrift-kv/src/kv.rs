//! Key-value store abstraction with typed JSON helpers.

use serde::{de::DeserializeOwned, Serialize};

use crate::StoreError;

/// A minimal string-keyed, string-valued store.
///
/// Implementations wrap whatever medium a host provides. All methods take
/// `&self`; implementations use interior mutability where the medium is a
/// process-local structure.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`, if any.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether `key` currently holds a value.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        (**self).exists(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        (**self).exists(key)
    }
}

/// Automatic JSON serialization on top of any [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    /// Read and deserialize the value stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` as JSON and write it under `key`.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_json_round_trip() {
        let store = MemoryStore::new();
        store.set_json("numbers", &vec![1, 2, 3]).unwrap();

        let numbers: Option<Vec<i32>> = store.get_json("numbers").unwrap();
        assert_eq!(numbers, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_json_missing_key() {
        let store = MemoryStore::new();
        let value: Option<Vec<i32>> = store.get_json("absent").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_json_corrupt_value() {
        let store = MemoryStore::new();
        store.set("broken", "{not json").unwrap();

        let result: Result<Option<Vec<i32>>, _> = store.get_json("broken");
        assert!(matches!(result, Err(StoreError::Serialize(_))));
    }

    #[test]
    fn test_store_through_reference() {
        let store = MemoryStore::new();
        let by_ref = &store;
        by_ref.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_store_through_box() {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("key", "value").unwrap();
        assert!(store.exists("key").unwrap());
    }
}
