//! The key-value collaborator the ledger runs against.
//!
//! The ledger only ever calls [`KvStore::get`] and [`KvStore::put`]. Anything
//! below that (replication, durability, consensus) belongs to the store.

mod memory;

pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Byte-oriented state storage.
///
/// `get` returns `Ok(None)` for an absent key; `Err` is reserved for the
/// store itself failing.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).put(key, value)
    }
}

/// Decode the JSON value at `key`, or `T::default()` when it is absent or
/// does not decode.
///
/// Undecodable data is logged and then treated exactly like a missing key.
pub fn load_or_default<S, T>(store: &S, key: &str) -> Result<T, StoreError>
where
    S: KvStore + ?Sized,
    T: DeserializeOwned + Default,
{
    let Some(bytes) = store.get(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!("Stored value at {} did not decode, treating as empty: {}", key, e);
            Ok(T::default())
        }
    }
}

/// Encode `value` as JSON and overwrite `key` with it.
pub fn save<S, T>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: KvStore + ?Sized,
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec(value)?;
    store.put(key, &bytes)
}

/// Append `item` to the JSON array stored at `key` and write the whole array
/// back. Returns the collection as written.
///
/// This is a read-modify-write with no locking: it is only correct when the
/// host applies invocations one at a time. Two appends to *different* keys are
/// two independent writes; if the second fails the first stays committed.
pub fn append_to_collection<S, T>(store: &S, key: &str, item: T) -> Result<Vec<T>, StoreError>
where
    S: KvStore + ?Sized,
    T: Serialize + DeserializeOwned,
{
    let mut items: Vec<T> = load_or_default(store, key)?;
    items.push(item);
    save(store, key, &items)?;
    Ok(items)
}
