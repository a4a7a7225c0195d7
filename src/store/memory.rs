//! Thread-safe in-memory [`KeyValueStore`] for tests, demos, and browser-like session storage.

// self
use crate::{
	_prelude::*,
	store::{KeyValueStore, StoreError},
};

type StoreMap = Arc<RwLock<HashMap<String, String>>>;

/// Storage backend that keeps entries in-process; operations never fail.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(StoreMap);
impl MemoryStore {
	/// Number of stored entries.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns `true` when the store holds no entries.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}
}
impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.0.read().get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
		self.0.write().insert(key.to_owned(), value.to_owned());

		Ok(())
	}

	fn remove(&self, key: &str) -> Result<(), StoreError> {
		self.0.write().remove(key);

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn set_get_remove() {
		let store = MemoryStore::default();

		assert!(store.is_empty());

		store.set("authToken", "abc").expect("Memory store set should succeed.");

		assert_eq!(store.get("authToken").expect("Memory store get should succeed."), Some("abc".into()));
		assert_eq!(store.len(), 1);

		store.remove("authToken").expect("Memory store remove should succeed.");
		store.remove("authToken").expect("Removing a missing key should succeed.");

		assert_eq!(store.get("authToken").expect("Memory store get should succeed."), None);
	}

	#[test]
	fn clones_share_entries() {
		let store = MemoryStore::default();
		let alias = store.clone();

		alias.set("k", "v").expect("Memory store set should succeed.");

		assert_eq!(store.get("k").expect("Memory store get should succeed."), Some("v".into()));
	}
}
