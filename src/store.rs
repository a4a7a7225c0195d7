//! Key-value persistence contract and built-in store implementations.
//!
//! The client persists two entries: the bearer token under [`AUTH_TOKEN_KEY`] and, in
//! local-only mode, the JSON-encoded array of fallback request records under
//! [`FALLBACK_REQUESTS_KEY`]. Stores are accessed synchronously and treated as
//! single-writer within one process.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::_prelude::*;

/// Key holding the persisted bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Key holding the JSON array of fallback request records.
pub const FALLBACK_REQUESTS_KEY: &str = "helpRequests";

/// String-keyed storage backend shared by the token lifecycle and the fallback backend.
pub trait KeyValueStore
where
	Self: Send + Sync,
{
	/// Returns the value stored under `key`, if any.
	fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

	/// Stores `value` under `key`, replacing any previous value.
	fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

	/// Removes `key`; removing a missing key is not an error.
	fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Error type produced by [`KeyValueStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Stored data could not be encoded or decoded.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn store_error_messages_carry_payload() {
		let err = StoreError::Serialization { message: "unexpected token".into() };

		assert_eq!(err.to_string(), "Serialization error: unexpected token.");
	}

	#[test]
	fn store_error_can_be_serialized() {
		let payload = serde_json::to_string(&StoreError::Backend { message: "gone".into() })
			.expect("StoreError should serialize to JSON.");

		assert_eq!(payload, r#"{"Backend":{"message":"gone"}}"#);
	}
}
