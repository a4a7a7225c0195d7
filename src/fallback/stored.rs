//! [`FallbackBackend`] persisted as a JSON array inside a [`KeyValueStore`].

// self
use crate::{
	_prelude::*,
	fallback::{FallbackBackend, FallbackRequestRecord, accepted_payload},
	store::{FALLBACK_REQUESTS_KEY, KeyValueStore, StoreError},
};

/// Fallback backend that keeps help requests under [`FALLBACK_REQUESTS_KEY`].
///
/// Each create reads the whole array, appends, and writes it back while holding the id
/// lock, so ids stay unique within one process even when two records land in the same
/// millisecond.
pub struct StoredFallback {
	store: Arc<dyn KeyValueStore>,
	last_id: Mutex<u64>,
}
impl StoredFallback {
	/// Creates a backend over `store`.
	pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
		Self { store, last_id: Mutex::new(0) }
	}

	fn load(&self) -> Result<Vec<FallbackRequestRecord>, StoreError> {
		let Some(raw) = self.store.get(FALLBACK_REQUESTS_KEY)? else {
			return Ok(Vec::new());
		};

		serde_json::from_str(&raw).map_err(|e| StoreError::Serialization {
			message: format!("Failed to parse stored help requests: {e}"),
		})
	}

	fn persist(&self, records: &[FallbackRequestRecord]) -> Result<(), StoreError> {
		let raw = serde_json::to_string(records).map_err(|e| StoreError::Serialization {
			message: format!("Failed to serialize help requests: {e}"),
		})?;

		self.store.set(FALLBACK_REQUESTS_KEY, &raw)
	}
}
impl FallbackBackend for StoredFallback {
	fn create_request(
		&self,
		fields: Map<String, Value>,
	) -> Result<FallbackRequestRecord, StoreError> {
		let mut last_id = self.last_id.lock();
		let mut records = self.load()?;
		let created_at = OffsetDateTime::now_utc();
		let stored_max = records.iter().map(|record| record.id).max().unwrap_or(0);
		let id = next_id(unix_millis(created_at), (*last_id).max(stored_max));
		let record = FallbackRequestRecord::open(id, fields, created_at);

		records.push(record.clone());
		self.persist(&records)?;

		*last_id = id;

		Ok(record)
	}

	fn list_requests(&self) -> Result<Vec<FallbackRequestRecord>, StoreError> {
		self.load()
	}

	fn accept_request(&self, _request_id: &str) -> Result<Value, StoreError> {
		Ok(accepted_payload())
	}
}
impl Debug for StoredFallback {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("StoredFallback").field("last_id", &*self.last_id.lock()).finish()
	}
}

fn unix_millis(instant: OffsetDateTime) -> u64 {
	u64::try_from(instant.unix_timestamp_nanos() / 1_000_000).unwrap_or(0)
}

/// Millisecond timestamp, bumped past `last` so ids never repeat.
fn next_id(now_millis: u64, last: u64) -> u64 {
	now_millis.max(last.saturating_add(1))
}
