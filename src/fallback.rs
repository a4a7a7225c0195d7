//! Local-only stand-in for the backend.
//!
//! When no backend is configured, [`dispatch`] classifies the endpoint once via
//! [`FallbackRoute::classify`] and forwards it to a [`FallbackBackend`]. The backend
//! exposes three capabilities over the help-request collection (create, list, accept);
//! every other route receives a generic success payload. Nothing on this path talks to
//! the network, and only store failures can make it fail.

mod stored;

pub use stored::*;

// self
use crate::{
	_prelude::*,
	http::HttpMethod,
	request::RequestOptions,
	store::StoreError,
};

/// Help-request record created in local-only mode.
///
/// Serialized as a flat JSON object: `id`, the caller's fields, `status`, and `createdAt`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FallbackRequestRecord {
	/// Unique, monotonically increasing identifier (millisecond timestamp based).
	pub id: u64,
	/// Caller-supplied fields, minus the reserved ones.
	#[serde(flatten)]
	pub fields: Map<String, Value>,
	/// Lifecycle status; always `"open"` at creation.
	pub status: String,
	/// Creation instant, RFC 3339 / ISO-8601.
	#[serde(rename = "createdAt", with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}
impl FallbackRequestRecord {
	/// Status assigned at creation.
	pub const OPEN: &'static str = "open";
	/// Field names the record owns; caller values under these names are discarded.
	pub const RESERVED_FIELDS: [&'static str; 3] = ["id", "status", "createdAt"];

	/// Builds an open record from caller fields.
	pub fn open(id: u64, mut fields: Map<String, Value>, created_at: OffsetDateTime) -> Self {
		for reserved in Self::RESERVED_FIELDS {
			fields.remove(reserved);
		}

		Self { id, fields, status: Self::OPEN.into(), created_at }
	}
}

/// Capabilities a local-only backend offers over the help-request collection.
pub trait FallbackBackend
where
	Self: Send + Sync,
{
	/// Appends a new open record built from `fields` and returns it.
	fn create_request(
		&self,
		fields: Map<String, Value>,
	) -> Result<FallbackRequestRecord, StoreError>;

	/// Returns every stored record in creation order.
	fn list_requests(&self) -> Result<Vec<FallbackRequestRecord>, StoreError>;

	/// Acknowledges acceptance of `request_id` and returns the response payload.
	fn accept_request(&self, request_id: &str) -> Result<Value, StoreError>;
}

/// Route recognized by the fallback dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FallbackRoute {
	/// `POST /requests`.
	CreateRequest,
	/// `/requests` with any other verb, or any endpoint containing `/requests?`.
	/// Query parameters are ignored.
	ListRequests,
	/// Any endpoint containing `/accept`.
	Accept {
		/// Path segment preceding `/accept`; empty when there is none.
		request_id: String,
	},
	/// Everything else.
	Unsupported,
}
impl FallbackRoute {
	/// Classifies an endpoint, checking create, list, then accept.
	pub fn classify(endpoint: &str, method: HttpMethod) -> Self {
		if endpoint == "/requests" && method == HttpMethod::Post {
			return Self::CreateRequest;
		}
		if endpoint == "/requests" || endpoint.contains("/requests?") {
			return Self::ListRequests;
		}
		if let Some(idx) = endpoint.find("/accept") {
			let request_id =
				endpoint[..idx].rsplit('/').next().unwrap_or_default().to_owned();

			return Self::Accept { request_id };
		}

		Self::Unsupported
	}

	/// Stable label for logs.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::CreateRequest => "create_request",
			Self::ListRequests => "list_requests",
			Self::Accept { .. } => "accept",
			Self::Unsupported => "unsupported",
		}
	}
}

/// Payload returned for accepted requests.
pub fn accepted_payload() -> Value {
	json!({ "success": true, "message": "Request accepted" })
}

/// Payload returned for routes the fallback does not model.
pub fn unsupported_payload() -> Value {
	json!({ "success": true, "data": [] })
}

/// Serves `endpoint` from `backend`.
///
/// Bodies that are not JSON objects contribute no fields to created records.
pub fn dispatch(
	backend: &dyn FallbackBackend,
	endpoint: &str,
	options: &RequestOptions,
) -> Result<Value, StoreError> {
	let route = FallbackRoute::classify(endpoint, options.method);

	crate::obs::log_fallback_route(endpoint, route.as_str());

	match route {
		FallbackRoute::CreateRequest => {
			let fields = match &options.body {
				Some(Value::Object(fields)) => fields.clone(),
				_ => Map::new(),
			};

			to_value(&backend.create_request(fields)?)
		},
		FallbackRoute::ListRequests => to_value(&backend.list_requests()?),
		FallbackRoute::Accept { request_id } => backend.accept_request(&request_id),
		FallbackRoute::Unsupported => Ok(unsupported_payload()),
	}
}

fn to_value(payload: &impl Serialize) -> Result<Value, StoreError> {
	serde_json::to_value(payload)
		.map_err(|e| StoreError::Serialization { message: format!("Failed to encode record: {e}") })
}
