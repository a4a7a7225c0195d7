//! Per-call request options and query filters.

// crates.io
use url::form_urlencoded;
// self
use crate::{_prelude::*, error::ConfigError, http::{HeaderSet, HttpMethod}};

/// Caller-supplied options for [`RequestClient::request`](crate::client::RequestClient::request).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
	/// HTTP verb; defaults to `GET`.
	pub method: HttpMethod,
	/// Headers layered over the computed ones; these win on conflicting names.
	pub headers: HeaderSet,
	/// JSON body, if any.
	pub body: Option<Value>,
}
impl RequestOptions {
	/// Options for a `GET` without body.
	pub fn get() -> Self {
		Self::default()
	}

	/// Options for a `POST` without body.
	pub fn post() -> Self {
		Self::method(HttpMethod::Post)
	}

	/// Options for a `PUT` without body.
	pub fn put() -> Self {
		Self::method(HttpMethod::Put)
	}

	/// Options for an arbitrary verb.
	pub fn method(method: HttpMethod) -> Self {
		Self { method, ..Default::default() }
	}

	/// Sets the body to an already-built JSON value.
	pub fn with_body(mut self, body: Value) -> Self {
		self.body = Some(body);

		self
	}

	/// Encodes `payload` as the JSON body.
	pub fn with_json(self, payload: &impl Serialize) -> Result<Self, ConfigError> {
		let body = serde_json::to_value(payload).map_err(ConfigError::InvalidBody)?;

		Ok(self.with_body(body))
	}

	/// Adds a caller header.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name, value);

		self
	}
}

/// Query parameters for request listings, passed through to the backend as-is.
///
/// Keys are kept in insertion order; setting an existing key replaces its value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestFilters(Vec<(String, String)>);
impl RequestFilters {
	/// Creates an empty filter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a filter.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		let key = key.into();
		let value = value.into();

		match self.0.iter_mut().find(|(existing, _)| *existing == key) {
			Some(slot) => slot.1 = value,
			None => self.0.push((key, value)),
		}

		self
	}

	/// Returns `true` when no filter is set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Form-urlencoded query string without the leading `?`.
	pub fn to_query(&self) -> String {
		form_urlencoded::Serializer::new(String::new()).extend_pairs(&self.0).finish()
	}
}
impl<K, V> FromIterator<(K, V)> for RequestFilters
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		iter.into_iter().fold(Self::new(), |filters, (key, value)| filters.with(key, value))
	}
}
