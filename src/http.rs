//! Transport primitives for API calls.
//!
//! The module exposes [`ApiHttpClient`] so downstream crates can plug in their own HTTP
//! stack, plus [`TransportErrorMapper`] which turns that stack's native errors into
//! client [`Error`] values. The mapper is where connect failures are recognized
//! structurally and surfaced as [`Error::Connectivity`].

// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::{ConfigError, TransportError};

/// Header carrying the bearer token.
pub const AUTHORIZATION: &str = "Authorization";
/// Header declaring the JSON payload type.
pub const CONTENT_TYPE: &str = "Content-Type";
/// Media type sent with every request.
pub const APPLICATION_JSON: &str = "application/json";

/// Future returned by [`ApiHttpClient::execute`].
pub type TransportFuture<'a, E> = Pin<Box<dyn Future<Output = Result<ApiResponse, E>> + 'a + Send>>;

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
	/// `GET`
	#[default]
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
}
impl HttpMethod {
	/// Returns the canonical upper-case verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Put => "PUT",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
#[cfg(feature = "reqwest")]
impl From<HttpMethod> for reqwest::Method {
	fn from(method: HttpMethod) -> Self {
		match method {
			HttpMethod::Get => reqwest::Method::GET,
			HttpMethod::Post => reqwest::Method::POST,
			HttpMethod::Put => reqwest::Method::PUT,
		}
	}
}

/// Ordered header collection with case-insensitive names.
///
/// Inserting a name that already exists (ignoring case) replaces the earlier value.
/// `Debug` output redacts [`AUTHORIZATION`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderSet(Vec<(String, String)>);
impl HeaderSet {
	/// Creates an empty header set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces a header.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();

		match self.0.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(&name)) {
			Some(slot) => *slot = (name, value),
			None => self.0.push((name, value)),
		}
	}

	/// Builder-style [`Self::insert`].
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(name, value);

		self
	}

	/// Looks up a header value by name, ignoring case.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(existing, _)| existing.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	/// Returns `true` when the header is present, ignoring case.
	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Overlays `other` on top of `self`; `other` wins on conflicting names.
	pub fn merge(&mut self, other: &HeaderSet) {
		for (name, value) in other.iter() {
			self.insert(name, value);
		}
	}

	/// Iterates over `(name, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Number of headers.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no headers are set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl Debug for HeaderSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_map()
			.entries(self.iter().map(|(name, value)| {
				if name.eq_ignore_ascii_case(AUTHORIZATION) {
					(name, "<redacted>")
				} else {
					(name, value)
				}
			}))
			.finish()
	}
}

/// Fully resolved request handed to the transport.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	/// HTTP verb.
	pub method: HttpMethod,
	/// Absolute target URL.
	pub url: Url,
	/// Headers after merging computed and caller-supplied values.
	pub headers: HeaderSet,
	/// Encoded JSON body, if any.
	pub body: Option<Vec<u8>>,
}

/// Raw response returned by the transport.
#[derive(Clone, Debug)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over HTTP transports able to execute one request/response round trip.
///
/// Implementations must be `Send + Sync + 'static` so they can be shared behind `Arc`,
/// and the returned future must own whatever it needs so it stays `Send`.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and collects the full response body.
	fn execute(&self, request: ApiRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Maps transport failures into client [`Error`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts a transport-native error into a client error.
	fn map_transport_error(&self, error: E) -> Error;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: ApiRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let ApiRequest { method, url, headers, body } = request;
			let mut builder = client.request(method.into(), url);

			for (name, value) in headers.iter() {
				builder = builder.header(name, value);
			}
			if let Some(body) = body {
				builder = builder.body(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(ApiResponse { status, body })
		})
	}
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(&self, err: ReqwestError) -> Error {
		if err.is_builder() {
			return ConfigError::from(err).into();
		}
		if err.is_connect() {
			return Error::connectivity(err);
		}

		TransportError::from(err).into()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn header_names_are_case_insensitive() {
		let mut headers = HeaderSet::new().with(CONTENT_TYPE, APPLICATION_JSON);

		headers.insert("content-type", "text/plain");

		assert_eq!(headers.len(), 1);
		assert_eq!(headers.get("CONTENT-TYPE"), Some("text/plain"));
	}

	#[test]
	fn merge_prefers_overlay() {
		let mut base = HeaderSet::new()
			.with(CONTENT_TYPE, APPLICATION_JSON)
			.with(AUTHORIZATION, "Bearer one");
		let overlay = HeaderSet::new().with("authorization", "Bearer two").with("X-Trace", "abc");

		base.merge(&overlay);

		assert_eq!(base.get(AUTHORIZATION), Some("Bearer two"));
		assert_eq!(base.get(CONTENT_TYPE), Some(APPLICATION_JSON));
		assert_eq!(base.get("x-trace"), Some("abc"));
		assert_eq!(base.len(), 3);
	}

	#[test]
	fn debug_redacts_authorization() {
		let headers = HeaderSet::new().with(AUTHORIZATION, "Bearer secret-token");
		let rendered = format!("{headers:?}");

		assert!(rendered.contains("<redacted>"));
		assert!(!rendered.contains("secret-token"));
	}

	#[test]
	fn success_range_is_2xx() {
		assert!(ApiResponse { status: 204, body: Vec::new() }.is_success());
		assert!(!ApiResponse { status: 304, body: Vec::new() }.is_success());
		assert!(!ApiResponse { status: 199, body: Vec::new() }.is_success());
	}

	#[test]
	fn methods_render_upper_case() {
		assert_eq!(HttpMethod::default(), HttpMethod::Get);
		assert_eq!(HttpMethod::Put.to_string(), "PUT");
	}
}
