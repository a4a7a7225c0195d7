//! Client-level error types shared across the remote path, the fallback path, and stores.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Message attached to [`Error::Connectivity`].
pub const CONNECTIVITY_MESSAGE: &str =
	"Cannot connect to server. Please check if the backend is running.";
/// Message used when a failed response carries a body that is not JSON.
pub const UNPARSABLE_ERROR_MESSAGE: &str = "Request failed";

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Key-value store failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure that is not a connectivity problem; surfaced unchanged.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Server answered with a non-success status.
	#[error("{message}")]
	Request {
		/// HTTP status code.
		status: u16,
		/// Message from the response's `error` field or a generic status message.
		message: String,
	},
	/// Successful response whose body is not valid JSON.
	#[error("Response body is not valid JSON.")]
	Parse {
		/// HTTP status code of the response.
		status: u16,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// The call never reached a server (refused connection, DNS failure, etc.).
	#[error("Cannot connect to server. Please check if the backend is running.")]
	Connectivity {
		/// Transport-specific connect failure.
		#[source]
		source: BoxError,
	},
}
impl Error {
	/// Wraps a transport-specific connect failure.
	pub fn connectivity(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Connectivity { source: Box::new(src) }
	}

	/// Returns `true` for [`Error::Request`].
	pub fn is_request(&self) -> bool {
		matches!(self, Self::Request { .. })
	}

	/// Returns `true` for [`Error::Parse`].
	pub fn is_parse(&self) -> bool {
		matches!(self, Self::Parse { .. })
	}

	/// Returns `true` for [`Error::Connectivity`].
	pub fn is_connectivity(&self) -> bool {
		matches!(self, Self::Connectivity { .. })
	}

	/// HTTP status attached to the error, when a response was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Request { status, .. } | Self::Parse { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed or rejected the request shape.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL `{value}` is invalid.")]
	InvalidBaseUrl {
		/// Raw value that failed to parse.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL and endpoint do not form a valid URL.
	#[error("Endpoint `{endpoint}` does not form a valid URL.")]
	InvalidEndpoint {
		/// Endpoint that was appended to the base URL.
		endpoint: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Request payload could not be encoded as JSON.
	#[error("Request body could not be encoded as JSON.")]
	InvalidBody(#[source] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures other than connectivity.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Builds the [`Error::Request`] for a non-success response.
///
/// A JSON body with a non-empty `error` string supplies the message; any other JSON body
/// yields a status message; a body that is not JSON yields [`UNPARSABLE_ERROR_MESSAGE`].
pub(crate) fn request_error(status: u16, body: &[u8]) -> Error {
	let message = match serde_json::from_slice::<Value>(body) {
		Ok(payload) => match payload.get("error") {
			Some(Value::String(text)) if !text.is_empty() => text.to_owned(),
			_ => format!("HTTP error, status {status}"),
		},
		Err(_) => UNPARSABLE_ERROR_MESSAGE.into(),
	};

	Error::Request { status, message }
}
