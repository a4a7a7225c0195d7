//! The request client: token lifecycle, header computation, and the `request` primitive.
//!
//! [`RequestClient`] is an explicit context object. Applications construct one at their
//! composition root and share it (typically behind `Arc`) with whatever needs API access;
//! tests build as many as they like with independent stores and token states.

// self
use crate::{
	_prelude::*,
	auth::{AuthState, TokenSecret},
	config::{self, BackendMode, ClientConfig},
	error::{self, ConfigError},
	fallback::{self, FallbackBackend, StoredFallback},
	http::{
		APPLICATION_JSON, AUTHORIZATION, ApiHttpClient, ApiRequest, CONTENT_TYPE, HeaderSet,
		TransportErrorMapper,
	},
	obs::{self, RequestMetrics, RequestMode, RequestOutcome, RequestSpan},
	request::RequestOptions,
	store::KeyValueStore,
};
#[cfg(feature = "reqwest")]
use crate::http::{ReqwestHttpClient, ReqwestTransportErrorMapper};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestRequestClient = RequestClient<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Stateful API client holding the optional bearer token.
pub struct RequestClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Backend selection, fixed at construction.
	pub config: ClientConfig,
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
	/// Backend answering requests in local-only mode.
	pub fallback: Arc<dyn FallbackBackend>,
	/// Per-client request counters.
	pub metrics: Arc<RequestMetrics>,
	auth: AuthState,
}
impl<C, M> RequestClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a client over the caller-provided transport + mapper pair.
	///
	/// The persisted token is loaded from `store`, and the default fallback keeps its
	/// records in the same store.
	pub fn with_http_client(
		config: ClientConfig,
		store: Arc<dyn KeyValueStore>,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Result<Self> {
		let auth = AuthState::load(store.clone())?;

		Ok(Self {
			config,
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
			fallback: Arc::new(StoredFallback::new(store)),
			metrics: Default::default(),
			auth,
		})
	}

	/// Replaces the local-only backend.
	pub fn with_fallback(mut self, fallback: Arc<dyn FallbackBackend>) -> Self {
		self.fallback = fallback;

		self
	}

	/// Returns the current bearer token, if any.
	pub fn token(&self) -> Option<TokenSecret> {
		self.auth.current()
	}

	/// Sets or clears the bearer token and mirrors the change into the store.
	///
	/// `None` and empty strings clear the token. Only fallible stores can make this fail.
	pub fn set_token(&self, token: Option<&str>) -> Result<()> {
		self.auth.set(token)?;

		Ok(())
	}

	/// Clears the token; no network call is made.
	pub fn logout(&self) -> Result<()> {
		self.set_token(None)
	}

	/// Headers for the next request: JSON content type, plus `Authorization` iff a token
	/// is held right now.
	pub fn headers(&self) -> HeaderSet {
		let mut headers = HeaderSet::new().with(CONTENT_TYPE, APPLICATION_JSON);

		if let Some(token) = self.auth.current() {
			headers.insert(AUTHORIZATION, token.bearer());
		}

		headers
	}

	/// Sends `options` to `endpoint` (a path such as `/requests/42`) and returns the JSON payload.
	///
	/// Without a backend the call is answered by [`Self::fallback`] and never touches the
	/// network. With a backend, non-2xx statuses become [`Error::Request`], undecodable
	/// 2xx bodies become [`Error::Parse`], and connect failures become
	/// [`Error::Connectivity`]; other transport failures propagate unchanged.
	pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value> {
		let mode = match self.config.backend {
			BackendMode::Remote(_) => RequestMode::Remote,
			BackendMode::LocalOnly => RequestMode::Fallback,
		};
		let span = RequestSpan::new(mode, options.method, endpoint);

		self.metrics.record(mode, RequestOutcome::Attempt);

		let result = span
			.instrument(async {
				match &self.config.backend {
					BackendMode::Remote(base) => self.send_remote(base, endpoint, &options).await,
					BackendMode::LocalOnly =>
						fallback::dispatch(self.fallback.as_ref(), endpoint, &options)
							.map_err(Error::from),
				}
			})
			.await;

		match &result {
			Ok(_) => self.metrics.record(mode, RequestOutcome::Success),
			Err(e) => {
				obs::log_failure(e);
				self.metrics.record(mode, RequestOutcome::Failure);
			},
		}

		result
	}

	async fn send_remote(
		&self,
		base: &Url,
		endpoint: &str,
		options: &RequestOptions,
	) -> Result<Value> {
		let url = config::endpoint_url(base, endpoint)?;
		let mut headers = self.headers();

		headers.merge(&options.headers);

		let body = options
			.body
			.as_ref()
			.map(serde_json::to_vec)
			.transpose()
			.map_err(ConfigError::InvalidBody)?;

		obs::log_dispatch(options.method, &url, &headers, options.body.as_ref());

		let response = self
			.http_client
			.execute(ApiRequest { method: options.method, url, headers, body })
			.await
			.map_err(|e| self.transport_mapper.map_transport_error(e))?;

		if !response.is_success() {
			obs::log_response(response.status, None);

			return Err(error::request_error(response.status, &response.body));
		}

		let payload = parse_json(response.status, &response.body)?;

		obs::log_response(response.status, Some(&payload));

		Ok(payload)
	}
}
#[cfg(feature = "reqwest")]
impl RequestClient<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a client that provisions its own reqwest-backed transport.
	pub fn new(config: ClientConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
		Self::with_http_client(
			config,
			store,
			ReqwestHttpClient::default(),
			Arc::new(ReqwestTransportErrorMapper),
		)
	}
}
impl<C, M> Debug for RequestClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RequestClient")
			.field("config", &self.config)
			.field("token_set", &self.auth.current().is_some())
			.finish()
	}
}

fn parse_json(status: u16, body: &[u8]) -> Result<Value> {
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::Parse { status, source })
}
