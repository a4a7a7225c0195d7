// self
use crate::{
	_prelude::*,
	http::{HeaderSet, HttpMethod},
	obs::RequestMode,
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// A span wrapping one client request.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the mode, verb, and endpoint.
	pub fn new(mode: RequestMode, method: HttpMethod, endpoint: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"peerhelp_client.request",
				mode = mode.as_str(),
				method = method.as_str(),
				endpoint
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (mode, method, endpoint);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

pub(crate) fn log_dispatch(
	method: HttpMethod,
	url: &Url,
	headers: &HeaderSet,
	body: Option<&Value>,
) {
	#[cfg(feature = "tracing")]
	tracing::debug!(%method, %url, ?headers, ?body, "Dispatching API request.");
	#[cfg(not(feature = "tracing"))]
	let _ = (method, url, headers, body);
}

pub(crate) fn log_response(status: u16, payload: Option<&Value>) {
	#[cfg(feature = "tracing")]
	tracing::debug!(status, ?payload, "Received API response.");
	#[cfg(not(feature = "tracing"))]
	let _ = (status, payload);
}

pub(crate) fn log_failure(error: &Error) {
	#[cfg(feature = "tracing")]
	tracing::warn!(%error, "API request failed.");
	#[cfg(not(feature = "tracing"))]
	let _ = error;
}

pub(crate) fn log_fallback_route(endpoint: &str, route: &'static str) {
	#[cfg(feature = "tracing")]
	tracing::debug!(endpoint, route, "Serving request from the local fallback.");
	#[cfg(not(feature = "tracing"))]
	let _ = (endpoint, route);
}
