// std
use std::sync::atomic::{AtomicU64, Ordering};
// self
use crate::obs::{RequestMode, RequestOutcome};

/// Records a request outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(mode: RequestMode, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"peerhelp_client_request_total",
			"mode" => mode.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (mode, outcome);
	}
}

/// Thread-safe per-client request counters.
#[derive(Debug, Default)]
pub struct RequestMetrics {
	attempts: AtomicU64,
	successes: AtomicU64,
	failures: AtomicU64,
}
impl RequestMetrics {
	/// Returns the total number of requests issued.
	pub fn attempts(&self) -> u64 {
		self.attempts.load(Ordering::Relaxed)
	}

	/// Returns the number of requests that resolved successfully.
	pub fn successes(&self) -> u64 {
		self.successes.load(Ordering::Relaxed)
	}

	/// Returns the number of requests that failed.
	pub fn failures(&self) -> u64 {
		self.failures.load(Ordering::Relaxed)
	}

	pub(crate) fn record(&self, mode: RequestMode, outcome: RequestOutcome) {
		let counter = match outcome {
			RequestOutcome::Attempt => &self.attempts,
			RequestOutcome::Success => &self.successes,
			RequestOutcome::Failure => &self.failures,
		};

		counter.fetch_add(1, Ordering::Relaxed);
		record_request_outcome(mode, outcome);
	}
}
