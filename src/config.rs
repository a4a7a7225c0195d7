//! Backend selection and endpoint URL construction.

// self
use crate::{_prelude::*, error::ConfigError};

/// Environment variable that switches the client to local-only mode.
pub const LOCAL_ONLY_ENV: &str = "PEERHELP_LOCAL_ONLY";
/// Environment variable overriding [`ClientConfig::DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "PEERHELP_API_BASE_URL";

/// Where requests are served from; fixed for the lifetime of a client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendMode {
	/// Requests go to the HTTP API rooted at the given base URL.
	Remote(Url),
	/// No backend; requests are answered by the fallback backend.
	LocalOnly,
}
impl BackendMode {
	/// Returns `true` when a backend is configured.
	pub fn has_backend(&self) -> bool {
		matches!(self, Self::Remote(_))
	}
}

/// Client configuration resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Selected backend mode.
	pub backend: BackendMode,
}
impl ClientConfig {
	/// Base URL used when none is configured.
	pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3001/api";

	/// Targets the API rooted at `base`.
	pub fn remote(base: Url) -> Self {
		Self { backend: BackendMode::Remote(base) }
	}

	/// Serves every request locally.
	pub fn local_only() -> Self {
		Self { backend: BackendMode::LocalOnly }
	}

	/// Resolves the configuration from the process environment.
	///
	/// [`LOCAL_ONLY_ENV`] set to `1`, `true`, `yes`, or `on` selects local-only mode;
	/// otherwise [`BASE_URL_ENV`] (or [`Self::DEFAULT_BASE_URL`]) names the backend.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Same as [`Self::from_env`] with a caller-supplied variable lookup.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		if lookup(LOCAL_ONLY_ENV).is_some_and(|flag| is_truthy(&flag)) {
			return Ok(Self::local_only());
		}

		let raw = lookup(BASE_URL_ENV)
			.map(|value| value.trim().to_owned())
			.filter(|value| !value.is_empty())
			.unwrap_or_else(|| Self::DEFAULT_BASE_URL.into());
		let base = Url::parse(&raw)
			.map_err(|source| ConfigError::InvalidBaseUrl { value: raw.clone(), source })?;

		Ok(Self::remote(base))
	}

	/// Returns `true` when a backend is configured.
	pub fn has_backend(&self) -> bool {
		self.backend.has_backend()
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		// The constant is a valid absolute URL.
		let base = Url::parse(Self::DEFAULT_BASE_URL)
			.unwrap_or_else(|e| unreachable!("default base URL must parse: {e}"));

		Self::remote(base)
	}
}

/// Appends `endpoint` to `base` verbatim, keeping any path prefix on the base.
pub fn endpoint_url(base: &Url, endpoint: &str) -> Result<Url, ConfigError> {
	let joined = format!("{}{endpoint}", base.as_str().trim_end_matches('/'));

	Url::parse(&joined)
		.map_err(|source| ConfigError::InvalidEndpoint { endpoint: endpoint.into(), source })
}

fn is_truthy(flag: &str) -> bool {
	matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
		move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
	}

	#[test]
	fn defaults_to_local_backend_address() {
		let config = ClientConfig::from_lookup(lookup(&[])).expect("Default config should resolve.");

		assert_eq!(config, ClientConfig::default());
		assert!(config.has_backend());
	}

	#[test]
	fn local_only_flag_disables_backend() {
		let config = ClientConfig::from_lookup(lookup(&[(LOCAL_ONLY_ENV, "TRUE")]))
			.expect("Local-only config should resolve.");

		assert_eq!(config.backend, BackendMode::LocalOnly);

		let config = ClientConfig::from_lookup(lookup(&[(LOCAL_ONLY_ENV, "0")]))
			.expect("Falsy flag should resolve to the default backend.");

		assert!(config.has_backend());
	}

	#[test]
	fn base_url_override_is_validated() {
		let config =
			ClientConfig::from_lookup(lookup(&[(BASE_URL_ENV, "https://help.example.com/api/")]))
				.expect("Override should resolve.");

		assert_eq!(
			config.backend,
			BackendMode::Remote(Url::parse("https://help.example.com/api/").expect("Valid URL."))
		);

		let err = ClientConfig::from_lookup(lookup(&[(BASE_URL_ENV, "not a url")]))
			.expect_err("Invalid base URLs should be rejected.");

		assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
	}

	#[test]
	fn endpoint_url_keeps_base_path() {
		let base = Url::parse("http://localhost:3001/api").expect("Valid URL.");

		assert_eq!(
			endpoint_url(&base, "/requests?status=open").expect("Endpoint should join.").as_str(),
			"http://localhost:3001/api/requests?status=open"
		);

		let base = Url::parse("http://localhost:3001/api/").expect("Valid URL.");

		assert_eq!(
			endpoint_url(&base, "/auth/profile").expect("Endpoint should join.").as_str(),
			"http://localhost:3001/api/auth/profile"
		);
	}
}
