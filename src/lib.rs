//! Typed async client for the peer help-request marketplace API: bearer-token persistence,
//! normalized error reporting, and a local-only fallback mode for deployments without a backend.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod fallback;
pub mod http;
pub mod obs;
pub mod request;
pub mod store;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		client::ReqwestRequestClient,
		config::ClientConfig,
		http::ReqwestHttpClient,
		store::{KeyValueStore, MemoryStore},
	};

	/// Builds a client pointed at `base_url` (typically an `httpmock` server URL) backed by a
	/// fresh in-memory store.
	pub fn build_reqwest_test_client(base_url: &str) -> (ReqwestRequestClient, Arc<MemoryStore>) {
		let base = Url::parse(base_url).expect("Failed to parse test base URL.");

		build_with_config(ClientConfig::remote(base))
	}

	/// Builds a client that never touches the network and serves requests from its store.
	pub fn build_local_only_test_client() -> (ReqwestRequestClient, Arc<MemoryStore>) {
		build_with_config(ClientConfig::local_only())
	}

	/// Builds a client against `base_url` whose store already holds `token`.
	pub fn build_reqwest_test_client_with_token(
		base_url: &str,
		token: &str,
	) -> (ReqwestRequestClient, Arc<MemoryStore>) {
		let base = Url::parse(base_url).expect("Failed to parse test base URL.");
		let store_backend = Arc::new(MemoryStore::default());

		store_backend
			.set(crate::store::AUTH_TOKEN_KEY, token)
			.expect("Memory store should accept the seeded token.");

		let store: Arc<dyn KeyValueStore> = store_backend.clone();
		let client = ReqwestRequestClient::with_http_client(
			ClientConfig::remote(base),
			store,
			ReqwestHttpClient::default(),
			Arc::new(crate::http::ReqwestTransportErrorMapper),
		)
		.expect("Failed to build test client.");

		(client, store_backend)
	}

	fn build_with_config(config: ClientConfig) -> (ReqwestRequestClient, Arc<MemoryStore>) {
		let store_backend = Arc::new(MemoryStore::default());
		let store: Arc<dyn KeyValueStore> = store_backend.clone();
		let client =
			ReqwestRequestClient::new(config, store).expect("Failed to build test client.");

		(client, store_backend)
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::{Mutex, RwLock};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value, json};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
