//! Token lifecycle: the in-memory token mirrored into a [`KeyValueStore`].

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	store::{AUTH_TOKEN_KEY, KeyValueStore, StoreError},
};

/// Holds the current bearer token and keeps the persisted copy in sync.
///
/// Readers observe the token at the moment they call [`AuthState::current`]; nothing is
/// snapshotted ahead of time, so a request dispatched after [`AuthState::set`] sees the
/// new value.
pub struct AuthState {
	token: RwLock<Option<TokenSecret>>,
	store: Arc<dyn KeyValueStore>,
}
impl AuthState {
	/// Loads the persisted token (if any) from `store`.
	pub fn load(store: Arc<dyn KeyValueStore>) -> Result<Self, StoreError> {
		let token = store.get(AUTH_TOKEN_KEY)?.and_then(TokenSecret::new);

		Ok(Self { token: RwLock::new(token), store })
	}

	/// Returns the current token, if any.
	pub fn current(&self) -> Option<TokenSecret> {
		self.token.read().clone()
	}

	/// Replaces the token; `None` (or an empty string) clears it and removes the persisted key.
	pub fn set(&self, token: Option<&str>) -> Result<(), StoreError> {
		let token = token.and_then(TokenSecret::new);
		let mut guard = self.token.write();

		match &token {
			Some(secret) => self.store.set(AUTH_TOKEN_KEY, secret.expose())?,
			None => self.store.remove(AUTH_TOKEN_KEY)?,
		}

		*guard = token;

		Ok(())
	}
}
impl Debug for AuthState {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthState").field("token", &self.current()).finish()
	}
}
