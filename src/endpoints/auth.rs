// self
use crate::{
	_prelude::*,
	client::RequestClient,
	endpoints,
	http::{ApiHttpClient, HttpMethod, TransportErrorMapper},
	request::RequestOptions,
};

impl<C, M> RequestClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Exchanges Google sign-in data for a session.
	///
	/// When the response carries a non-empty string `token`, it becomes the client's
	/// bearer token before the response is returned.
	pub async fn login_with_google(&self, user_data: &impl Serialize) -> Result<Value> {
		let options = endpoints::json_options(HttpMethod::Post, user_data)?;
		let response = self.request("/auth/google", options).await?;

		if let Some(token) =
			response.get("token").and_then(Value::as_str).filter(|token| !token.is_empty())
		{
			self.set_token(Some(token))?;
		}

		Ok(response)
	}

	/// Fetches the signed-in user's profile.
	pub async fn get_profile(&self) -> Result<Value> {
		self.request("/auth/profile", RequestOptions::get()).await
	}

	/// Asks the backend whether the current token is still valid.
	pub async fn verify_token(&self) -> Result<Value> {
		self.request("/auth/verify", RequestOptions::get()).await
	}
}
