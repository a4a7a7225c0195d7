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
	/// Updates the signed-in user's profile.
	pub async fn update_profile(&self, user_data: &impl Serialize) -> Result<Value> {
		self.request("/users/profile", endpoints::json_options(HttpMethod::Put, user_data)?).await
	}

	/// Fetches a user's public profile.
	pub async fn get_user_by_id(&self, user_id: impl Display) -> Result<Value> {
		self.request(&format!("/users/{user_id}"), RequestOptions::get()).await
	}
}
