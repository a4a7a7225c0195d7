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
	/// Leaves a review.
	pub async fn create_review(&self, review_data: &impl Serialize) -> Result<Value> {
		self.request("/reviews", endpoints::json_options(HttpMethod::Post, review_data)?).await
	}

	/// Lists reviews received by a user.
	pub async fn get_reviews(&self, user_id: impl Display) -> Result<Value> {
		self.request(&format!("/reviews/user/{user_id}"), RequestOptions::get()).await
	}
}
