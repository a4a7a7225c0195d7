// self
use crate::{
	_prelude::*,
	client::RequestClient,
	endpoints,
	http::{ApiHttpClient, HttpMethod, TransportErrorMapper},
	request::{RequestFilters, RequestOptions},
};

impl<C, M> RequestClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Posts a new help request.
	pub async fn create_request(&self, request_data: &impl Serialize) -> Result<Value> {
		self.request("/requests", endpoints::json_options(HttpMethod::Post, request_data)?).await
	}

	/// Lists help requests; `filters` become the query string.
	///
	/// In local-only mode the filters are accepted but ignored and every stored record is
	/// returned.
	pub async fn get_requests(&self, filters: &RequestFilters) -> Result<Value> {
		let endpoint = if filters.is_empty() {
			"/requests".to_owned()
		} else {
			format!("/requests?{}", filters.to_query())
		};

		self.request(&endpoint, RequestOptions::get()).await
	}

	/// Fetches one help request.
	pub async fn get_request_by_id(&self, request_id: impl Display) -> Result<Value> {
		self.request(&format!("/requests/{request_id}"), RequestOptions::get()).await
	}

	/// Updates a help request.
	pub async fn update_request(
		&self,
		request_id: impl Display,
		update_data: &impl Serialize,
	) -> Result<Value> {
		self.request(
			&format!("/requests/{request_id}"),
			endpoints::json_options(HttpMethod::Put, update_data)?,
		)
		.await
	}

	/// Accepts a help request on behalf of the signed-in user.
	pub async fn accept_request(&self, request_id: impl Display) -> Result<Value> {
		self.request(&format!("/requests/{request_id}/accept"), RequestOptions::post()).await
	}

	/// Marks a help request as completed.
	pub async fn complete_request(&self, request_id: impl Display) -> Result<Value> {
		self.request(&format!("/requests/{request_id}/complete"), RequestOptions::post()).await
	}
}
