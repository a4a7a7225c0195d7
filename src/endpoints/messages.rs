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
	/// Lists the conversation attached to a help request.
	pub async fn get_messages(&self, request_id: impl Display) -> Result<Value> {
		self.request(&format!("/messages/request/{request_id}"), RequestOptions::get()).await
	}

	/// Sends a message.
	pub async fn send_message(&self, message_data: &impl Serialize) -> Result<Value> {
		self.request("/messages", endpoints::json_options(HttpMethod::Post, message_data)?).await
	}

	/// Marks every message on a help request as read.
	pub async fn mark_messages_as_read(&self, request_id: impl Display) -> Result<Value> {
		self.request(&format!("/messages/request/{request_id}/read"), RequestOptions::put()).await
	}
}
