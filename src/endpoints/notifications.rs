// self
use crate::{
	_prelude::*,
	client::RequestClient,
	http::{ApiHttpClient, TransportErrorMapper},
	request::RequestOptions,
};

impl<C, M> RequestClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Lists the signed-in user's notifications.
	pub async fn get_notifications(&self) -> Result<Value> {
		self.request("/notifications", RequestOptions::get()).await
	}

	/// Marks one notification as read.
	pub async fn mark_notification_as_read(&self, notification_id: impl Display) -> Result<Value> {
		self.request(&format!("/notifications/{notification_id}/read"), RequestOptions::put()).await
	}

	/// Marks every notification as read.
	pub async fn mark_all_notifications_as_read(&self) -> Result<Value> {
		self.request("/notifications/read-all", RequestOptions::put()).await
	}
}
