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
	/// Lists help-request categories.
	pub async fn get_categories(&self) -> Result<Value> {
		self.request("/categories", RequestOptions::get()).await
	}
}
