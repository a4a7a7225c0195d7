//! Resource-specific convenience methods layered on [`RequestClient::request`].
//!
//! Each method formats a fixed path and verb; payloads pass through as JSON and
//! responses come back as [`Value`]s.
//!
//! | Method | Endpoint | Verb |
//! |---|---|---|
//! | [`login_with_google`](RequestClient::login_with_google) | `/auth/google` | POST |
//! | [`get_profile`](RequestClient::get_profile) | `/auth/profile` | GET |
//! | [`verify_token`](RequestClient::verify_token) | `/auth/verify` | GET |
//! | [`update_profile`](RequestClient::update_profile) | `/users/profile` | PUT |
//! | [`get_user_by_id`](RequestClient::get_user_by_id) | `/users/{id}` | GET |
//! | [`create_request`](RequestClient::create_request) | `/requests` | POST |
//! | [`get_requests`](RequestClient::get_requests) | `/requests?{filters}` | GET |
//! | [`get_request_by_id`](RequestClient::get_request_by_id) | `/requests/{id}` | GET |
//! | [`update_request`](RequestClient::update_request) | `/requests/{id}` | PUT |
//! | [`accept_request`](RequestClient::accept_request) | `/requests/{id}/accept` | POST |
//! | [`complete_request`](RequestClient::complete_request) | `/requests/{id}/complete` | POST |
//! | [`get_messages`](RequestClient::get_messages) | `/messages/request/{id}` | GET |
//! | [`send_message`](RequestClient::send_message) | `/messages` | POST |
//! | [`mark_messages_as_read`](RequestClient::mark_messages_as_read) | `/messages/request/{id}/read` | PUT |
//! | [`get_categories`](RequestClient::get_categories) | `/categories` | GET |
//! | [`create_review`](RequestClient::create_review) | `/reviews` | POST |
//! | [`get_reviews`](RequestClient::get_reviews) | `/reviews/user/{id}` | GET |
//! | [`get_notifications`](RequestClient::get_notifications) | `/notifications` | GET |
//! | [`mark_notification_as_read`](RequestClient::mark_notification_as_read) | `/notifications/{id}/read` | PUT |
//! | [`mark_all_notifications_as_read`](RequestClient::mark_all_notifications_as_read) | `/notifications/read-all` | PUT |

mod auth;
mod categories;
mod messages;
mod notifications;
mod requests;
mod reviews;
mod users;

// self
#[cfg(doc)] use crate::client::RequestClient;
use crate::{_prelude::*, http::HttpMethod, request::RequestOptions};

/// Options carrying `payload` as the JSON body.
pub(crate) fn json_options(method: HttpMethod, payload: &impl Serialize) -> Result<RequestOptions> {
	Ok(RequestOptions::method(method).with_json(payload)?)
}
