// crates.io
use httpmock::prelude::*;
// self
use peerhelp_client::{_preludet::*, request::RequestFilters};

#[tokio::test]
async fn user_endpoints_use_expected_routes() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(&server.url("/api"));
	let update = server
		.mock_async(|when, then| {
			when.method(PUT).path("/api/users/profile").json_body(json!({ "bio": "tutor" }));
			then.status(200).json_body(json!({ "bio": "tutor" }));
		})
		.await;
	let fetch = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/users/7");
			then.status(200).json_body(json!({ "id": 7 }));
		})
		.await;

	client.update_profile(&json!({ "bio": "tutor" })).await.expect("Profile update should succeed.");

	assert_eq!(client.get_user_by_id(7).await.expect("User lookup should succeed."), json!({ "id": 7 }));

	update.assert_async().await;
	fetch.assert_async().await;
}

#[tokio::test]
async fn request_endpoints_use_expected_routes() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(&server.url("/api"));
	let create = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/requests").json_body(json!({ "title": "help" }));
			then.status(201).json_body(json!({ "id": 1, "title": "help" }));
		})
		.await;
	let list = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/requests")
				.query_param("status", "open")
				.query_param("category", "math");
			then.status(200).json_body(json!([]));
		})
		.await;
	let update = server
		.mock_async(|when, then| {
			when.method(PUT).path("/api/requests/1").json_body(json!({ "title": "urgent help" }));
			then.status(200).json_body(json!({ "id": 1 }));
		})
		.await;
	let accept = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/requests/1/accept");
			then.status(200).json_body(json!({ "success": true }));
		})
		.await;
	let complete = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/requests/1/complete");
			then.status(200).json_body(json!({ "success": true }));
		})
		.await;
	let filters = RequestFilters::new().with("status", "open").with("category", "math");

	client.create_request(&json!({ "title": "help" })).await.expect("Create should succeed.");
	client.get_requests(&filters).await.expect("Filtered list should succeed.");
	client
		.update_request(1, &json!({ "title": "urgent help" }))
		.await
		.expect("Update should succeed.");
	client.accept_request(1).await.expect("Accept should succeed.");
	client.complete_request(1).await.expect("Complete should succeed.");

	create.assert_async().await;
	list.assert_async().await;
	update.assert_async().await;
	accept.assert_async().await;
	complete.assert_async().await;
}

#[tokio::test]
async fn unfiltered_listing_omits_query_string() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(&server.url("/api"));
	let list = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/requests").query_param_missing("status");
			then.status(200).json_body(json!([{ "id": 1 }]));
		})
		.await;
	let listed = client.get_requests(&RequestFilters::new()).await.expect("List should succeed.");

	assert_eq!(listed, json!([{ "id": 1 }]));

	list.assert_async().await;
}

#[tokio::test]
async fn message_endpoints_use_expected_routes() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(&server.url("/api"));
	let list = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/messages/request/3");
			then.status(200).json_body(json!([]));
		})
		.await;
	let send = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/messages")
				.json_body(json!({ "requestId": 3, "content": "hi" }));
			then.status(201).json_body(json!({ "id": 10 }));
		})
		.await;
	let read = server
		.mock_async(|when, then| {
			when.method(PUT).path("/api/messages/request/3/read");
			then.status(200).json_body(json!({ "updated": 2 }));
		})
		.await;

	client.get_messages(3).await.expect("Message list should succeed.");
	client
		.send_message(&json!({ "requestId": 3, "content": "hi" }))
		.await
		.expect("Send should succeed.");
	client.mark_messages_as_read(3).await.expect("Mark read should succeed.");

	list.assert_async().await;
	send.assert_async().await;
	read.assert_async().await;
}

#[tokio::test]
async fn catalog_review_and_notification_endpoints_use_expected_routes() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(&server.url("/api"));
	let categories = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/categories");
			then.status(200).json_body(json!(["math"]));
		})
		.await;
	let review = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/reviews").json_body(json!({ "rating": 5 }));
			then.status(201).json_body(json!({ "id": 4 }));
		})
		.await;
	let reviews = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/reviews/user/u-9");
			then.status(200).json_body(json!([]));
		})
		.await;
	let notifications = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/notifications");
			then.status(200).json_body(json!([]));
		})
		.await;
	let read_one = server
		.mock_async(|when, then| {
			when.method(PUT).path("/api/notifications/12/read");
			then.status(200).json_body(json!({ "success": true }));
		})
		.await;
	let read_all = server
		.mock_async(|when, then| {
			when.method(PUT).path("/api/notifications/read-all");
			then.status(200).json_body(json!({ "success": true }));
		})
		.await;

	client.get_categories().await.expect("Categories should succeed.");
	client.create_review(&json!({ "rating": 5 })).await.expect("Review should succeed.");
	client.get_reviews("u-9").await.expect("Reviews should succeed.");
	client.get_notifications().await.expect("Notifications should succeed.");
	client.mark_notification_as_read(12).await.expect("Mark one read should succeed.");
	client.mark_all_notifications_as_read().await.expect("Mark all read should succeed.");

	categories.assert_async().await;
	review.assert_async().await;
	reviews.assert_async().await;
	notifications.assert_async().await;
	read_one.assert_async().await;
	read_all.assert_async().await;
}
