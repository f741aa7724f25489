//! Round-trip tests for the per-resource services.

use chrono::TimeZone;
use chrono::Utc;
use outlook::models::{Calendar, Event, Message};
use outlook::{Client, QueryParams, QueryValue, Session, StaticTokenSource};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn session_for(server: &MockServer) -> Session {
    let client = Client::builder()
        .base_url(server.uri())
        .token_source(StaticTokenSource::new("test-token", "test-refresh"))
        .build()
        .unwrap();
    client.session().await.unwrap()
}

#[tokio::test]
async fn calendars_list_unwraps_the_value_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/calendars"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{ "value": [
                { "id": "cal-1", "name": "Calendar" },
                { "id": "cal-2", "name": "Birthdays" }
            ] }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let session = session_for(&server).await;
    let calendars = session.calendars().list().await.unwrap();

    assert_eq!(calendars.len(), 2);
    assert_eq!(calendars[1].name.as_deref(), Some("Birthdays"));
}

#[tokio::test]
async fn calendars_update_patches_the_resource() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/me/calendars/cal-1"))
        .and(body_json(serde_json::json!({ "name": "Renamed" })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{ "id": "cal-1", "name": "Renamed" }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let session = session_for(&server).await;
    let patch = Calendar {
        name: Some("Renamed".to_string()),
        ..Calendar::default()
    };
    let updated = session.calendars().update("cal-1", &patch).await.unwrap();

    assert_eq!(updated.name.as_deref(), Some("Renamed"));
}

#[tokio::test]
async fn events_list_passes_datetime_filters_in_the_contract_format() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/events"))
        .and(query_param("startDateTime", "2023-04-05T06:07:08Z"))
        .and(query_param("$top", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{ "value": [ { "id": "ev-1", "subject": "Standup" } ] }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let mut params = QueryParams::new();
    params.insert(
        "startDateTime".to_string(),
        QueryValue::from(Utc.with_ymd_and_hms(2023, 4, 5, 6, 7, 8).unwrap()),
    );
    params.insert("$top".to_string(), QueryValue::Int(10));

    let session = session_for(&server).await;
    let events = session.events().list(Some(&params)).await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].subject.as_deref(), Some("Standup"));
}

#[tokio::test]
async fn events_create_posts_the_event_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/me/events"))
        .and(body_json(serde_json::json!({
            "subject": "Planning",
            "start": { "dateTime": "2023-04-05T09:00:00", "timeZone": "UTC" },
            "end": { "dateTime": "2023-04-05T10:00:00", "timeZone": "UTC" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_raw(
            r#"{ "id": "ev-new", "subject": "Planning" }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let event = Event {
        subject: Some("Planning".to_string()),
        start: Some(outlook::models::DateTimeTimeZone {
            date_time: "2023-04-05T09:00:00".to_string(),
            time_zone: "UTC".to_string(),
        }),
        end: Some(outlook::models::DateTimeTimeZone {
            date_time: "2023-04-05T10:00:00".to_string(),
            time_zone: "UTC".to_string(),
        }),
        ..Event::default()
    };

    let session = session_for(&server).await;
    let created = session.events().create(&event).await.unwrap();

    assert_eq!(created.id.as_deref(), Some("ev-new"));
}

#[tokio::test]
async fn folders_create_sends_the_display_name() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/me/mailFolders"))
        .and(body_json(serde_json::json!({ "displayName": "Archive" })))
        .respond_with(ResponseTemplate::new(201).set_body_raw(
            r#"{ "id": "folder-1", "displayName": "Archive" }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let session = session_for(&server).await;
    let folder = session.folders().create("Archive").await.unwrap();

    assert_eq!(folder.id.as_deref(), Some("folder-1"));
    assert_eq!(folder.display_name.as_deref(), Some("Archive"));
}

#[tokio::test]
async fn folders_list_messages_scopes_the_path_to_the_folder() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/mailFolders/inbox/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{ "value": [ { "id": "msg-1", "subject": "hi" } ] }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let session = session_for(&server).await;
    let messages = session
        .folders()
        .list_messages("inbox", None)
        .await
        .unwrap();

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id.as_deref(), Some("msg-1"));
}

#[tokio::test]
async fn messages_update_marks_a_message_read() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/me/messages/msg-1"))
        .and(body_json(serde_json::json!({ "isRead": true })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{ "id": "msg-1", "isRead": true }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let patch = Message {
        is_read: Some(true),
        ..Message::default()
    };

    let session = session_for(&server).await;
    let updated = session.messages().update("msg-1", &patch).await.unwrap();

    assert_eq!(updated.is_read, Some(true));
}

#[tokio::test]
async fn messages_move_posts_the_destination_folder() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/me/messages/msg-1/move"))
        .and(body_json(serde_json::json!({ "destinationId": "folder-2" })))
        .respond_with(ResponseTemplate::new(201).set_body_raw(
            r#"{ "id": "msg-1-moved", "subject": "hi" }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let session = session_for(&server).await;
    let moved = session
        .messages()
        .move_to("msg-1", "folder-2")
        .await
        .unwrap();

    assert_eq!(moved.id.as_deref(), Some("msg-1-moved"));
}

#[tokio::test]
async fn messages_delete_issues_a_delete_request() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/me/messages/msg-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let session = session_for(&server).await;
    session.messages().delete("msg-1").await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
}
