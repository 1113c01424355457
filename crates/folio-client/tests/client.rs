//! Client SDK tests against a mock folio server.

use folio_client::{ClientError, FolioClient};
use folio_core::{ContactId, ContactSubmission, ValidationError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ada() -> ContactSubmission {
    ContactSubmission::new("Ada", "ada@example.com", "Hi", "Hello")
}

fn ada_record(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Ada",
        "email": "ada@example.com",
        "subject": "Hi",
        "message": "Hello",
        "created_at": "2026-10-18T09:30:00Z"
    })
}

#[tokio::test]
async fn submit_posts_the_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(body_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hi",
            "message": "Hello"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Message sent successfully!",
            "id": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = FolioClient::new(server.uri()).unwrap();
    let response = client.submit_contact(ada()).await.unwrap();

    assert!(response.success);
    assert_eq!(response.id, ContactId::new(1));
}

#[tokio::test]
async fn invalid_submission_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = FolioClient::new(server.uri()).unwrap();

    let missing = client
        .submit_contact(ContactSubmission::new("", "x@y.com", "s", "m"))
        .await;
    assert!(matches!(
        missing,
        Err(ClientError::Validation(ValidationError::MissingFields))
    ));

    let bad_email = client
        .submit_contact(ContactSubmission::new("Bob", "not-an-email", "s", "m"))
        .await;
    assert!(matches!(
        bad_email,
        Err(ClientError::Validation(ValidationError::InvalidEmail))
    ));
}

#[tokio::test]
async fn list_returns_contacts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "contacts": [ada_record(2), ada_record(1)] })),
        )
        .mount(&server)
        .await;

    let client = FolioClient::new(server.uri()).unwrap();
    let contacts = client.list_contacts().await.unwrap();

    let ids: Vec<_> = contacts.iter().map(|c| c.id.get()).collect();
    assert_eq!(ids, [2, 1]);
    assert_eq!(contacts[0].created_at.to_rfc3339(), "2026-10-18T09:30:00+00:00");
}

#[tokio::test]
async fn get_maps_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contacts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "contact": ada_record(1) })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/contacts/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Contact not found",
            "code": "not_found"
        })))
        .mount(&server)
        .await;

    let client = FolioClient::new(server.uri()).unwrap();

    let contact = client.get_contact(ContactId::new(1)).await.unwrap();
    assert_eq!(contact.name, "Ada");

    let missing = client.get_contact(ContactId::new(999)).await;
    assert!(matches!(missing, Err(ClientError::NotFound)));
}

#[tokio::test]
async fn server_errors_keep_message_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Failed to retrieve contacts",
            "code": "internal_error"
        })))
        .mount(&server)
        .await;

    let client = FolioClient::new(server.uri()).unwrap();
    let result = client.list_contacts().await;

    match result {
        Err(ClientError::Api {
            code,
            message,
            status,
        }) => {
            assert_eq!(code, "internal_error");
            assert_eq!(message, "Failed to retrieve contacts");
            assert_eq!(status, 500);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_errors_fall_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = FolioClient::new(server.uri()).unwrap();
    let result = client.health().await;

    assert!(matches!(result, Err(ClientError::Api { status: 502, .. })));
}

#[tokio::test]
async fn health_reads_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "message": "Server is running"
        })))
        .mount(&server)
        .await;

    let client = FolioClient::new(server.uri()).unwrap();
    let health = client.health().await.unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.version, None);
}
