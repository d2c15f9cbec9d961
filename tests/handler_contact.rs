mod common;

use agronova_api::domain::repositories::ContactRepository;
use axum::http::StatusCode;
use serde_json::{Value, json};

fn valid_submission() -> Value {
    json!({
        "name": "John Doe",
        "email": "john@example.com",
        "phone": "+1 555 0100",
        "company": "Green Acres",
        "subject": "Inquiry about drone spraying",
        "message": "We farm 200 hectares and would like a quote."
    })
}

#[tokio::test]
async fn test_submit_contact() {
    let (server, store) = common::memory_server();

    let response = server.post("/api/contact").json(&valid_submission()).await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert_eq!(
        json["message"],
        "Thank you for your message. We will get back to you soon!"
    );
    assert_eq!(json["data"]["name"], "John Doe");
    assert_eq!(json["data"]["email"], "john@example.com");
    assert!(json["data"]["id"].is_string());

    let stored = store.list_recent(10).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].company.as_deref(), Some("Green Acres"));
}

#[tokio::test]
async fn test_submit_contact_optional_fields_may_be_empty() {
    let (server, store) = common::memory_server();

    let mut body = valid_submission();
    body["phone"] = json!("");
    body.as_object_mut().unwrap().remove("company");

    let response = server.post("/api/contact").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    let stored = store.list_recent(1).await.unwrap();
    assert!(stored[0].phone.is_none());
    assert!(stored[0].company.is_none());
}

#[tokio::test]
async fn test_submit_contact_reports_every_violation() {
    let (server, store) = common::memory_server();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "",
            "email": "bad",
            "subject": "Hi",
            "message": "short"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["success"], false);

    let errors = json["errors"].as_array().unwrap();
    let fields: Vec<&str> = errors
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "name", "email", "subject", "message"]);
    assert_eq!(errors[0]["message"], "Name is required");
    assert_eq!(errors[2]["message"], "Please include a valid email");
    assert_eq!(
        errors[3]["message"],
        "Subject must be between 5 and 200 characters"
    );

    assert!(store.list_recent(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_contact_missing_field() {
    let (server, _store) = common::memory_server();

    let mut body = valid_submission();
    body.as_object_mut().unwrap().remove("subject");

    let response = server.post("/api/contact").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["errors"][0]["field"], "subject");
    assert_eq!(json["errors"][0]["message"], "Subject is required");
}

#[tokio::test]
async fn test_submit_contact_too_long_message() {
    let (server, _store) = common::memory_server();

    let mut body = valid_submission();
    body["message"] = json!("x".repeat(2001));

    let response = server.post("/api/contact").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["errors"],
        json!([{ "field": "message", "message": "Message must be between 10 and 2000 characters" }])
    );
}

#[tokio::test]
async fn test_submit_contact_store_unavailable() {
    let server = common::unavailable_server();

    let response = server.post("/api/contact").json(&valid_submission()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": false, "message": "Server error while submitting contact form" })
    );
}
