mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::TestApp;
use rollcall_db::{DocPath, DocumentStore};

#[tokio::test]
async fn test_create_teacher_with_optional_fields_absent() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/add/teacher",
            json!({ "teacher_id": "recA", "name": "Ada Lovelace" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["id"], "recA");
    assert_eq!(body["data"]["name"], "Ada Lovelace");
    assert_eq!(body["data"]["email"], "");
    assert_eq!(body["data"]["phone"], "");
    assert_eq!(body["data"]["school"], Value::Null);
    assert_eq!(body["data"]["semester"], Value::Null);
    assert_eq!(body["submission"]["teacher_id"], "recA");

    let path = DocPath::new("Teacher", "recA").unwrap();
    let stored = app.store.get(&path).await.unwrap().expect("teacher document");
    assert_eq!(stored.into_json()["name"], "Ada Lovelace");
}

#[tokio::test]
async fn test_create_teacher_replaces_existing_document() {
    let app = TestApp::new();

    app.post(
        "/api/add/teacher",
        json!({
            "teacher_id": "recA",
            "name": "Ada",
            "email": "ada@example.com",
            "school_id": "42",
            "semester_id": "fall-2024"
        }),
    )
    .await;
    let (status, body) = app
        .post(
            "/api/add/teacher",
            json!({ "teacher_id": "recA", "name": "Ada King" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Ada King");
    assert_eq!(body["data"]["email"], "");
    assert_eq!(body["data"]["school"], Value::Null);
    assert_eq!(app.store.count("Teacher").await, 1);
}

#[tokio::test]
async fn test_create_teacher_lists_missing_fields() {
    let app = TestApp::new();

    let (status, body) = app.post("/api/add/teacher", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields: teacher_id, name.");

    let (status, body) = app
        .post("/api/add/teacher", json!({ "teacher_id": "recA", "name": "" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required field: name.");
    assert_eq!(app.store.count("Teacher").await, 0);
}

#[tokio::test]
async fn test_delete_teacher_leaves_semester_reference() {
    let app = TestApp::new();
    app.create_semester("fall-2024").await;

    let (status, _) = app
        .post(
            "/api/add/semester/teacher",
            json!({
                "semester_id": "fall-2024",
                "teacher_id": "recA",
                "name": "Ada",
                "school_address": "1 Engine Way"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .delete("/api/delete/teacher", json!({ "teacher_id": "recA" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Teacher successfully removed.");

    let path = DocPath::new("Teacher", "recA").unwrap();
    assert!(app.store.get(&path).await.unwrap().is_none());

    let (_, body) = app
        .post("/api/get/semester", json!({ "semester_id": "fall-2024" }))
        .await;
    assert_eq!(body["data"]["teachers"], json!(["recA"]));

    let (status, _) = app
        .delete("/api/delete/teacher", json!({ "teacher_id": "recA" }))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_teacher_requires_id() {
    let app = TestApp::new();

    let (status, body) = app.delete("/api/delete/teacher", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required field: teacher_id.");
}
