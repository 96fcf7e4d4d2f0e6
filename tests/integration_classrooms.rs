mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;
use rollcall_core::{classroom_id, school_id};

#[tokio::test]
async fn test_create_classroom_derives_id() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/add/classroom",
            json!({ "semester_id": "fall-2024", "teacher_id": "recA", "school_id": "42" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["classroom_id"], classroom_id("fall-2024", "recA"));
    assert_ne!(
        body["data"]["classroom_id"],
        classroom_id("recA", "fall-2024")
    );
}

#[tokio::test]
async fn test_get_missing_classroom() {
    let app = TestApp::new();

    let (status, body) = app
        .get("/api/get/classroom", json!({ "classroom_id": "123" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Classroom not found");

    let (status, body) = app.get("/api/get/classroom", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required field: classroom_id.");
}

#[tokio::test]
async fn test_add_classroom_student_links_teacher() {
    let app = TestApp::new();
    let student = app.register().await;
    let (_, body) = app
        .post(
            "/api/add/classroom",
            json!({ "semester_id": "fall-2024", "teacher_id": "recA", "school_id": "42" }),
        )
        .await;
    let id = body["data"]["classroom_id"].as_str().unwrap().to_string();

    let (status, _) = app
        .post(
            "/api/add/classroom/student",
            json!({ "classroom_id": id, "student_id": student.uid }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.post("/api/get/classroom", json!({ "classroom_id": id })).await;
    assert_eq!(body["data"]["students"], json!([student.uid]));

    let (_, body) = app.post("/api/get/user", json!({ "user_id": student.uid })).await;
    assert_eq!(body["data"]["teacher_ids"], json!(["recA"]));
}

#[tokio::test]
async fn test_add_unknown_student_to_classroom_is_atomic() {
    let app = TestApp::new();
    let (_, body) = app
        .post(
            "/api/add/classroom",
            json!({ "semester_id": "fall-2024", "teacher_id": "recA", "school_id": "42" }),
        )
        .await;
    let id = body["data"]["classroom_id"].as_str().unwrap().to_string();

    let (status, _) = app
        .post(
            "/api/add/classroom/student",
            json!({ "classroom_id": id, "student_id": "ghost" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.post("/api/get/classroom", json!({ "classroom_id": id })).await;
    assert_eq!(body["data"]["students"], json!([]));
}

#[tokio::test]
async fn test_delete_classroom() {
    let app = TestApp::new();
    let id = classroom_id("fall-2024", "recA");
    app.post(
        "/api/add/classroom",
        json!({ "semester_id": "fall-2024", "teacher_id": "recA", "school_id": "42" }),
    )
    .await;

    let (status, _) = app
        .delete("/api/delete/classroom", json!({ "classroom_id": id }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.store.count("Classroom").await, 0);
}

#[tokio::test]
async fn test_semester_schools() {
    let app = TestApp::new();
    app.create_semester("fall-2024").await;

    let (status, body) = app
        .post(
            "/api/add/semester/schools",
            json!({ "semester_id": "fall-2024", "name": "Analytical High", "address": " 1 Engine Way " }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = school_id("1 Engine Way");
    assert_eq!(body["data"]["school_id"], id);

    let (status, body) = app
        .post("/api/get/semester/schools", json!({ "semester_id": "fall-2024" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], id);
    assert_eq!(body["data"][0]["address"], "1 Engine Way");

    let (status, _) = app.post("/api/get/school", json!({ "school_id": "0" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_school_to_missing_semester() {
    let app = TestApp::new();

    let (status, _) = app
        .post(
            "/api/add/semester/schools",
            json!({ "semester_id": "nope", "name": "Analytical High", "address": "1 Engine Way" }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.store.count("School").await, 0);
}
