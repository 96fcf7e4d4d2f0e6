use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use rollcall_config::{AirtableConfig, AirtableFieldNames};
use rollcall_roster::{AirtableRoster, RosterError, RosterSource};
use serde_json::json;
use std::collections::HashMap;

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn roster(api_url: String) -> AirtableRoster {
    AirtableRoster::new(
        reqwest::Client::new(),
        &AirtableConfig {
            api_key: "patSecret".to_string(),
            base_id: "appBase".to_string(),
            teacher_table_id: "tblTeachers".to_string(),
            default_view: "Grid view".to_string(),
            api_url,
            fields: AirtableFieldNames::default(),
        },
    )
}

async fn list(headers: HeaderMap, Query(query): Query<HashMap<String, String>>) -> (StatusCode, Json<serde_json::Value>) {
    assert_eq!(
        headers.get("authorization").and_then(|v| v.to_str().ok()),
        Some("Bearer patSecret")
    );

    match query.get("view").map(String::as_str) {
        Some("Grid view") => {}
        _ => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"error": {"type": "VIEW_NAME_NOT_FOUND", "message": "Could not find view"}})),
            );
        }
    }

    let page = match query.get("offset").map(String::as_str) {
        None => json!({
            "records": [
                {"id": "rec1", "createdTime": "2024-08-01T00:00:00.000Z", "fields": {"Name": "Ada"}},
                {"id": "rec2", "createdTime": "2024-08-01T00:00:00.000Z", "fields": {"Name": "Grace"}}
            ],
            "offset": "itrNext/rec2"
        }),
        Some("itrNext/rec2") => json!({
            "records": [
                {"id": "rec3", "createdTime": "2024-08-01T00:00:00.000Z", "fields": {}}
            ]
        }),
        Some(_) => json!({"records": []}),
    };
    (StatusCode::OK, Json(page))
}

async fn find(Path((_, _, id)): Path<(String, String, String)>) -> (StatusCode, Json<serde_json::Value>) {
    if id == "rec1" {
        (
            StatusCode::OK,
            Json(json!({"id": "rec1", "createdTime": "2024-08-01T00:00:00.000Z", "fields": {"Name": "Ada"}})),
        )
    } else {
        (StatusCode::NOT_FOUND, Json(json!({"error": "NOT_FOUND"})))
    }
}

fn router() -> Router {
    Router::new()
        .route("/v0/{base}/{table}", get(list))
        .route("/v0/{base}/{table}/{id}", get(find))
}

#[tokio::test]
async fn test_list_records_follows_offsets() {
    let roster = roster(spawn(router()).await);

    let records = roster.list_records("Grid view").await.unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["rec1", "rec2", "rec3"]);
    assert_eq!(records[0].fields["Name"], "Ada");
}

#[tokio::test]
async fn test_unknown_view_is_reported() {
    let roster = roster(spawn(router()).await);

    assert!(matches!(
        roster.list_records("Spring").await,
        Err(RosterError::ViewNotFound(view)) if view == "Spring"
    ));
}

#[tokio::test]
async fn test_find_record() {
    let roster = roster(spawn(router()).await);

    let record = roster.find_record("rec1").await.unwrap().unwrap();
    assert_eq!(record.created_time.as_deref(), Some("2024-08-01T00:00:00.000Z"));
    assert!(roster.find_record("recMissing").await.unwrap().is_none());
}
