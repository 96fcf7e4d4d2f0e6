use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use rollcall_auth::StaticToken;
use rollcall_config::{FirebaseConfig, ServiceAccountConfig};
use rollcall_db::{DocPath, DocumentStore, FirestoreStore, StoreError, Write, string_values};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const ROOT: &str = "/v1/projects/demo/databases/(default)/documents";

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/v1", addr)
}

fn store(base_url: String) -> FirestoreStore {
    let config = FirebaseConfig {
        api_key: String::new(),
        project_id: "demo".to_string(),
        database_id: "(default)".to_string(),
        firestore_emulator_host: None,
        auth_emulator_host: None,
        service_account: ServiceAccountConfig {
            project_id: "demo".to_string(),
            private_key_id: String::new(),
            private_key: String::new(),
            client_email: String::new(),
            token_uri: String::new(),
        },
    };

    FirestoreStore::new(
        reqwest::Client::new(),
        &config,
        Arc::new(StaticToken("owner".to_string())),
    )
    .with_base_url(base_url)
}

#[tokio::test]
async fn test_get_decodes_document_and_maps_404_to_none() {
    let router = Router::new()
        .route(
            &format!("{ROOT}/Semester/fall"),
            get(|| async {
                Json(json!({
                    "name": "projects/demo/databases/(default)/documents/Semester/fall",
                    "fields": {
                        "semester_id": {"stringValue": "fall"},
                        "teachers": {"arrayValue": {"values": [{"stringValue": "rec1"}]}}
                    }
                }))
            }),
        )
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"error": {"code": 404, "message": "not found", "status": "NOT_FOUND"}})),
            )
        });
    let store = store(spawn(router).await);

    let doc = store
        .get(&DocPath::new("Semester", "fall").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(doc.id, "fall");
    assert_eq!(doc.fields["teachers"], json!(["rec1"]));

    let missing = store
        .get(&DocPath::new("Semester", "spring").unwrap())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_list_follows_page_tokens() {
    let router = Router::new().route(
        &format!("{ROOT}/Users"),
        get(|Query(query): Query<HashMap<String, String>>| async move {
            match query.get("pageToken").map(String::as_str) {
                None => Json(json!({
                    "documents": [
                        {"name": "projects/demo/databases/(default)/documents/Users/u1",
                         "fields": {"name": {"stringValue": "Ada"}}}
                    ],
                    "nextPageToken": "page-2"
                })),
                Some("page-2") => Json(json!({
                    "documents": [
                        {"name": "projects/demo/databases/(default)/documents/Users/u2"}
                    ]
                })),
                Some(_) => Json(json!({})),
            }
        }),
    );
    let store = store(spawn(router).await);

    let users = store.list("Users").await.unwrap();
    let ids: Vec<&str> = users.iter().map(|doc| doc.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u2"]);
    assert!(users[1].fields.is_empty());
}

#[tokio::test]
async fn test_commit_sends_all_writes_in_one_request() {
    let captured: Arc<Mutex<Vec<Value>>> = Arc::default();

    let router = Router::new()
        .route(
            &format!("{ROOT}:commit"),
            post(
                |State(captured): State<Arc<Mutex<Vec<Value>>>>, Json(body): Json<Value>| async move {
                    captured.lock().unwrap().push(body);
                    Json(json!({"writeResults": [{}, {}]}))
                },
            ),
        )
        .with_state(captured.clone());
    let store = store(spawn(router).await);

    store
        .commit(vec![
            Write::update(DocPath::new("Semester", "fall").unwrap(), Default::default())
                .array_union("teachers", string_values(["rec1"])),
            Write::delete(DocPath::new("Classroom", "42").unwrap()),
        ])
        .await
        .unwrap();

    let requests = captured.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let writes = requests[0]["writes"].as_array().unwrap();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0]["currentDocument"]["exists"], true);
    assert!(writes[1]["delete"].as_str().unwrap().ends_with("/Classroom/42"));
}

#[tokio::test]
async fn test_commit_precondition_failure_is_not_found() {
    let router = Router::new().route(
        &format!("{ROOT}:commit"),
        post(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"error": {
                    "code": 404,
                    "message": "No document to update: projects/demo/databases/(default)/documents/Semester/gone",
                    "status": "NOT_FOUND"
                }})),
            )
        }),
    );
    let store = store(spawn(router).await);

    let err = store
        .commit(vec![Write::update(
            DocPath::new("Semester", "gone").unwrap(),
            Default::default(),
        )])
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(message) if message.contains("No document to update")));
}
