//! Firestore over the REST v1 API.
//!
//! Reads use `GET` on document and collection resources; every write goes
//! through `documents:commit`, which applies a list of writes atomically.

pub mod value;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument};

use rollcall_auth::AccessTokenProvider;
use rollcall_config::FirebaseConfig;

use crate::{
    DocPath, Document, DocumentStore, FieldTransform, StoreError, TransformKind, Write, WriteOp,
};
use value::{decode_fields, encode_fields, encode_value, field_path};

const LIVE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const PAGE_SIZE: &str = "300";

pub struct FirestoreStore {
    http: reqwest::Client,
    base_url: String,
    /// `projects/{project}/databases/{database}`
    database: String,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl std::fmt::Debug for FirestoreStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreStore")
            .field("base_url", &self.base_url)
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    name: String,
    fields: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<RawDocument>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

impl RawDocument {
    fn into_document(self) -> Result<Document, StoreError> {
        let id = self
            .name
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Ok(Document::new(id, decode_fields(self.fields.as_ref())?))
    }
}

fn encode_transform(transform: &FieldTransform) -> Value {
    let (key, values) = match &transform.kind {
        TransformKind::ArrayUnion(values) => ("appendMissingElements", values),
        TransformKind::ArrayRemove(values) => ("removeAllFromArray", values),
    };
    let values: Vec<Value> = values.iter().map(encode_value).collect();

    json!({
        "fieldPath": field_path(&transform.field),
        key: { "values": values },
    })
}

impl FirestoreStore {
    pub fn new(
        http: reqwest::Client,
        config: &FirebaseConfig,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        let base_url = match &config.firestore_emulator_host {
            Some(host) => format!("http://{}/v1", host),
            None => LIVE_BASE_URL.to_string(),
        };

        Self {
            http,
            base_url,
            database: format!(
                "projects/{}/databases/{}",
                config.project_id, config.database_id
            ),
            tokens,
        }
    }

    /// Points the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn document_name(&self, path: &DocPath) -> String {
        format!(
            "{}/documents/{}/{}",
            self.database,
            path.collection(),
            path.id()
        )
    }

    /// Builds a URL from resource segments, percent-encoding each one.
    fn url(&self, resource: &str) -> Result<reqwest::Url, StoreError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| StoreError::Endpoint(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| StoreError::Endpoint(self.base_url.clone()))?
            .pop_if_empty()
            .extend(resource.split('/'));

        Ok(url)
    }

    async fn send(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, StoreError> {
        metrics::counter!(
            "provider_calls_total",
            "provider" => "firestore",
            "operation" => operation
        )
        .increment(1);

        let token = self.tokens.access_token().await?;
        Ok(request.bearer_auth(token).send().await?)
    }

    async fn error_from(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        let (code, message) = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => (envelope.error.status, envelope.error.message),
            Err(_) => (String::new(), body),
        };

        match code.as_str() {
            "NOT_FOUND" => StoreError::NotFound(message),
            "ALREADY_EXISTS" => StoreError::AlreadyExists(message),
            _ => StoreError::Api { status, message },
        }
    }

    fn encode_write(&self, write: &Write) -> Value {
        let name = self.document_name(&write.path);

        let mut encoded = match &write.op {
            WriteOp::Delete => return json!({ "delete": name }),
            WriteOp::Set(fields) => json!({
                "update": { "name": name, "fields": encode_fields(fields) },
            }),
            WriteOp::Update { fields, must_exist } => {
                let mask: Vec<String> = fields.keys().map(|key| field_path(key)).collect();
                let mut encoded = json!({
                    "update": { "name": name, "fields": encode_fields(fields) },
                    "updateMask": { "fieldPaths": mask },
                });
                if *must_exist {
                    encoded["currentDocument"] = json!({ "exists": true });
                }
                encoded
            }
        };

        if !write.transforms.is_empty() {
            let transforms: Vec<Value> = write.transforms.iter().map(encode_transform).collect();
            encoded["updateTransforms"] = Value::Array(transforms);
        }

        encoded
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    #[instrument(skip(self), fields(path = %path))]
    async fn get(&self, path: &DocPath) -> Result<Option<Document>, StoreError> {
        let url = self.url(&self.document_name(path))?;
        let response = self.send("get", self.http.get(url)).await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let raw: RawDocument = response.json().await?;
        Ok(Some(raw.into_document()?))
    }

    #[instrument(skip(self))]
    async fn list(&self, collection: &'static str) -> Result<Vec<Document>, StoreError> {
        let resource = format!("{}/documents/{}", self.database, collection);
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = self.url(&resource)?;
            url.query_pairs_mut().append_pair("pageSize", PAGE_SIZE);
            if let Some(token) = &page_token {
                url.query_pairs_mut().append_pair("pageToken", token);
            }

            let response = self.send("list", self.http.get(url)).await?;
            if !response.status().is_success() {
                return Err(Self::error_from(response).await);
            }

            let page: ListResponse = response.json().await?;
            for raw in page.documents {
                documents.push(raw.into_document()?);
            }

            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(count = documents.len(), "Listed collection");
        Ok(documents)
    }

    #[instrument(skip(self, writes), fields(writes = writes.len()))]
    async fn commit(&self, writes: Vec<Write>) -> Result<(), StoreError> {
        let url = self.url(&format!("{}/documents:commit", self.database))?;
        let body = json!({
            "writes": writes.iter().map(|write| self.encode_write(write)).collect::<Vec<_>>(),
        });

        let response = self.send("commit", self.http.post(url).json(&body)).await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(())
    }
}
