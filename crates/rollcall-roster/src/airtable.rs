//! Airtable over the REST v0 API.
//!
//! Listing a view returns up to 100 records per page; the `offset` of each
//! page is passed back to fetch the next one until no offset is returned.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use rollcall_config::AirtableConfig;

use crate::{RosterError, RosterRecord, RosterSource};

pub struct AirtableRoster {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    base_id: String,
    table_id: String,
}

impl std::fmt::Debug for AirtableRoster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirtableRoster")
            .field("api_url", &self.api_url)
            .field("base_id", &self.base_id)
            .field("table_id", &self.table_id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct ListPage {
    #[serde(default)]
    records: Vec<RosterRecord>,
    offset: Option<String>,
}

/// `{"error": {"type": ..., "message": ...}}` or `{"error": "TYPE"}`.
fn error_type_and_message(body: &str) -> (String, String) {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return (String::new(), body.to_string());
    };

    match value.get("error") {
        Some(Value::String(kind)) => (kind.clone(), kind.clone()),
        Some(Value::Object(error)) => {
            let kind = error
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| kind.clone());
            (kind, message)
        }
        _ => (String::new(), body.to_string()),
    }
}

impl AirtableRoster {
    pub fn new(http: reqwest::Client, config: &AirtableConfig) -> Self {
        Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            base_id: config.base_id.clone(),
            table_id: config.teacher_table_id.clone(),
        }
    }

    fn url(&self, record_id: Option<&str>) -> Result<reqwest::Url, RosterError> {
        let mut url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| RosterError::Endpoint(format!("{}: {}", self.api_url, e)))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| RosterError::Endpoint(self.api_url.clone()))?;
            segments
                .pop_if_empty()
                .extend(["v0", self.base_id.as_str(), self.table_id.as_str()]);
            if let Some(id) = record_id {
                segments.push(id);
            }
        }

        Ok(url)
    }

    async fn get(
        &self,
        operation: &'static str,
        url: reqwest::Url,
    ) -> Result<reqwest::Response, RosterError> {
        metrics::counter!(
            "provider_calls_total",
            "provider" => "airtable",
            "operation" => operation
        )
        .increment(1);

        Ok(self.http.get(url).bearer_auth(&self.api_key).send().await?)
    }
}

#[async_trait]
impl RosterSource for AirtableRoster {
    #[instrument(skip(self))]
    async fn list_records(&self, view: &str) -> Result<Vec<RosterRecord>, RosterError> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut url = self.url(None)?;
            url.query_pairs_mut().append_pair("view", view);
            if let Some(offset) = &offset {
                url.query_pairs_mut().append_pair("offset", offset);
            }

            let response = self.get("list", url).await?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let (kind, message) = error_type_and_message(&body);
                if kind == "VIEW_NAME_NOT_FOUND" {
                    return Err(RosterError::ViewNotFound(view.to_string()));
                }
                return Err(RosterError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let page: ListPage = response.json().await?;
            records.extend(page.records);

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        debug!(count = records.len(), "Listed roster records");
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn find_record(&self, record_id: &str) -> Result<Option<RosterRecord>, RosterError> {
        let response = self.get("find", self.url(Some(record_id))?).await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let (_, message) = error_type_and_message(&body);
            return Err(RosterError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(Some(response.json().await?))
    }
}
