use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use rollcall_auth::{
    AccessTokenProvider, FirebaseIdentity, IdentityProvider, MemoryIdentity, ServiceAccountTokens,
    StaticToken,
};
use rollcall_config::{AirtableFieldNames, CorsConfig, ProviderMode};
use rollcall_db::{DocumentStore, FirestoreStore, MemoryStore};
use rollcall_roster::{AirtableRoster, MemoryRoster, RosterSource};

use crate::config::AppConfig;

const EMULATOR_TOKEN: &str = "owner";
const DEFAULT_VIEW: &str = "Grid view";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub roster: Arc<dyn RosterSource>,
    pub cors_config: CorsConfig,
    pub roster_fields: AirtableFieldNames,
    pub default_view: String,
    pub metrics: Option<PrometheusHandle>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("cors_config", &self.cors_config)
            .field("default_view", &self.default_view)
            .field("metrics_enabled", &self.metrics.is_some())
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        roster: Arc<dyn RosterSource>,
    ) -> Self {
        Self {
            store,
            identity,
            roster,
            cors_config: CorsConfig {
                allowed_origins: Vec::new(),
            },
            roster_fields: AirtableFieldNames::default(),
            default_view: DEFAULT_VIEW.to_string(),
            metrics: None,
        }
    }

    /// State backed entirely by process-local providers.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryIdentity::new()),
            Arc::new(MemoryRoster::new()),
        )
    }
}

fn http_client(timeout_secs: u64) -> Result<reqwest::Client, anyhow::Error> {
    let timeout = Duration::from_secs(timeout_secs);
    Ok(reqwest::Client::builder()
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()?)
}

/// Builds the provider clients selected by `ROLLCALL_PROVIDERS`.
pub fn init_app_state(
    config: &AppConfig,
    metrics: Option<PrometheusHandle>,
) -> Result<AppState, anyhow::Error> {
    config.validate()?;

    let mut state = match config.server.providers {
        ProviderMode::Memory => {
            info!("Using in-memory providers");
            AppState::in_memory()
        }
        ProviderMode::Firebase => {
            let http = http_client(config.server.provider_timeout_secs)?;
            let firebase = &config.firebase;

            let service_tokens: Option<Arc<dyn AccessTokenProvider>> = if firebase.emulated() {
                None
            } else {
                Some(Arc::new(ServiceAccountTokens::new(
                    http.clone(),
                    &firebase.service_account,
                )?))
            };
            let tokens_for = |emulator: &Option<String>| -> Arc<dyn AccessTokenProvider> {
                match (emulator, &service_tokens) {
                    (None, Some(tokens)) => tokens.clone(),
                    _ => Arc::new(StaticToken(EMULATOR_TOKEN.to_string())),
                }
            };

            let store = FirestoreStore::new(
                http.clone(),
                firebase,
                tokens_for(&firebase.firestore_emulator_host),
            );
            let identity = FirebaseIdentity::new(
                http.clone(),
                firebase,
                tokens_for(&firebase.auth_emulator_host),
            );
            let roster = AirtableRoster::new(http, &config.airtable);

            info!(
                project = %firebase.project_id,
                firestore_emulator = ?firebase.firestore_emulator_host,
                auth_emulator = ?firebase.auth_emulator_host,
                "Using Firebase and Airtable providers"
            );
            AppState::new(Arc::new(store), Arc::new(identity), Arc::new(roster))
        }
    };

    state.cors_config = config.cors.clone();
    state.roster_fields = config.airtable.fields.clone();
    state.default_view = config.airtable.default_view.clone();
    state.metrics = metrics;

    Ok(state)
}
