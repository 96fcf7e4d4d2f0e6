use serde::{Deserialize, Serialize};

/// The account returned by sign-up and sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub uid: String,
    pub email: String,
}

/// The account as seen through the admin API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub disabled: bool,
    pub custom_claims: serde_json::Map<String, serde_json::Value>,
}

impl AccountRecord {
    /// Admins carry the custom claim `admin: true`.
    pub fn is_admin(&self) -> bool {
        matches!(self.custom_claims.get("admin"), Some(serde_json::Value::Bool(true)))
    }
}
