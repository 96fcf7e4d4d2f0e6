use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{Entity, collections};

/// Profile document keyed by the auth account UID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub active_semesters: Vec<String>,
    #[serde(default)]
    pub teacher_ids: Vec<String>,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Entity for User {
    const COLLECTION: &'static str = collections::USERS;
}

/// The subset of a profile listed for a semester or a teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}
