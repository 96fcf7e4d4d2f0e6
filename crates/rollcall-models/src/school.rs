use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{Entity, collections};

/// School document keyed by the hash of its address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct School {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub teachers: Vec<String>,
}

impl Entity for School {
    const COLLECTION: &'static str = collections::SCHOOLS;
}
