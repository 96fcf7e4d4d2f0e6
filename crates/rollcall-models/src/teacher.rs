use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{Entity, collections};

/// Teacher document keyed by the spreadsheet record ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Teacher {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// School document ID.
    #[serde(default)]
    pub school: Option<String>,
    /// Semester document ID; cleared when the teacher is removed from it.
    #[serde(default)]
    pub semester: Option<String>,
}

impl Entity for Teacher {
    const COLLECTION: &'static str = collections::TEACHERS;
}
