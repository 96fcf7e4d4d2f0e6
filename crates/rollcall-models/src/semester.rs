use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{Entity, collections};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Semester {
    #[serde(rename = "semester_id", default)]
    pub id: String,
    #[serde(default)]
    pub semester_name: String,
    #[serde(rename = "semester_start_date", default)]
    pub start_date: String,
    #[serde(rename = "semester_end_date", default)]
    pub end_date: String,
    #[serde(default)]
    pub teachers: Vec<String>,
    #[serde(default)]
    pub students: Vec<String>,
    #[serde(default)]
    pub schools: Vec<String>,
}

impl Entity for Semester {
    const COLLECTION: &'static str = collections::SEMESTERS;
    const ID_FIELD: &'static str = "semester_id";
    const STORES_ID: bool = true;
}
