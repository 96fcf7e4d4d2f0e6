use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use rollcall_core::serde::deserialize_nullable_string;
use rollcall_models::UserSummary;

use crate::validator::RequestFields;

/// Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSemesterRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub semester_id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub semester_name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    #[schema(example = "2024-09-01")]
    pub start_date: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    #[schema(example = "2024-12-20")]
    pub end_date: String,
}

impl RequestFields for CreateSemesterRequest {
    const FIELDS: &'static [&'static str] =
        &["semester_id", "semester_name", "start_date", "end_date"];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SemesterIdRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub semester_id: String,
}

impl RequestFields for SemesterIdRequest {
    const FIELDS: &'static [&'static str] = &["semester_id"];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SemesterStudentRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub semester_id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub student_id: String,
}

impl RequestFields for SemesterStudentRequest {
    const FIELDS: &'static [&'static str] = &["semester_id", "student_id"];
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SemesterStudentsResponse {
    pub semester_id: String,
    pub students: Vec<UserSummary>,
}
