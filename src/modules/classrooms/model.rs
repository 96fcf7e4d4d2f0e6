use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use rollcall_core::serde::deserialize_nullable_string;

use crate::validator::RequestFields;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClassroomRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub semester_id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub teacher_id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub school_id: String,
}

impl RequestFields for CreateClassroomRequest {
    const FIELDS: &'static [&'static str] = &["semester_id", "teacher_id", "school_id"];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ClassroomIdRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub classroom_id: String,
}

impl RequestFields for ClassroomIdRequest {
    const FIELDS: &'static [&'static str] = &["classroom_id"];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ClassroomStudentRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub classroom_id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub student_id: String,
}

impl RequestFields for ClassroomStudentRequest {
    const FIELDS: &'static [&'static str] = &["classroom_id", "student_id"];
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassroomIdResponse {
    pub classroom_id: String,
}
