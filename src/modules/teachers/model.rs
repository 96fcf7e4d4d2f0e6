use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use rollcall_core::serde::{deserialize_nullable_string, deserialize_optional_string};

use crate::validator::RequestFields;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeacherRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub teacher_id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub school_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub semester_id: Option<String>,
}

impl RequestFields for CreateTeacherRequest {
    const FIELDS: &'static [&'static str] = &["teacher_id", "name"];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TeacherIdRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub teacher_id: String,
}

impl RequestFields for TeacherIdRequest {
    const FIELDS: &'static [&'static str] = &["teacher_id"];
}
