use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use rollcall_core::serde::deserialize_nullable_string;

use crate::validator::RequestFields;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddSemesterSchoolRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub semester_id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub address: String,
}

impl RequestFields for AddSemesterSchoolRequest {
    const FIELDS: &'static [&'static str] = &["semester_id", "name", "address"];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SchoolIdRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub school_id: String,
}

impl RequestFields for SchoolIdRequest {
    const FIELDS: &'static [&'static str] = &["school_id"];
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SchoolIdResponse {
    pub school_id: String,
}
