use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use rollcall_core::serde::{deserialize_nullable_string, deserialize_optional_string};
use rollcall_roster::{RosterRecord, SkippedRecord};

use crate::validator::RequestFields;

/// A teacher to link into a semester. The school is either an existing
/// `school_id` or a `school_address` (plus optional `school_name`) from
/// which the school ID is derived.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LinkTeacherRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub semester_id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub teacher_id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub school_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub school_address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub school_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
}

impl RequestFields for LinkTeacherRequest {
    const FIELDS: &'static [&'static str] =
        &["semester_id", "teacher_id", "name", "school_address"];

    fn missing_alternatives(&self) -> Vec<&'static str> {
        if self.school_id.is_none() && self.school_address.is_none() {
            vec!["school_address"]
        } else {
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ImportTeachersRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub semester_id: String,
    /// Spreadsheet view to import; the configured default when absent.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub view: Option<String>,
}

impl RequestFields for ImportTeachersRequest {
    const FIELDS: &'static [&'static str] = &["semester_id"];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SemesterTeacherRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub semester_id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub teacher_id: String,
}

impl RequestFields for SemesterTeacherRequest {
    const FIELDS: &'static [&'static str] = &["semester_id", "teacher_id"];
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TeacherRecordRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub teacher_id: String,
}

impl RequestFields for TeacherRecordRequest {
    const FIELDS: &'static [&'static str] = &["teacher_id"];
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct TeacherListRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub view: Option<String>,
}

impl RequestFields for TeacherListRequest {
    const FIELDS: &'static [&'static str] = &[];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LinkTeacherResponse {
    pub classroom_id: String,
    pub school_id: String,
}

/// Result of importing one spreadsheet view.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct ImportSummary {
    /// Classroom IDs created, in record order.
    pub classrooms: Vec<String>,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherRecordResponse {
    pub teacher: RosterRecord,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherListResponse {
    pub teacher_list: Vec<RosterRecord>,
}
