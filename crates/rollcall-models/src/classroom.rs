use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{Entity, collections};

/// Classroom document keyed by `hash(semester_id ‖ teacher_id)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Classroom {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub teacher: String,
    #[serde(default)]
    pub students: Vec<String>,
}

impl Entity for Classroom {
    const COLLECTION: &'static str = collections::CLASSROOMS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let classroom: Classroom = serde_json::from_value(json!({
            "id": "42",
            "school": "7",
            "semester": "fall",
            "teacher": "rec1"
        }))
        .unwrap();

        assert!(classroom.students.is_empty());
    }
}
