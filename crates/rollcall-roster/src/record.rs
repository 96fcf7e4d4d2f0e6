use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use rollcall_config::AirtableFieldNames;

/// One spreadsheet row as returned by the roster source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RosterRecord {
    pub id: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub fields: serde_json::Map<String, Value>,
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

impl RosterRecord {
    pub fn new(id: impl Into<String>, fields: serde_json::Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
            created_time: None,
        }
    }

    /// Text of a cell. Lookup and linked-record cells hold arrays; their
    /// first element is used.
    pub fn text(&self, field: &str) -> Option<String> {
        let text = match self.fields.get(field)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(items) => match items.first()? {
                Value::String(s) => s.trim().to_string(),
                Value::Number(n) => n.to_string(),
                _ => return None,
            },
            _ => return None,
        };

        (!text.is_empty()).then_some(text)
    }
}

/// A roster row mapped to the teacher and school it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherRow {
    pub teacher_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub school_name: String,
    pub school_address: String,
}

/// Why a record could not be mapped to a [`TeacherRow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SkippedRecord {
    pub record_id: String,
    pub missing: Vec<String>,
}

impl TeacherRow {
    /// Maps a record, requiring a teacher name and a school address.
    /// A missing school name falls back to the address.
    pub fn from_record(
        record: &RosterRecord,
        names: &AirtableFieldNames,
    ) -> Result<Self, SkippedRecord> {
        let name = record.text(&names.name);
        let school_address = record.text(&names.school_address);

        let missing: Vec<String> = [(&names.name, &name), (&names.school_address, &school_address)]
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| field.clone())
            .collect();

        match (name, school_address) {
            (Some(name), Some(school_address)) => Ok(Self {
                teacher_id: record.id.clone(),
                name,
                email: record.text(&names.email).unwrap_or_default(),
                phone: record.text(&names.phone).unwrap_or_default(),
                school_name: record
                    .text(&names.school)
                    .unwrap_or_else(|| school_address.clone()),
                school_address,
            }),
            _ => Err(SkippedRecord {
                record_id: record.id.clone(),
                missing,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: Value) -> RosterRecord {
        match fields {
            Value::Object(map) => RosterRecord::new("recTeacher01", map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_maps_a_complete_row() {
        let record = record(json!({
            "Name": " Ada Lovelace ",
            "Email": "ada@example.com",
            "Phone": 5551234,
            "School": ["Elm Elementary"],
            "School Address": ["12 Elm Rd"]
        }));

        let row = TeacherRow::from_record(&record, &AirtableFieldNames::default()).unwrap();
        assert_eq!(row.teacher_id, "recTeacher01");
        assert_eq!(row.name, "Ada Lovelace");
        assert_eq!(row.phone, "5551234");
        assert_eq!(row.school_name, "Elm Elementary");
        assert_eq!(row.school_address, "12 Elm Rd");
    }

    #[test]
    fn test_school_name_falls_back_to_address() {
        let record = record(json!({"Name": "Ada", "School Address": "12 Elm Rd"}));

        let row = TeacherRow::from_record(&record, &AirtableFieldNames::default()).unwrap();
        assert_eq!(row.school_name, "12 Elm Rd");
        assert_eq!(row.email, "");
    }

    #[test]
    fn test_missing_required_fields_are_reported() {
        let record = record(json!({"Email": "ada@example.com", "Name": "  "}));

        let skipped = TeacherRow::from_record(&record, &AirtableFieldNames::default()).unwrap_err();
        assert_eq!(skipped.record_id, "recTeacher01");
        assert_eq!(skipped.missing, vec!["Name", "School Address"]);
    }

    #[test]
    fn test_custom_field_names() {
        let names = AirtableFieldNames {
            name: "Teacher".to_string(),
            school_address: "Address".to_string(),
            ..Default::default()
        };
        let record = record(json!({"Teacher": "Ada", "Address": "12 Elm Rd"}));

        assert!(TeacherRow::from_record(&record, &names).is_ok());
    }
}
