use crate::{ConfigError, env_or, require_vars};

/// Column names of the teacher schedule table.
#[derive(Clone, Debug)]
pub struct AirtableFieldNames {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub school: String,
    pub school_address: String,
}

impl Default for AirtableFieldNames {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            email: "Email".to_string(),
            phone: "Phone".to_string(),
            school: "School".to_string(),
            school_address: "School Address".to_string(),
        }
    }
}

impl AirtableFieldNames {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: env_or("AIRTABLE_FIELD_NAME", &defaults.name),
            email: env_or("AIRTABLE_FIELD_EMAIL", &defaults.email),
            phone: env_or("AIRTABLE_FIELD_PHONE", &defaults.phone),
            school: env_or("AIRTABLE_FIELD_SCHOOL", &defaults.school),
            school_address: env_or("AIRTABLE_FIELD_SCHOOL_ADDRESS", &defaults.school_address),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
    pub teacher_table_id: String,
    pub default_view: String,
    pub api_url: String,
    pub fields: AirtableFieldNames,
}

impl AirtableConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env_or("AIRTABLE_API_KEY", ""),
            base_id: env_or("AIRTABLE_DATABASE_ID", ""),
            teacher_table_id: env_or("AIRTABLE_TEACHER_SCHEDULE_TABLE_ID", ""),
            default_view: env_or("AIRTABLE_DEFAULT_VIEW", "Grid view"),
            api_url: env_or("AIRTABLE_API_URL", "https://api.airtable.com"),
            fields: AirtableFieldNames::from_env(),
        }
    }

    pub fn require(&self) -> Result<(), ConfigError> {
        require_vars(&[
            ("AIRTABLE_API_KEY", &self.api_key),
            ("AIRTABLE_DATABASE_ID", &self.base_id),
            ("AIRTABLE_TEACHER_SCHEDULE_TABLE_ID", &self.teacher_table_id),
        ])
    }
}
