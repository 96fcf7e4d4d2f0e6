use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use rollcall_models::Entity;

use crate::StoreError;

/// Top-level fields of a document.
pub type Fields = serde_json::Map<String, Value>;

/// A document read from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Decodes the fields into `E`, exposing the document ID under `E::ID_FIELD`.
    pub fn decode<E>(self) -> Result<E, StoreError>
    where
        E: Entity + DeserializeOwned,
    {
        let mut fields = self.fields;
        fields.insert(E::ID_FIELD.to_string(), Value::String(self.id));
        Ok(serde_json::from_value(Value::Object(fields))?)
    }

    /// Raw fields plus the document ID under `id`, for records without a model.
    pub fn into_json(self) -> Value {
        let mut fields = self.fields;
        fields
            .entry("id".to_string())
            .or_insert(Value::String(self.id));
        Value::Object(fields)
    }
}

/// Encodes `entity` as document fields. The ID field is dropped unless the
/// entity keeps a copy of its ID in the document body.
pub fn encode<E>(entity: &E) -> Result<Fields, StoreError>
where
    E: Entity + Serialize,
{
    let mut fields = fields(serde_json::to_value(entity)?)?;
    if !E::STORES_ID {
        fields.remove(E::ID_FIELD);
    }
    Ok(fields)
}

/// Unwraps a JSON object into document fields, for partial updates
/// written with `json!`.
pub fn fields(value: Value) -> Result<Fields, StoreError> {
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(StoreError::Serialization(serde::ser::Error::custom(format!(
            "expected an object, got {other}"
        )))),
    }
}
