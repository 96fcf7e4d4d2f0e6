//! Conversion between plain JSON and Firestore's typed `Value` encoding.
//!
//! ```text
//! "fall"        <-> {"stringValue": "fall"}
//! 3             <-> {"integerValue": "3"}
//! ["a"]         <-> {"arrayValue": {"values": [{"stringValue": "a"}]}}
//! {"k": true}   <-> {"mapValue": {"fields": {"k": {"booleanValue": true}}}}
//! ```
//!
//! Timestamps, references and bytes decode to their string form; geo points
//! decode to `{latitude, longitude}`.

use serde_json::{Map, Number, Value, json};

use crate::{Fields, StoreError};

pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64().unwrap_or_default() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            if items.is_empty() {
                json!({ "arrayValue": {} })
            } else {
                let values: Vec<Value> = items.iter().map(encode_value).collect();
                json!({ "arrayValue": { "values": values } })
            }
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

pub fn encode_fields(fields: &Fields) -> Value {
    Value::Object(
        fields
            .iter()
            .map(|(key, value)| (key.clone(), encode_value(value)))
            .collect(),
    )
}

fn malformed(detail: impl Into<String>) -> StoreError {
    StoreError::Serialization(serde::de::Error::custom(format!(
        "unexpected Firestore value: {}",
        detail.into()
    )))
}

fn decode_double(raw: &Value) -> Result<Value, StoreError> {
    match raw {
        Value::Number(n) => Ok(Value::Number(n.clone())),
        // NaN and the infinities arrive as strings and have no JSON number form.
        Value::String(_) => Ok(Value::Null),
        other => Err(malformed(other.to_string())),
    }
}

pub fn decode_value(value: &Value) -> Result<Value, StoreError> {
    let Some((kind, raw)) = value.as_object().and_then(|obj| obj.iter().next()) else {
        return Err(malformed(value.to_string()));
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => Ok(Value::Bool(raw.as_bool().unwrap_or_default())),
        "integerValue" => {
            let parsed = match raw {
                Value::String(s) => s.parse::<i64>().ok(),
                Value::Number(n) => n.as_i64(),
                _ => None,
            };
            parsed
                .map(|i| Value::Number(Number::from(i)))
                .ok_or_else(|| malformed(raw.to_string()))
        }
        "doubleValue" => decode_double(raw),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => raw
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| malformed(raw.to_string())),
        "geoPointValue" => Ok(json!({
            "latitude": raw.get("latitude").cloned().unwrap_or(json!(0.0)),
            "longitude": raw.get("longitude").cloned().unwrap_or(json!(0.0)),
        })),
        "arrayValue" => {
            let items = raw
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect::<Result<Vec<_>, _>>())
                .transpose()?
                .unwrap_or_default();
            Ok(Value::Array(items))
        }
        "mapValue" => {
            let fields = decode_fields(raw.get("fields"))?;
            Ok(Value::Object(fields))
        }
        other => Err(malformed(other)),
    }
}

/// Decodes the `fields` object of a document or map value. Absent means empty.
pub fn decode_fields(fields: Option<&Value>) -> Result<Fields, StoreError> {
    let Some(fields) = fields else {
        return Ok(Map::new());
    };
    let Some(map) = fields.as_object() else {
        return Err(malformed(fields.to_string()));
    };

    map.iter()
        .map(|(key, value)| Ok::<_, StoreError>((key.clone(), decode_value(value)?)))
        .collect()
}

/// Quotes a top-level field name for use in an update mask or transform.
pub fn field_path(name: &str) -> String {
    let simple = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if simple {
        name.to_string()
    } else {
        format!("`{}`", name.replace('\\', "\\\\").replace('`', "\\`"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_scalars() {
        assert_eq!(encode_value(&json!("fall")), json!({"stringValue": "fall"}));
        assert_eq!(encode_value(&json!(3)), json!({"integerValue": "3"}));
        assert_eq!(encode_value(&json!(1.5)), json!({"doubleValue": 1.5}));
        assert_eq!(encode_value(&json!(null)), json!({"nullValue": null}));
    }

    #[test]
    fn test_encode_nested() {
        let encoded = encode_value(&json!({"teachers": ["rec1"], "empty": []}));
        assert_eq!(
            encoded,
            json!({"mapValue": {"fields": {
                "teachers": {"arrayValue": {"values": [{"stringValue": "rec1"}]}},
                "empty": {"arrayValue": {}}
            }}})
        );
    }

    #[test]
    fn test_decode_document_fields() {
        let fields = json!({
            "semester_id": {"stringValue": "fall"},
            "count": {"integerValue": "12"},
            "teachers": {"arrayValue": {"values": [{"stringValue": "a"}, {"stringValue": "b"}]}},
            "students": {"arrayValue": {}},
            "created": {"timestampValue": "2024-09-01T00:00:00Z"},
            "where": {"geoPointValue": {"latitude": 1.0, "longitude": 2.0}},
            "meta": {"mapValue": {}}
        });

        let decoded = decode_fields(Some(&fields)).unwrap();
        assert_eq!(decoded["semester_id"], "fall");
        assert_eq!(decoded["count"], 12);
        assert_eq!(decoded["teachers"], json!(["a", "b"]));
        assert_eq!(decoded["students"], json!([]));
        assert_eq!(decoded["created"], "2024-09-01T00:00:00Z");
        assert_eq!(decoded["where"]["longitude"], 2.0);
        assert_eq!(decoded["meta"], json!({}));
    }

    #[test]
    fn test_decode_rejects_unknown_kinds() {
        assert!(decode_value(&json!({"vectorValue": {}})).is_err());
        assert!(decode_value(&json!("bare")).is_err());
    }

    #[test]
    fn test_field_path_quoting() {
        assert_eq!(field_path("teachers"), "teachers");
        assert_eq!(field_path("semester_start_date"), "semester_start_date");
        assert_eq!(field_path("School Address"), "`School Address`");
        assert_eq!(field_path("1st"), "`1st`");
    }
}
