use serde::{Deserialize, Deserializer};

/// Deserializes a string field that clients may send as `null`.
///
/// `null` becomes an empty string so that request validation reports the
/// field as missing instead of rejecting the whole body as malformed.
pub fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Like [`deserialize_nullable_string`] for optional fields: `null` and
/// blank strings both become `None`.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "deserialize_nullable_string")]
        semester_id: String,
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        view: Option<String>,
    }

    #[test]
    fn test_null_and_absent_become_empty() {
        let body: Body = serde_json::from_str(r#"{"semester_id": null}"#).unwrap();
        assert_eq!(body.semester_id, "");

        let body: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(body.semester_id, "");
        assert!(body.view.is_none());
    }

    #[test]
    fn test_blank_optional_is_none() {
        let body: Body = serde_json::from_str(r#"{"semester_id": "s1", "view": "  "}"#).unwrap();
        assert_eq!(body.semester_id, "s1");
        assert!(body.view.is_none());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(serde_json::from_str::<Body>(r#"{"semester_id": 42}"#).is_err());
    }
}
