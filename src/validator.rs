use anyhow::anyhow;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use rollcall_core::AppError;

/// Declaration order of a request body's fields, used to list missing
/// fields in a stable order.
pub trait RequestFields {
    const FIELDS: &'static [&'static str];

    /// Required fields that per-field validation cannot express, such as
    /// one of two alternatives being absent.
    fn missing_alternatives(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

fn missing_fields<T: RequestFields>(
    value: &T,
    errors: Option<&ValidationErrors>,
) -> Vec<&'static str> {
    let failed = errors.map(ValidationErrors::field_errors);
    let alternatives = value.missing_alternatives();
    T::FIELDS
        .iter()
        .copied()
        .filter(|field| {
            alternatives.contains(field)
                || failed
                    .as_ref()
                    .is_some_and(|failed| failed.contains_key(*field))
        })
        .collect()
}

/// JSON body extractor that reports every missing required field at once.
///
/// Read routes also accept GET, so an absent body is treated as `{}`.
/// Required fields are `String`s deserialized with
/// [`deserialize_nullable_string`](rollcall_core::serde::deserialize_nullable_string)
/// and validated with `length(min = 1)`, which makes absent, `null` and `""`
/// all count as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + RequestFields,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(anyhow!("{}", rejection.body_text())))?;

        let raw: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };

        let value: T = serde_json::from_slice(raw).map_err(|err| {
            if err.is_data() {
                AppError::bad_request(anyhow!("Invalid field type in request"))
            } else {
                AppError::bad_request(anyhow!("Invalid request body"))
            }
        })?;

        let errors = value.validate().err();
        let missing = missing_fields(&value, errors.as_ref());
        if !missing.is_empty() {
            return Err(AppError::missing_fields(&missing));
        }
        if errors.is_some() {
            return Err(AppError::bad_request(anyhow!("Invalid request body")));
        }

        Ok(ValidatedJson(value))
    }
}
