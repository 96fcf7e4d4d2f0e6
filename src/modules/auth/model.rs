use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use rollcall_core::serde::deserialize_nullable_string;

use crate::validator::RequestFields;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub password: String,
}

impl RequestFields for RegisterRequest {
    const FIELDS: &'static [&'static str] = &["email", "name", "password"];
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub password: String,
}

impl RequestFields for LoginRequest {
    const FIELDS: &'static [&'static str] = &["email", "password"];
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ResetRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    #[validate(length(min = 1))]
    pub email: String,
}

impl RequestFields for ResetRequest {
    const FIELDS: &'static [&'static str] = &["email"];
}

/// Returned by register and login. `token` is the account UID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub name: String,
    pub email: String,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CurrentUserResponse {
    pub uid: String,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IsAdminResponse {
    pub uid: String,
    pub is_admin: bool,
}
