//! Request extractors for cross-cutting concerns.
//!
//! - [`auth`]: [`AuthUser`](auth::AuthUser), the caller identified by a bearer UID
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn current_user(auth_user: AuthUser) -> impl IntoResponse {
//!     auth_user.uid().to_string()
//! }
//! ```

pub mod auth;
