//! # Rollcall Core
//!
//! Core types, errors, and utilities shared by every Rollcall crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`response`]: The `{status, message, data, submission}` response envelope
//! - [`hash`]: Deterministic document ID derivation for classrooms and schools
//! - [`serde`]: Custom serde helpers for loosely-typed request bodies
//!
//! # Example
//!
//! ```ignore
//! use rollcall_core::{AppError, ApiResponse, hash::classroom_id};
//!
//! let id = classroom_id("fall-2024", "recTeacher01");
//! let response = ApiResponse::data(id).with_message("Classroom created.");
//!
//! let error = AppError::not_found(anyhow::anyhow!("Classroom not found"));
//! ```

pub mod errors;
pub mod hash;
pub mod response;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use hash::{classroom_id, hash_id, school_id};
pub use response::{ApiResponse, ResponseStatus};
