//! # Rollcall Models
//!
//! Documents as they are stored in the document database.
//!
//! Each model implements [`Entity`], which names its collection and the field
//! that carries the document ID. Membership lists (`teachers`, `students`, ...)
//! are maintained with array-union/array-remove writes, so they behave like sets
//! even though they are stored as arrays.
//!
//! ```text
//! Semester ──teachers──▶ Teacher ──school──▶ School
//!    │  └──students──▶ User                     ▲
//!    └──────────── Classroom (hash(semester ‖ teacher)) ──┘
//! ```

pub mod classroom;
pub mod school;
pub mod semester;
pub mod teacher;
pub mod user;

pub use classroom::Classroom;
pub use school::School;
pub use semester::Semester;
pub use teacher::Teacher;
pub use user::{User, UserSummary};

/// Collection names, matching the documents already in production.
pub mod collections {
    pub const USERS: &str = "Users";
    pub const SEMESTERS: &str = "Semester";
    pub const SCHOOLS: &str = "School";
    pub const TEACHERS: &str = "Teacher";
    pub const CLASSROOMS: &str = "Classroom";
}

/// A model stored as one document of a collection.
pub trait Entity {
    const COLLECTION: &'static str;

    /// Field the document ID is exposed under when the model is decoded.
    const ID_FIELD: &'static str = "id";

    /// Whether the ID field is also written into the document body.
    const STORES_ID: bool = false;
}
