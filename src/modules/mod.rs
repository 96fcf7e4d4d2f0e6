pub mod auth;
pub mod classrooms;
pub mod health;
pub mod roster;
pub mod schools;
pub mod semesters;
pub mod teachers;
pub mod users;
