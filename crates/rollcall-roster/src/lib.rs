//! # Rollcall Roster
//!
//! Read access to the teacher schedule spreadsheet.
//!
//! - [`source`]: The [`RosterSource`] trait (list a view, find a record)
//! - [`airtable`]: Airtable over the REST v0 API, following page offsets
//! - [`memory`]: Records held in memory for development and tests
//! - [`record`]: Raw records and their mapping to [`TeacherRow`]s
//!
//! # Example
//!
//! ```ignore
//! use rollcall_roster::{AirtableRoster, RosterSource, TeacherRow};
//!
//! let roster = AirtableRoster::new(reqwest::Client::new(), &config);
//! for record in roster.list_records("Grid view").await? {
//!     let row = TeacherRow::from_record(&record, &config.fields);
//! }
//! ```

pub mod airtable;
pub mod error;
pub mod memory;
pub mod record;
pub mod source;

// Re-export commonly used types at crate root
pub use airtable::AirtableRoster;
pub use error::RosterError;
pub use memory::MemoryRoster;
pub use record::{RosterRecord, SkippedRecord, TeacherRow};
pub use source::RosterSource;
