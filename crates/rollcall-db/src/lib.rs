//! # Rollcall DB
//!
//! Document storage for the Rollcall API.
//!
//! - [`store`]: The [`DocumentStore`] trait (get, list, atomic commit)
//! - [`write`]: Set, update, merge and delete writes with array transforms
//! - [`firestore`]: Firestore over the REST v1 API
//! - [`memory`]: A process-local store for development and tests
//!
//! Multi-document changes are built as a [`WriteBatch`] and committed in one
//! call, so either every document is updated or none is.
//!
//! # Example
//!
//! ```ignore
//! use rollcall_db::{DocPath, MemoryStore, Write, WriteBatch, string_values};
//!
//! let store = MemoryStore::new();
//! let mut batch = WriteBatch::new();
//! batch.push(
//!     Write::update(DocPath::new("Semester", "fall")?, Default::default())
//!         .array_union("teachers", string_values(["recTeacher01"])),
//! );
//! batch.commit(&store).await?;
//! ```

pub mod document;
pub mod error;
pub mod firestore;
pub mod memory;
pub mod path;
pub mod store;
pub mod write;

// Re-export commonly used types at crate root
pub use document::{Document, Fields, encode, fields};
pub use error::StoreError;
pub use firestore::FirestoreStore;
pub use memory::MemoryStore;
pub use path::DocPath;
pub use store::DocumentStore;
pub use write::{FieldTransform, TransformKind, Write, WriteBatch, WriteOp, string_values};
