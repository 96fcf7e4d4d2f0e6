//! # Rollcall API
//!
//! A thin REST backend for school, semester and roster management. Documents
//! live in Firestore, accounts in Firebase Auth, and the teacher schedule in
//! an Airtable base.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── bin/cli.rs        # rollcall-cli: hashing and roster import
//! ├── config/           # AppConfig assembled from rollcall-config
//! ├── middleware/       # AuthUser extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/         # register, login, logout, reset, current user
//! │   ├── semesters/    # semester documents and student enrollment
//! │   ├── roster/       # teacher links and spreadsheet import
//! │   ├── schools/      # school documents
//! │   ├── teachers/     # teacher documents
//! │   ├── classrooms/   # classroom documents and rosters
//! │   ├── users/        # user profiles
//! │   └── health/       # liveness
//! └── state.rs          # provider clients shared by every handler
//! ```
//!
//! Each feature module follows the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Provider calls and batch writes
//! - `model.rs`: Request and response bodies
//! - `router.rs`: Axum router configuration
//!
//! ## Routes
//!
//! Writes live under `/api/add`, reads under `/api/get` (GET or POST with a
//! JSON body) and deletions under `/api/delete`. Every success response uses
//! the `{status, message, data, submission}` envelope from
//! [`rollcall_core::ApiResponse`].
//!
//! ## Providers
//!
//! [`state::AppState`] holds one `Arc<dyn _>` per provider:
//!
//! | Concern | Trait | Implementations |
//! |---------|-------|-----------------|
//! | Documents | [`rollcall_db::DocumentStore`] | Firestore REST, in-memory |
//! | Accounts | [`rollcall_auth::IdentityProvider`] | Identity Toolkit REST, in-memory |
//! | Teacher schedule | [`rollcall_roster::RosterSource`] | Airtable REST, in-memory |
//!
//! `ROLLCALL_PROVIDERS=memory` runs the whole API without external services.
//!
//! ## Authentication
//!
//! The bearer token handed out by register and login is the account UID
//! itself. It is not a secret: anyone who learns a UID can act as that
//! account, including deleting it through `/api/delete/user/currentUser`.
//! Only expose the API to trusted clients.
//!
//! ## Document IDs
//!
//! Classrooms are keyed by `hash(semester_id ‖ teacher_id)` and schools by
//! the hash of their address; see [`rollcall_core::hash`].

pub mod config;
pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use rollcall_auth;
pub use rollcall_config;
pub use rollcall_core;
pub use rollcall_db;
pub use rollcall_models;
pub use rollcall_roster;
