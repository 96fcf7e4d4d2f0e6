//! # Rollcall Auth
//!
//! Account management through an identity provider.
//!
//! This crate provides:
//!
//! - [`provider`]: The [`IdentityProvider`] trait handlers depend on
//! - [`firebase`]: Firebase Auth over the Identity Toolkit REST API
//! - [`memory`]: A process-local provider for development and tests
//! - [`service_account`]: OAuth access tokens for admin-side Google APIs
//!
//! # Token model
//!
//! Register and login hand the account UID back to the caller as its token.
//! Protected routes send it as `Authorization: Bearer <uid>` and the server
//! verifies it with an admin [`IdentityProvider::lookup`].
//!
//! # Example
//!
//! ```ignore
//! use rollcall_auth::{IdentityProvider, MemoryIdentity};
//!
//! let identity = MemoryIdentity::new();
//! let account = identity.create_account("ada@example.com", "hunter22").await?;
//! let record = identity.lookup(&account.uid).await?;
//! ```

pub mod account;
pub mod error;
pub mod firebase;
pub mod memory;
pub mod provider;
pub mod service_account;

// Re-export commonly used types at crate root
pub use account::{Account, AccountRecord};
pub use error::{IdentityError, TokenError};
pub use firebase::FirebaseIdentity;
pub use memory::MemoryIdentity;
pub use provider::IdentityProvider;
pub use service_account::{AccessTokenProvider, ServiceAccountTokens, StaticToken};
