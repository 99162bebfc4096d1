//! todos - per-user todo lists on SQLite.
//!
//! [`TodoStore`] is the entry point: one instance per authenticated user,
//! with every statement scoped to that user's rows.

pub mod cli;
pub mod config;
pub mod credentials;
pub mod output;
pub mod storage;
pub mod store;

pub use config::Config;
pub use credentials::{Argon2Verifier, CredentialError};
pub use storage::SqliteExecutor;
pub use store::TodoStore;
