//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based `QueryExecutor` using `rusqlite` for
//! synchronous operations and `tokio-rusqlite` for async wrapping.

mod conversions;
mod error;
mod executor;
mod schema;

pub use executor::SqliteExecutor;
