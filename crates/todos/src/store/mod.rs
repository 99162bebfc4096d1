//! Session-scoped persistence for todo lists.
//!
//! [`TodoStore`] translates application operations into owner-scoped
//! statements, runs them through a [`QueryExecutor`] and assembles the
//! results into ordered domain values. It keeps no state between calls.
//!
//! Ownership misses (an id that does not exist or belongs to another user)
//! are reported as `false` or `None`, never as errors, so callers cannot
//! tell "not found" from "not yours".

mod credentials;
mod lists;
mod todos;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use todos_core::auth::CredentialVerifier;
use todos_core::storage::{OwnerScope, QueryExecutor};

const TODOS_TABLE: &str = "todos";
const TODO_LISTS_TABLE: &str = "todolists";

/// Undone first, then title ignoring case.
const TODO_ORDER: &str = "done, lower(title)";
const TODO_LIST_ORDER: &str = "lower(title)";

/// Persistence operations for one authenticated user.
#[derive(Clone)]
pub struct TodoStore {
    executor: Arc<dyn QueryExecutor>,
    verifier: Arc<dyn CredentialVerifier>,
    scope: OwnerScope,
}

impl TodoStore {
    /// Creates a store acting on behalf of `username`.
    pub fn new(
        executor: Arc<dyn QueryExecutor>,
        verifier: Arc<dyn CredentialVerifier>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            executor,
            verifier,
            scope: OwnerScope::new(username),
        }
    }

    /// Returns a store for another session sharing the same executor and verifier.
    pub fn with_username(&self, username: impl Into<String>) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            verifier: Arc::clone(&self.verifier),
            scope: OwnerScope::new(username),
        }
    }

    /// The username every operation is scoped to.
    pub fn username(&self) -> &str {
        self.scope.username()
    }
}
