use async_trait::async_trait;

use super::{QueryResult, Result, Statement};

/// Executes parameterized statements against durable storage.
///
/// Implementations must be safe to call concurrently from one session;
/// statements may be serialized internally.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Runs one statement and returns its rows or affected-row count.
    async fn execute(&self, statement: Statement) -> Result<QueryResult>;
}
