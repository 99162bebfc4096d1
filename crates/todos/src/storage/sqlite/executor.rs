//! SQLite query executor.
//!
//! Implements `QueryExecutor` from `todos_core::storage` on top of a single
//! `tokio_rusqlite` connection. All statements run on the connection's
//! background thread, one at a time.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::types::Value;
use tokio_rusqlite::Connection;

use todos_core::storage::{
    QueryExecutor, QueryResult, Result, SqlValue, Statement, StorageError,
};

use super::conversions::{row_to_values, to_sqlite_value};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed query executor.
pub struct SqliteExecutor {
    conn: Connection,
}

impl SqliteExecutor {
    /// Opens a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened SQLite database");
        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the executor is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }

    /// Registers a user with an already hashed password.
    ///
    /// Fails with `StorageError::UniqueViolation` if the username is taken.
    pub async fn insert_user(&self, username: &str, password_hash: &str) -> Result<()> {
        let statement = Statement::new(
            schema::INSERT_USER,
            vec![SqlValue::from(username), SqlValue::from(password_hash)],
        );
        self.execute(statement).await?;
        tracing::info!(username, "User created");
        Ok(())
    }
}

#[async_trait]
impl QueryExecutor for SqliteExecutor {
    async fn execute(&self, statement: Statement) -> Result<QueryResult> {
        let Statement { sql, params } = statement;
        let params: Vec<Value> = params.into_iter().map(to_sqlite_value).collect();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare_cached(&sql).map_err(wrap_err)?;
                let bound = rusqlite::params_from_iter(params.iter());

                if stmt.column_count() == 0 {
                    let changed = stmt.execute(bound).map_err(wrap_err)?;
                    return Ok(QueryResult::affected(changed as u64));
                }

                let columns: Arc<[String]> = stmt
                    .column_names()
                    .into_iter()
                    .map(String::from)
                    .collect();
                let mut rows = stmt.query(bound).map_err(wrap_err)?;

                let mut collected = Vec::new();
                while let Some(row) = rows.next().map_err(wrap_err)? {
                    collected.push(row_to_values(row, &columns).map_err(wrap_err)?);
                }
                Ok(QueryResult::from_rows(collected))
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
