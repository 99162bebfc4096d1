use std::sync::Arc;

use super::{Result, StorageError};

/// A single parameter or column value exchanged with the executor.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Bool(bool),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

/// A parameterized statement. Placeholders are positional (`?1`, `?2`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl Statement {
    /// Creates a statement from raw SQL and its parameters.
    pub fn new(sql: impl Into<String>, params: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

/// One result row: values in column order plus the shared column names.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<SqlValue>,
}

impl Row {
    /// Creates a row. `values` must line up with `columns`.
    pub fn new(columns: Arc<[String]>, values: Vec<SqlValue>) -> Self {
        Self { columns, values }
    }

    /// Returns the raw value of a column, if present.
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .position(|name| name == column)
            .and_then(|index| self.values.get(index))
    }

    fn require(&self, column: &str) -> Result<&SqlValue> {
        self.get(column)
            .ok_or_else(|| StorageError::InvalidData(format!("missing column `{column}`")))
    }

    pub fn get_i64(&self, column: &str) -> Result<i64> {
        match self.require(column)? {
            SqlValue::Integer(value) => Ok(*value),
            other => Err(type_mismatch(column, "integer", other)),
        }
    }

    pub fn get_string(&self, column: &str) -> Result<String> {
        match self.require(column)? {
            SqlValue::Text(value) => Ok(value.clone()),
            other => Err(type_mismatch(column, "text", other)),
        }
    }

    /// Reads a boolean column. Backends without a boolean type store 0/1.
    pub fn get_bool(&self, column: &str) -> Result<bool> {
        match self.require(column)? {
            SqlValue::Bool(value) => Ok(*value),
            SqlValue::Integer(0) => Ok(false),
            SqlValue::Integer(1) => Ok(true),
            other => Err(type_mismatch(column, "boolean", other)),
        }
    }
}

fn type_mismatch(column: &str, expected: &str, found: &SqlValue) -> StorageError {
    StorageError::InvalidData(format!(
        "column `{column}` expected {expected}, found {found:?}"
    ))
}

/// The outcome of executing a statement.
///
/// `row_count` is the number of rows returned by a query, or the number of
/// rows affected by an insert, update or delete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub rows: Vec<Row>,
    pub row_count: u64,
}

impl QueryResult {
    /// Result of a query that returned rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let row_count = rows.len() as u64;
        Self { rows, row_count }
    }

    /// Result of a statement that changed `row_count` rows and returned none.
    pub fn affected(row_count: u64) -> Self {
        Self {
            rows: Vec::new(),
            row_count,
        }
    }

    /// True when at least one row was returned or affected.
    pub fn affected_any(&self) -> bool {
        self.row_count > 0
    }

    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}
