//! SQLite value conversion functions.
//!
//! Pure functions for converting between `SqlValue` and rusqlite values.
//! These are testable in isolation without database access.

use std::sync::Arc;

use rusqlite::types::{Type, Value, ValueRef};
use todos_core::storage::{Row, SqlValue};

/// Convert a statement parameter to a SQLite value. Booleans become 0/1.
pub fn to_sqlite_value(value: SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(v) => Value::Integer(v),
        SqlValue::Real(v) => Value::Real(v),
        SqlValue::Text(v) => Value::Text(v),
        SqlValue::Bool(v) => Value::Integer(i64::from(v)),
    }
}

/// Convert a SQLite column value to a `SqlValue`.
///
/// Blobs are rejected; no table in the schema stores them.
pub fn from_sqlite_value(
    index: usize,
    name: &str,
    value: ValueRef<'_>,
) -> rusqlite::Result<SqlValue> {
    match value {
        ValueRef::Null => Ok(SqlValue::Null),
        ValueRef::Integer(v) => Ok(SqlValue::Integer(v)),
        ValueRef::Real(v) => Ok(SqlValue::Real(v)),
        ValueRef::Text(bytes) => String::from_utf8(bytes.to_vec())
            .map(SqlValue::Text)
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
            }),
        ValueRef::Blob(_) => Err(rusqlite::Error::InvalidColumnType(
            index,
            name.to_string(),
            Type::Blob,
        )),
    }
}

/// Convert a rusqlite row to a `Row` sharing the statement's column names.
pub fn row_to_values(row: &rusqlite::Row<'_>, columns: &Arc<[String]>) -> rusqlite::Result<Row> {
    let mut values = Vec::with_capacity(columns.len());
    for (index, name) in columns.iter().enumerate() {
        values.push(from_sqlite_value(index, name, row.get_ref(index)?)?);
    }
    Ok(Row::new(Arc::clone(columns), values))
}
