mod conversions;
mod error;
mod query;
mod traits;
mod types;

pub use conversions::{
    row_to_password_hash, row_to_todo, row_to_todo_list, rows_to, TODO_COLUMNS, TODO_LIST_COLUMNS,
};
pub use error::{classify_error_message, Result, StorageError};
pub use query::{Delete, Insert, OwnerScope, Select, Update, OWNER_COLUMN};
pub use traits::QueryExecutor;
pub use types::{QueryResult, Row, SqlValue, Statement};
