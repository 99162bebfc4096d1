//! Row conversion functions.
//!
//! Pure functions turning executor rows into domain types. Testable in
//! isolation without a database.

use crate::todo::{Todo, TodoList};

use super::{Result, Row};

/// Column list selected for todos.
pub const TODO_COLUMNS: &str = "id, todolist_id, title, done, username";

/// Column list selected for todo lists.
pub const TODO_LIST_COLUMNS: &str = "id, title, username";

/// Convert a row to a Todo.
///
/// Expected columns: id, todolist_id, title, done, username
pub fn row_to_todo(row: &Row) -> Result<Todo> {
    Ok(Todo {
        id: row.get_i64("id")?,
        todolist_id: row.get_i64("todolist_id")?,
        title: row.get_string("title")?,
        done: row.get_bool("done")?,
        username: row.get_string("username")?,
    })
}

/// Convert a row to a TodoList with no todos attached.
///
/// Expected columns: id, title, username
pub fn row_to_todo_list(row: &Row) -> Result<TodoList> {
    Ok(TodoList::new(
        row.get_i64("id")?,
        row.get_string("title")?,
        row.get_string("username")?,
    ))
}

/// Extract the stored password hash from a credentials row.
pub fn row_to_password_hash(row: &Row) -> Result<String> {
    row.get_string("password")
}

/// Convert every row with `convert`, failing on the first bad row.
pub fn rows_to<T>(rows: &[Row], convert: fn(&Row) -> Result<T>) -> Result<Vec<T>> {
    rows.iter().map(convert).collect()
}
