//! SQLite schema definitions and SQL query constants.
//!
//! Only bootstrap DDL and user administration live here. The todo, list
//! and credential statements belong to `TodoStore`.

/// SQL statement to create all tables.
///
/// `todos` references `todolists` through `(todolist_id, username)`, so a
/// todo can never point at a list owned by someone else. Deleting a list
/// cascades to its todos.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Users table
CREATE TABLE IF NOT EXISTS users (
    username TEXT PRIMARY KEY,
    password TEXT NOT NULL
);

-- Todo lists table
CREATE TABLE IF NOT EXISTS todolists (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    username TEXT NOT NULL,
    UNIQUE (username, title),
    UNIQUE (id, username),
    FOREIGN KEY (username) REFERENCES users(username) ON DELETE CASCADE
);

-- Todos table
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    done BOOLEAN NOT NULL DEFAULT 0,
    todolist_id INTEGER NOT NULL,
    username TEXT NOT NULL,
    FOREIGN KEY (todolist_id, username) REFERENCES todolists(id, username) ON DELETE CASCADE
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_todolists_username ON todolists(username);
CREATE INDEX IF NOT EXISTS idx_todos_list_owner ON todos(todolist_id, username);
CREATE INDEX IF NOT EXISTS idx_todos_username ON todos(username);
"#;

pub const INSERT_USER: &str = r#"
INSERT INTO users (username, password)
VALUES (?1, ?2)
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS todolists"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS todos"));
        assert!(CREATE_TABLES.contains("UNIQUE (username, title)"));
        assert!(CREATE_TABLES.contains("ON DELETE CASCADE"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_USER.contains("INSERT"));
        assert!(INSERT_USER.contains("?2"));
    }
}
