use serde::{Deserialize, Serialize};

/// A single task inside a todo list.
///
/// `username` is redundant with the parent list's owner. It is carried so
/// every query can filter on it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub todolist_id: i64,
    pub title: String,
    pub done: bool,
    pub username: String,
}

impl Todo {
    /// Creates an undone todo.
    pub fn new(
        id: i64,
        todolist_id: i64,
        title: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id,
            todolist_id,
            title: title.into(),
            done: false,
            username: username.into(),
        }
    }

    /// Sets the done flag.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

/// A named, user-owned container of todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: i64,
    pub title: String,
    pub username: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty todo list.
    pub fn new(id: i64, title: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            username: username.into(),
            todos: Vec::new(),
        }
    }

    /// Replaces the todos of this list.
    pub fn with_todos(mut self, todos: Vec<Todo>) -> Self {
        self.todos = todos;
        self
    }

    /// True when the list has at least one todo and all of them are done.
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|todo| todo.done)
    }

    /// True when at least one todo is still open.
    pub fn has_undone(&self) -> bool {
        self.todos.iter().any(|todo| !todo.done)
    }

    /// Number of todos that are not done yet.
    pub fn remaining_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.done).count()
    }

    /// Total number of todos in the list.
    pub fn total_count(&self) -> usize {
        self.todos.len()
    }
}
