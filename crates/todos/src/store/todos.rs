use todos_core::storage::{rows_to, row_to_todo, Result, Statement, TODO_COLUMNS};
use todos_core::todo::{sort_todos, Todo};

use super::{TodoStore, TODOS_TABLE, TODO_LISTS_TABLE, TODO_ORDER};

impl TodoStore {
    pub(super) fn find_todos_statement(&self, todolist_id: i64) -> Statement {
        self.scope
            .select(TODOS_TABLE, TODO_COLUMNS)
            .filter("todolist_id", todolist_id)
            .order_by(TODO_ORDER)
            .build()
    }

    /// Lists the todos of one list, undone first and alphabetical within
    /// each group.
    ///
    /// Returns an empty vector when the list has no todos or is not owned
    /// by this user.
    pub async fn list_todos(&self, todolist_id: i64) -> Result<Vec<Todo>> {
        let result = self
            .executor
            .execute(self.find_todos_statement(todolist_id))
            .await?;

        let mut todos = rows_to(&result.rows, row_to_todo)?;
        sort_todos(&mut todos);
        Ok(todos)
    }

    /// Loads a single todo.
    pub async fn load_todo(&self, todolist_id: i64, todo_id: i64) -> Result<Option<Todo>> {
        let statement = self
            .scope
            .select(TODOS_TABLE, TODO_COLUMNS)
            .filter("todolist_id", todolist_id)
            .filter("id", todo_id)
            .build();

        let result = self.executor.execute(statement).await?;
        result.first().map(row_to_todo).transpose()
    }

    /// Flips the done flag. Returns false if no owned todo matched.
    pub async fn toggle_todo_done(&self, todolist_id: i64, todo_id: i64) -> Result<bool> {
        let statement = self
            .scope
            .update(TODOS_TABLE)
            .set_expr("done = NOT done")
            .filter("todolist_id", todolist_id)
            .filter("id", todo_id)
            .build();

        let toggled = self.executor.execute(statement).await?.affected_any();
        tracing::debug!(
            username = %self.username(),
            todolist_id,
            todo_id,
            toggled,
            "Toggle todo"
        );
        Ok(toggled)
    }

    /// Deletes a todo. Returns false if no owned todo matched.
    pub async fn delete_todo(&self, todolist_id: i64, todo_id: i64) -> Result<bool> {
        let statement = self
            .scope
            .delete(TODOS_TABLE)
            .filter("todolist_id", todolist_id)
            .filter("id", todo_id)
            .build();

        let deleted = self.executor.execute(statement).await?.affected_any();
        tracing::debug!(
            username = %self.username(),
            todolist_id,
            todo_id,
            deleted,
            "Delete todo"
        );
        Ok(deleted)
    }

    /// Marks every todo in the list as done.
    ///
    /// Returns false when the list has no todos or is not owned by this user.
    pub async fn mark_all_done(&self, todolist_id: i64) -> Result<bool> {
        let statement = self
            .scope
            .update(TODOS_TABLE)
            .set("done", true)
            .filter("todolist_id", todolist_id)
            .build();

        let updated = self.executor.execute(statement).await?.affected_any();
        tracing::debug!(
            username = %self.username(),
            todolist_id,
            updated,
            "Mark all todos done"
        );
        Ok(updated)
    }

    /// Adds an undone todo to a list.
    ///
    /// The insert only matches when the list is owned by this user, so a
    /// foreign or missing list yields `false` instead of an error.
    pub async fn create_todo(&self, todolist_id: i64, title: &str) -> Result<bool> {
        let statement = self
            .scope
            .insert(TODOS_TABLE)
            .value("title", title)
            .under_parent(TODO_LISTS_TABLE, "todolist_id", todolist_id)
            .build();

        let created = self.executor.execute(statement).await?.affected_any();
        tracing::debug!(
            username = %self.username(),
            todolist_id,
            created,
            "Create todo"
        );
        Ok(created)
    }
}
