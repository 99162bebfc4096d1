use todos_core::storage::{
    row_to_todo, row_to_todo_list, rows_to, Result, TODO_COLUMNS, TODO_LIST_COLUMNS,
};
use todos_core::todo::{
    attach_todos, sort_todo_lists_by_title, sort_todos, undone_first, TodoList,
};

use super::{TodoStore, TODOS_TABLE, TODO_LISTS_TABLE, TODO_LIST_ORDER, TODO_ORDER};

impl TodoStore {
    /// Lists every todo list of this user with its todos attached.
    ///
    /// Lists and todos are fetched concurrently and joined in memory. The
    /// result holds all lists that are not fully done, alphabetically,
    /// followed by the fully done ones, alphabetically. Fails if either
    /// query fails.
    pub async fn list_all_todo_lists(&self) -> Result<Vec<TodoList>> {
        let lists_statement = self
            .scope
            .select(TODO_LISTS_TABLE, TODO_LIST_COLUMNS)
            .order_by(TODO_LIST_ORDER)
            .build();
        let todos_statement = self
            .scope
            .select(TODOS_TABLE, TODO_COLUMNS)
            .order_by(TODO_ORDER)
            .build();

        let (lists_result, todos_result) = tokio::try_join!(
            self.executor.execute(lists_statement),
            self.executor.execute(todos_statement),
        )?;

        let mut lists = rows_to(&lists_result.rows, row_to_todo_list)?;
        let mut todos = rows_to(&todos_result.rows, row_to_todo)?;
        sort_todo_lists_by_title(&mut lists);
        sort_todos(&mut todos);

        Ok(undone_first(attach_todos(lists, todos)))
    }

    /// Loads one list with its todos, or `None` if it is missing or foreign.
    pub async fn load_todo_list(&self, todolist_id: i64) -> Result<Option<TodoList>> {
        let list_statement = self
            .scope
            .select(TODO_LISTS_TABLE, TODO_LIST_COLUMNS)
            .filter("id", todolist_id)
            .build();
        let todos_statement = self.find_todos_statement(todolist_id);

        let (list_result, todos_result) = tokio::try_join!(
            self.executor.execute(list_statement),
            self.executor.execute(todos_statement),
        )?;

        let Some(row) = list_result.first() else {
            return Ok(None);
        };

        let mut todos = rows_to(&todos_result.rows, row_to_todo)?;
        sort_todos(&mut todos);
        Ok(Some(row_to_todo_list(row)?.with_todos(todos)))
    }

    /// Deletes a list. Its todos go with it through the storage cascade.
    pub async fn delete_todo_list(&self, todolist_id: i64) -> Result<bool> {
        let statement = self
            .scope
            .delete(TODO_LISTS_TABLE)
            .filter("id", todolist_id)
            .build();

        let deleted = self.executor.execute(statement).await?.affected_any();
        tracing::debug!(
            username = %self.username(),
            todolist_id,
            deleted,
            "Delete todo list"
        );
        Ok(deleted)
    }

    /// Renames a list. Returns false if no owned list matched.
    ///
    /// Renaming onto a title the user already has surfaces the storage
    /// uniqueness error.
    pub async fn rename_todo_list(&self, todolist_id: i64, title: &str) -> Result<bool> {
        let statement = self
            .scope
            .update(TODO_LISTS_TABLE)
            .set("title", title)
            .filter("id", todolist_id)
            .build();

        let renamed = self.executor.execute(statement).await?.affected_any();
        tracing::debug!(
            username = %self.username(),
            todolist_id,
            renamed,
            "Rename todo list"
        );
        Ok(renamed)
    }

    /// Checks whether this user already has a list with `title`.
    ///
    /// Only a hint: another request may create the title right after.
    pub async fn todo_list_title_exists(&self, title: &str) -> Result<bool> {
        let statement = self
            .scope
            .select(TODO_LISTS_TABLE, "null")
            .filter("title", title)
            .build();

        Ok(self.executor.execute(statement).await?.affected_any())
    }

    /// Creates a list.
    ///
    /// Returns false when the user already has a list with this title; any
    /// other storage error is returned as is.
    pub async fn create_todo_list(&self, title: &str) -> Result<bool> {
        let statement = self
            .scope
            .insert(TODO_LISTS_TABLE)
            .value("title", title)
            .build();

        match self.executor.execute(statement).await {
            Ok(result) => {
                let created = result.affected_any();
                tracing::debug!(
                    username = %self.username(),
                    title,
                    created,
                    "Create todo list"
                );
                Ok(created)
            }
            Err(err) if err.is_unique_violation() => {
                tracing::warn!(
                    username = %self.username(),
                    title,
                    "Todo list title already taken"
                );
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}
