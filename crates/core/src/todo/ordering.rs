use std::collections::HashMap;

use super::types::{Todo, TodoList};

/// Returns true if the list is non-empty and every todo in it is done.
pub fn is_list_fully_done(list: &TodoList) -> bool {
    list.is_done()
}

/// Returns true if at least one todo in the list is not done.
pub fn list_has_undone_todos(list: &TodoList) -> bool {
    list.has_undone()
}

/// Sorts todos: undone before done, then by title ignoring case.
/// The sort is stable, so equal titles keep their incoming order.
pub fn sort_todos(todos: &mut [Todo]) {
    todos.sort_by_cached_key(|todo| (todo.done, todo.title.to_lowercase()));
}

/// Sorts lists by title ignoring case. Stable, like [`sort_todos`].
pub fn sort_todo_lists_by_title(lists: &mut [TodoList]) {
    lists.sort_by_cached_key(|list| list.title.to_lowercase());
}

/// Groups todos under their parent lists by `todolist_id`.
///
/// Each list's todos keep the relative order they had in `todos`. Todos
/// whose parent is not in `lists` are dropped; a list without todos ends up
/// with an empty vector.
pub fn attach_todos(lists: Vec<TodoList>, todos: Vec<Todo>) -> Vec<TodoList> {
    let mut grouped: HashMap<i64, Vec<Todo>> = HashMap::new();

    for todo in todos {
        grouped.entry(todo.todolist_id).or_default().push(todo);
    }

    lists
        .into_iter()
        .map(|mut list| {
            list.todos = grouped.remove(&list.id).unwrap_or_default();
            list
        })
        .collect()
}

/// Splits lists into `(undone, done)` groups.
///
/// This is a stable partition, not a sort: each group keeps the incoming
/// relative order. Lists with no todos always land in the undone group.
pub fn partition_todo_lists(lists: Vec<TodoList>) -> (Vec<TodoList>, Vec<TodoList>) {
    lists.into_iter().partition(|list| !is_list_fully_done(list))
}

/// Partitions the lists and returns the undone group followed by the done group.
pub fn undone_first(lists: Vec<TodoList>) -> Vec<TodoList> {
    let (mut undone, done) = partition_todo_lists(lists);
    undone.extend(done);
    undone
}
