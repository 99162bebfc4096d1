mod error;
mod ordering;
mod types;
mod validation;

pub use error::TitleError;
pub use ordering::{
    attach_todos, is_list_fully_done, list_has_undone_todos, partition_todo_lists,
    sort_todo_lists_by_title, sort_todos, undone_first,
};
pub use types::{Todo, TodoList};
pub use validation::{validate_title, MAX_TITLE_LENGTH};
