//! Pretty output formatting.

use todos_core::todo::{Todo, TodoList};

/// Format a todo as a checklist line.
pub fn format_todo(todo: &Todo) -> String {
    let mark = if todo.done { "x" } else { " " };
    format!("[{mark}] {} (#{})", todo.title, todo.id)
}

/// Format a list header with its progress.
pub fn format_todo_list_summary(list: &TodoList) -> String {
    format!(
        "{} (#{})  {}/{} remaining",
        list.title,
        list.id,
        list.remaining_count(),
        list.total_count()
    )
}

/// Format a list followed by its todos.
pub fn format_todo_list(list: &TodoList) -> String {
    let mut output = format_todo_list_summary(list);
    output.push('\n');
    output.push_str(&"-".repeat(40));
    if list.todos.is_empty() {
        output.push_str("\nNo todos yet.");
    }
    for todo in &list.todos {
        output.push_str(&format!("\n  {}", format_todo(todo)));
    }
    output
}

/// Format all lists for display.
pub fn format_todo_lists(lists: &[TodoList]) -> String {
    if lists.is_empty() {
        return "No todo lists found.".to_string();
    }
    let mut output = format!("TODO LISTS ({})\n", lists.len());
    output.push_str(&"-".repeat(40));
    for list in lists {
        let mark = if list.is_done() { "x" } else { " " };
        output.push_str(&format!("\n[{mark}] {}", format_todo_list_summary(list)));
    }
    output
}
