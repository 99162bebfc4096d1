//! CLI command definitions.

pub mod users;

use clap::{Parser, Subcommand, ValueEnum};

/// Multi-user todo lists backed by SQLite.
#[derive(Debug, Parser)]
#[command(name = "todos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// User every command acts on behalf of.
    #[arg(long, short, env = "TODOS_USER", global = true)]
    pub user: Option<String>,

    /// SQLite database path (overrides TODOS_DATABASE_PATH).
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show all todo lists, unfinished ones first.
    Lists,
    /// Show one todo list with its todos.
    Show {
        /// Todo list ID.
        list: i64,
    },
    /// Show a single todo.
    Todo {
        /// Todo list ID.
        list: i64,
        /// Todo ID.
        todo: i64,
    },
    /// Flip the done flag of a todo.
    Toggle {
        /// Todo list ID.
        list: i64,
        /// Todo ID.
        todo: i64,
    },
    /// Delete a todo.
    DeleteTodo {
        /// Todo list ID.
        list: i64,
        /// Todo ID.
        todo: i64,
    },
    /// Mark every todo in a list as done.
    CompleteAll {
        /// Todo list ID.
        list: i64,
    },
    /// Add a todo to a list.
    AddTodo {
        /// Todo list ID.
        list: i64,
        /// Todo title.
        title: String,
    },
    /// Create a todo list.
    NewList {
        /// List title, unique per user.
        title: String,
    },
    /// Rename a todo list.
    RenameList {
        /// Todo list ID.
        list: i64,
        /// New title.
        title: String,
    },
    /// Delete a todo list and all of its todos.
    DeleteList {
        /// Todo list ID.
        list: i64,
    },
    /// Check whether a list title is already taken.
    TitleExists {
        /// List title.
        title: String,
    },
    /// Check a username and password.
    Login {
        /// Username to check.
        username: String,
        /// Password to check.
        #[arg(long, env = "TODOS_PASSWORD")]
        password: String,
    },
    /// User management.
    User(users::UserCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_todo_with_user() {
        let cli = Cli::parse_from(["todos", "--user", "alice", "add-todo", "3", "Buy milk"]);

        assert_eq!(cli.user.as_deref(), Some("alice"));
        assert_eq!(cli.format, OutputFormat::Pretty);
        match cli.command {
            Commands::AddTodo { list, title } => {
                assert_eq!(list, 3);
                assert_eq!(title, "Buy milk");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["todos", "lists", "--format", "json", "-u", "bob"]);

        assert_eq!(cli.user.as_deref(), Some("bob"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Lists));
    }

    #[test]
    fn test_parse_user_add() {
        let cli = Cli::parse_from(["todos", "user", "add", "carol", "--password", "secret"]);

        match cli.command {
            Commands::User(users::UserCommand {
                action: users::UserAction::Add { username, password },
            }) => {
                assert_eq!(username, "carol");
                assert_eq!(password, "secret");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_numeric_list_id() {
        assert!(Cli::try_parse_from(["todos", "show", "groceries"]).is_err());
    }
}
