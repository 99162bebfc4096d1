//! User CLI commands.

use clap::{Parser, Subcommand};

/// User management commands.
#[derive(Debug, Parser)]
pub struct UserCommand {
    #[command(subcommand)]
    pub action: UserAction,
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UserAction {
    /// Register a new user.
    Add {
        /// Username, unique.
        username: String,
        /// Plain password; only its hash is stored.
        #[arg(long, env = "TODOS_PASSWORD")]
        password: String,
    },
}
