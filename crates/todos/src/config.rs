use std::env;

/// Default SQLite database file.
pub const DEFAULT_DATABASE_PATH: &str = "todos.db";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "todos=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to SQLite database file (default: "todos.db")
    pub database_path: String,
    /// Tracing filter used when `RUST_LOG` is not set (default: "todos=info")
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TODOS_DATABASE_PATH` - SQLite database path (default: "todos.db")
    /// - `TODOS_LOG` - Tracing filter (default: "todos=info")
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("TODOS_DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
            log_filter: env::var("TODOS_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Overrides the database path when one was given on the command line.
    pub fn with_database_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.database_path = path;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations never race with each other.
    #[test]
    fn test_from_env() {
        env::remove_var("TODOS_DATABASE_PATH");
        env::remove_var("TODOS_LOG");

        let config = Config::from_env();
        assert_eq!(config.database_path, "todos.db");
        assert_eq!(config.log_filter, "todos=info");

        env::set_var("TODOS_DATABASE_PATH", "/tmp/other.db");
        env::set_var("TODOS_LOG", "todos=debug");

        let config = Config::from_env();
        assert_eq!(config.database_path, "/tmp/other.db");
        assert_eq!(config.log_filter, "todos=debug");

        env::remove_var("TODOS_DATABASE_PATH");
        env::remove_var("TODOS_LOG");
    }

    #[test]
    fn test_with_database_path() {
        let config = Config {
            database_path: "todos.db".to_string(),
            log_filter: "todos=info".to_string(),
        };

        let unchanged = config.clone().with_database_path(None);
        assert_eq!(unchanged, config);

        let overridden = config.with_database_path(Some("cli.db".to_string()));
        assert_eq!(overridden.database_path, "cli.db");
    }
}
