//! todos CLI entry point.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todos::cli::users::UserAction;
use todos::cli::{Cli, Commands, OutputFormat};
use todos::output::{format_output, pretty};
use todos::{Argon2Verifier, Config, SqliteExecutor, TodoStore};
use todos_core::todo::validate_title;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_database_path(cli.database.clone());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let executor = Arc::new(SqliteExecutor::open(&config.database_path).await?);
    let verifier = Arc::new(Argon2Verifier::new());

    // Commands that do not act on behalf of a session user.
    match &cli.command {
        Commands::User(user_cmd) => {
            let UserAction::Add { username, password } = &user_cmd.action;
            let hash = verifier.hash_password(password)?;
            executor
                .insert_user(username, &hash)
                .await
                .with_context(|| format!("could not create user {username}"))?;
            println!("Created user {username}");
            return Ok(());
        }
        Commands::Login { username, password } => {
            let store = TodoStore::new(executor, verifier, username.as_str());
            if !store.verify_credentials(username, password).await? {
                bail!("invalid username or password");
            }
            println!("Credentials valid for {username}");
            return Ok(());
        }
        _ => {}
    }

    let user = cli
        .user
        .context("no user given; pass --user or set TODOS_USER")?;
    let store = TodoStore::new(executor, verifier, user);
    let format = cli.format;

    match cli.command {
        Commands::Lists => {
            let lists = store.list_all_todo_lists().await?;
            match format {
                OutputFormat::Json => println!("{}", format_output(&lists, format)),
                OutputFormat::Pretty => println!("{}", pretty::format_todo_lists(&lists)),
            }
        }
        Commands::Show { list } => {
            let Some(todo_list) = store.load_todo_list(list).await? else {
                bail!("todo list {list} not found");
            };
            match format {
                OutputFormat::Json => println!("{}", format_output(&todo_list, format)),
                OutputFormat::Pretty => println!("{}", pretty::format_todo_list(&todo_list)),
            }
        }
        Commands::Todo { list, todo } => {
            let Some(found) = store.load_todo(list, todo).await? else {
                bail!("todo {todo} not found in list {list}");
            };
            match format {
                OutputFormat::Json => println!("{}", format_output(&found, format)),
                OutputFormat::Pretty => println!("{}", pretty::format_todo(&found)),
            }
        }
        Commands::Toggle { list, todo } => {
            let toggled = store.toggle_todo_done(list, todo).await?;
            report(toggled, format, &format!("Toggled todo {todo}"))?;
        }
        Commands::DeleteTodo { list, todo } => {
            let deleted = store.delete_todo(list, todo).await?;
            report(deleted, format, &format!("Deleted todo {todo}"))?;
        }
        Commands::CompleteAll { list } => {
            let completed = store.mark_all_done(list).await?;
            let message = format!("Completed all todos in list {list}");
            report(completed, format, &message)?;
        }
        Commands::AddTodo { list, title } => {
            let title = validate_title(&title)?;
            let created = store.create_todo(list, &title).await?;
            report(created, format, &format!("Added todo \"{title}\""))?;
        }
        Commands::NewList { title } => {
            let title = validate_title(&title)?;
            if !store.create_todo_list(&title).await? {
                bail!("a todo list titled \"{title}\" already exists");
            }
            print_status(format, &format!("Created todo list \"{title}\""));
        }
        Commands::RenameList { list, title } => {
            let title = validate_title(&title)?;
            let renamed = store.rename_todo_list(list, &title).await?;
            report(renamed, format, &format!("Renamed todo list {list}"))?;
        }
        Commands::DeleteList { list } => {
            let deleted = store.delete_todo_list(list).await?;
            report(deleted, format, &format!("Deleted todo list {list}"))?;
        }
        Commands::TitleExists { title } => {
            let exists = store.todo_list_title_exists(&title).await?;
            match format {
                OutputFormat::Json => {
                    println!("{}", format_output(&Status { ok: exists }, format))
                }
                OutputFormat::Pretty => println!("{exists}"),
            }
        }
        Commands::User(_) | Commands::Login { .. } => {}
    }

    Ok(())
}

#[derive(Serialize)]
struct Status {
    ok: bool,
}

fn print_status(format: OutputFormat, message: &str) {
    match format {
        OutputFormat::Json => println!("{}", format_output(&Status { ok: true }, format)),
        OutputFormat::Pretty => println!("{message}"),
    }
}

/// Prints the outcome of a mutation, failing when nothing owned matched.
fn report(changed: bool, format: OutputFormat, message: &str) -> Result<()> {
    if !changed {
        bail!("nothing matched; the item does not exist or is not yours");
    }
    print_status(format, message);
    Ok(())
}
