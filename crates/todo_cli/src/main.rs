//! Command-line front end for the todo store.
//!
//! # Responsibility
//! - Parse arguments and open the store once per invocation.
//! - Print results as plain ids/counts or JSON for reads.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::process;
use todo_core::{default_log_level, init_logging, TodoId, TodoStore};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Manage todos stored in a local SQLite file")]
#[command(version)]
struct Cli {
    /// Database file, created on first use
    #[arg(long, env = "TODO_DB_PATH", default_value = "todos.db")]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "TODO_LOG_DIR")]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "TODO_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a todo and print its id
    Add {
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Print all todos as a JSON array
    List,
    /// Print one todo as JSON
    Get { id: TodoId },
    /// Replace title, description and completion flag; prints affected count
    Update {
        id: TodoId,
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        completed: bool,
    },
    /// Delete a todo; prints affected count
    Delete { id: TodoId },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::List => "list",
            Self::Get { .. } => "get",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let store = TodoStore::open(&cli.db)
        .with_context(|| format!("failed to open todo database `{}`", cli.db.display()))?;

    let command = cli.command.name();
    match cli.command {
        Command::Add { title, description } => {
            let id = store.add(Some(title.as_str()), description.as_deref())?;
            println!("{id}");
        }
        Command::List => {
            let todos = store.get_all_todos()?;
            println!("{}", serde_json::to_string_pretty(&todos)?);
        }
        Command::Get { id } => {
            let todo = store
                .get(id)?
                .ok_or_else(|| anyhow!("todo {id} not found"))?;
            println!("{}", serde_json::to_string_pretty(&todo)?);
        }
        Command::Update {
            id,
            title,
            description,
            completed,
        } => {
            let affected = store.update(
                id,
                Some(title.as_str()),
                description.as_deref(),
                completed,
            )?;
            println!("{affected}");
        }
        Command::Delete { id } => {
            println!("{}", store.delete(id)?);
        }
    }

    info!("event=cli_command module=cli status=ok command={command}");
    store.close()?;
    Ok(())
}
