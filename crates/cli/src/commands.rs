//! The command set shared by `listy` and `listy-local`, and its dispatcher.

use std::io::Write;

use clap::Subcommand;
use listy_domain::{ListIdentifier, NewTodo, TodoIdentifier, TodoPatch};
use thiserror::Error;

use crate::backend::{BackendError, Listing, TodoBackend};
use crate::render;

// =============================================================================
// Command
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a new todo item
    Add {
        /// Item text; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        item: Vec<String>,

        /// List to put the item on (default: main)
        #[arg(long, short)]
        list: Option<String>,
    },

    /// List all todos, or only those on one list
    List {
        /// Show only this list (`main` for todos without a list)
        #[arg(long, short)]
        list: Option<String>,
    },

    /// List only pending todos
    Pending,

    /// List only completed todos
    Completed,

    /// Mark a todo as complete
    Complete { id: String },

    /// Mark a todo as incomplete
    Incomplete { id: String },

    /// Toggle todo status
    Toggle { id: String },

    /// Update todo item text
    Update {
        id: String,

        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Remove a todo
    Remove { id: String },

    /// Show the names of all lists
    Lists,

    /// Ask the AI service to break a goal into subtasks
    Breakdown {
        #[arg(required = true, num_args = 1..)]
        goal: Vec<String>,

        /// Add every suggestion as a todo
        #[arg(long)]
        create: bool,

        /// List for created suggestions (with --create)
        #[arg(long, short, requires = "create")]
        list: Option<String>,
    },
}

// =============================================================================
// CommandError
// =============================================================================

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid ID. Please provide a number")]
    InvalidId,

    #[error("Please provide a non-empty {0}")]
    EmptyText(&'static str),

    #[error("Failed to create any tasks: {}", .details.join("; "))]
    NothingCreated { details: Vec<String> },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

fn parse_id(raw: &str) -> Result<TodoIdentifier, CommandError> {
    raw.parse().map_err(|_| CommandError::InvalidId)
}

fn joined(words: &[String], what: &'static str) -> Result<String, CommandError> {
    let text = words.join(" ");
    if text.trim().is_empty() {
        return Err(CommandError::EmptyText(what));
    }
    Ok(text)
}

fn list_selector(raw: Option<&str>) -> Option<ListIdentifier> {
    raw.and_then(ListIdentifier::from_selector)
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Runs one command and writes its human-readable result to `out`.
///
/// # Errors
///
/// Returns [`CommandError`] for an unparsable id, blank text, a backend
/// failure or a failed write.
pub async fn execute<B, W>(backend: &B, command: Command, out: &mut W) -> Result<(), CommandError>
where
    B: TodoBackend + ?Sized,
    W: Write,
{
    match command {
        Command::Add { item, list } => {
            let item = joined(&item, "item")?;
            let request = NewTodo::new(item.clone()).on_list(list_selector(list.as_deref()));
            let todo = backend.add(request).await?;
            writeln!(out, "Added {item} (Id: {})", todo.id)?;
        }
        Command::List { list } => {
            let listing = match list {
                Some(selector) => Listing::OnList(list_selector(Some(&selector))),
                None => Listing::All,
            };
            print_todos(backend, listing, "No Todos found", out).await?;
        }
        Command::Pending => {
            print_todos(backend, Listing::Pending, "No pending todos found", out).await?;
        }
        Command::Completed => {
            print_todos(backend, Listing::Completed, "No completed todos found", out).await?;
        }
        Command::Complete { id } => {
            let todo = backend.update(parse_id(&id)?, TodoPatch::done(true)).await?;
            writeln!(out, "Todo {} marked as complete", todo.id)?;
        }
        Command::Incomplete { id } => {
            let todo = backend.update(parse_id(&id)?, TodoPatch::done(false)).await?;
            writeln!(out, "Todo {} marked as incomplete", todo.id)?;
        }
        Command::Toggle { id } => {
            let todo = backend.toggle(parse_id(&id)?).await?;
            writeln!(out, "Todo {} status toggled", todo.id)?;
        }
        Command::Update { id, text } => {
            let id = parse_id(&id)?;
            let text = joined(&text, "text")?;
            let todo = backend.update(id, TodoPatch::item(text)).await?;
            writeln!(out, "Todo {} updated successfully", todo.id)?;
        }
        Command::Remove { id } => {
            let id = parse_id(&id)?;
            backend.remove(id).await?;
            writeln!(out, "Todo {id} removed successfully")?;
        }
        Command::Lists => {
            let lists = backend.lists().await?;
            if lists.is_empty() {
                writeln!(out, "No lists found")?;
            }
            for list_id in lists {
                writeln!(out, "{list_id}")?;
            }
        }
        Command::Breakdown { goal, create, list } => {
            let goal = joined(&goal, "goal")?;
            let tasks = backend.breakdown(goal.clone()).await?;
            if tasks.is_empty() {
                writeln!(out, "'{goal}' is already a single task")?;
                return Ok(());
            }

            writeln!(out, "Suggested tasks for '{goal}':")?;
            for (index, task) in tasks.iter().enumerate() {
                writeln!(out, "{}", render::task_line(index + 1, task))?;
            }

            if create {
                let outcome = backend
                    .create_tasks(tasks, list_selector(list.as_deref()))
                    .await?;
                if outcome.is_total_failure() {
                    return Err(CommandError::NothingCreated {
                        details: outcome.failures,
                    });
                }
                writeln!(out, "Created {} task(s)", outcome.created.len())?;
                for warning in outcome.failures {
                    writeln!(out, "Warning: {warning}")?;
                }
            }
        }
    }
    Ok(())
}

async fn print_todos<B, W>(
    backend: &B,
    listing: Listing,
    empty_message: &str,
    out: &mut W,
) -> Result<(), CommandError>
where
    B: TodoBackend + ?Sized,
    W: Write,
{
    let todos = backend.list(listing).await?;
    if todos.is_empty() {
        writeln!(out, "{empty_message}")?;
    }
    for todo in &todos {
        writeln!(out, "{}", render::todo_line(todo))?;
    }
    Ok(())
}

// =============================================================================
// Line Splitting
// =============================================================================

/// Splits an interactive input line into arguments.
///
/// Whitespace separates arguments; single or double quotes group words.
#[must_use]
pub fn split_line(line: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_argument = false;

    for character in line.chars() {
        match (quote, character) {
            (Some(open), c) if c == open => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(character);
                in_argument = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_argument {
                    arguments.push(std::mem::take(&mut current));
                    in_argument = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_argument = true;
            }
        }
    }
    if in_argument {
        arguments.push(current);
    }
    arguments
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rstest::rstest;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(arguments: &[&str]) -> Result<Command, clap::Error> {
        Harness::try_parse_from(std::iter::once("listy").chain(arguments.iter().copied()))
            .map(|harness| harness.command)
    }

    mod parsing {
        use super::*;

        #[rstest]
        fn add_joins_words_and_reads_list() {
            let command = parse(&["add", "Buy", "oat", "milk", "--list", "errands"]).unwrap();

            assert_eq!(
                command,
                Command::Add {
                    item: vec!["Buy".into(), "oat".into(), "milk".into()],
                    list: Some("errands".into()),
                }
            );
        }

        #[rstest]
        fn update_takes_id_and_text() {
            let command = parse(&["update", "2", "Walk the dog"]).unwrap();

            assert_eq!(
                command,
                Command::Update {
                    id: "2".into(),
                    text: vec!["Walk the dog".into()],
                }
            );
        }

        #[rstest]
        #[case(&["add"])]
        #[case(&["complete"])]
        #[case(&["update", "2"])]
        #[case(&["breakdown", "Plan", "--list", "party"])]
        #[case(&["frobnicate"])]
        fn rejects_incomplete_commands(#[case] arguments: &[&str]) {
            assert!(parse(arguments).is_err());
        }
    }

    mod split {
        use super::*;

        #[rstest]
        #[case("list", vec!["list"])]
        #[case("  add   Buy milk ", vec!["add", "Buy", "milk"])]
        #[case(r#"update 2 "Walk the dog""#, vec!["update", "2", "Walk the dog"])]
        #[case("add 'it''s' done", vec!["add", "its", "done"])]
        #[case(r#"add """#, vec!["add", ""])]
        #[case("", vec![])]
        fn splits(#[case] line: &str, #[case] expected: Vec<&str>) {
            assert_eq!(split_line(line), expected);
        }
    }

    #[rstest]
    #[case("7", Some(7))]
    #[case("abc", None)]
    #[case("-1", None)]
    #[case("0", None)]
    fn ids(#[case] raw: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_id(raw).ok().map(|id| id.value()), expected);
    }
}
