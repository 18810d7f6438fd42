//! Backends and helpers for the CLI tests.

#![allow(dead_code)]

use std::sync::Arc;

use clap::Parser;
use lambars::effect::AsyncIO;
use listy_api::routes::{cors_layer, create_router};
use listy_api::state::AppState;
use listy_cli::backend::{LocalBackend, TodoBackend};
use listy_cli::client::ApiClient;
use listy_cli::commands::{Command, CommandError, execute};
use listy_cli::config::ClientConfig;
use listy_domain::AiTask;
use listy_infrastructure::adapters::InMemoryTodoStore;
use listy_workflow::{TaskBreakdown, WorkflowError, WorkflowResult};
use tokio::net::TcpListener;

// =============================================================================
// ScriptedBreakdown
// =============================================================================

pub struct ScriptedBreakdown {
    reply: WorkflowResult<Vec<AiTask>>,
}

impl ScriptedBreakdown {
    pub fn returning(texts: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(texts.iter().copied().map(AiTask::new).collect()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(WorkflowError::upstream(message)),
        })
    }
}

impl TaskBreakdown for ScriptedBreakdown {
    fn breakdown(&self, _goal: String) -> AsyncIO<WorkflowResult<Vec<AiTask>>> {
        AsyncIO::pure(self.reply.clone())
    }
}

// =============================================================================
// Backends
// =============================================================================

pub fn local(breakdown: Arc<ScriptedBreakdown>) -> LocalBackend {
    LocalBackend::new(Arc::new(InMemoryTodoStore::new()), breakdown)
}

/// Serves the real router on an ephemeral port and returns a client for it.
pub async fn remote(breakdown: Arc<ScriptedBreakdown>) -> ApiClient {
    let state = AppState::new(Arc::new(InMemoryTodoStore::new()), breakdown);
    let router = create_router(state, cors_layer(None));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiClient::new(&ClientConfig::new(&format!("http://{address}"))).unwrap()
}

// =============================================================================
// Running Commands
// =============================================================================

#[derive(Parser)]
#[command(name = "listy", no_binary_name = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

pub fn command(arguments: &[&str]) -> Command {
    Line::try_parse_from(arguments).unwrap().command
}

/// Runs one command and returns what it printed.
pub async fn run<B>(backend: &B, arguments: &[&str]) -> Result<String, CommandError>
where
    B: TodoBackend + ?Sized,
{
    let mut out = Vec::new();
    execute(backend, command(arguments), &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}
