use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use listy_cli::backend::LocalBackend;
use listy_cli::commands::{Command, execute, split_line};
use listy_infrastructure::config::load_dotenv;
use listy_infrastructure::{OpenAiConfig, StorageMode, StoreConfig, StoreFactory};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "listy-local", version)]
#[command(about = "Manage todos without a server, on any store")]
struct Cli {
    /// Store backend: memory, file or supabase (default: STORE_MODE)
    #[arg(long)]
    store: Option<StorageMode>,

    /// JSON file for the file store (default: TODO_FILE or todos.json)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Command to run; without one an interactive prompt starts
    #[command(subcommand)]
    command: Option<Command>,
}

/// One line typed at the interactive prompt.
#[derive(Parser)]
#[command(name = "listy", no_binary_name = true, disable_version_flag = true)]
struct PromptLine {
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();
    listy_cli::init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let backend = build_backend(cli.store, cli.file)?;

    let Some(command) = cli.command else {
        interactive(&backend).await?;
        return Ok(ExitCode::SUCCESS);
    };

    let mut stdout = std::io::stdout().lock();
    match execute(&backend, command, &mut stdout).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            eprintln!("Error: {error}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn build_backend(store: Option<StorageMode>, file: Option<PathBuf>) -> anyhow::Result<LocalBackend> {
    let config = StoreConfig::from_env_with(store, file).context("invalid store configuration")?;

    let store = StoreFactory::new(config).create()?;
    let breakdown = StoreFactory::create_breakdown(OpenAiConfig::from_env())?;
    Ok(LocalBackend::new(store, breakdown))
}

async fn interactive(backend: &LocalBackend) -> anyhow::Result<()> {
    let backend_name = backend.service().store().backend_name();
    println!("Listy ({backend_name} store). Type 'help' for commands, 'exit' to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("listy> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            return Ok(());
        };
        let arguments = split_line(&line);
        match arguments.first().map(String::as_str) {
            None => continue,
            Some("exit" | "quit") => return Ok(()),
            Some(_) => {}
        }

        match PromptLine::try_parse_from(arguments) {
            Ok(prompt) => {
                let mut stdout = std::io::stdout().lock();
                if let Err(error) = execute(backend, prompt.command, &mut stdout).await {
                    println!("Error: {error}");
                }
            }
            Err(error) => {
                let _ = error.print();
            }
        }
    }
}
