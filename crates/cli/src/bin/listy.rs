use std::io::Write;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use listy_cli::client::ApiClient;
use listy_cli::commands::{Command, execute};
use listy_cli::config::{ClientConfig, DEFAULT_API_URL};
use listy_infrastructure::config::load_dotenv;

#[derive(Parser)]
#[command(name = "listy", version)]
#[command(about = "Command-line client for the Listy todo API")]
struct Cli {
    /// API server URL
    #[arg(long, env = "LISTY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();
    listy_cli::init_tracing();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        return print_help();
    };

    let client = match ApiClient::new(&ClientConfig::new(&cli.api_url)) {
        Ok(client) => client,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = client.check_health().await {
        eprintln!("Error: {error}");
        eprintln!("\nMake sure the API server is running:");
        eprintln!("  cargo run --bin listy-server");
        eprintln!("\nOr set LISTY_API_URL to point to your API server.");
        return ExitCode::FAILURE;
    }

    let mut stdout = std::io::stdout().lock();
    match execute(&client, command, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(error = ?error, "command failed");
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() -> ExitCode {
    let mut stdout = std::io::stdout();
    match Cli::command()
        .print_help()
        .and_then(|()| writeln!(stdout))
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
