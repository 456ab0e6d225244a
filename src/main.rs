//! Modelpick - Terminal model selector for workflow editors

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use modelpick::api::ApiClient;
use modelpick::config::Config;
use modelpick::model::WorkflowModel;
use std::time::Duration;

/// Terminal model selector for workflow editors
#[derive(Parser)]
#[command(name = "modelpick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the backend base URL from the config file
    #[arg(long)]
    base_url: Option<String>,

    /// Seed the selector with an already-selected model
    #[arg(long)]
    selected: Option<String>,

    /// Hide the clear affordance
    #[arg(long)]
    no_clear: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the available models without opening the selector
    List,
}

fn main() -> Result<()> {
    // Log to /tmp/modelpick.log - tail with: tail -f /tmp/modelpick.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender = tracing_appender::rolling::never("/tmp", "modelpick.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let mut config = Config::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let client = ApiClient::with_timeout(
        config.base_url.clone(),
        config.api_key(),
        Duration::from_secs(config.request_timeout_secs),
    );

    match cli.command {
        Some(Commands::List) => cmd_list(&client),
        None => {
            let initial = cli.selected.map(WorkflowModel::new);
            let selection = modelpick::tui::run(&config, client, initial, !cli.no_clear)?;

            // Emit the final selection as JSON for the calling editor.
            println!("{}", serde_json::to_string(&selection)?);
            Ok(())
        }
    }
}

fn cmd_list(client: &ApiClient) -> Result<()> {
    let response = client.get_models()?;
    if response.models.is_empty() {
        println!("No models available.");
        return Ok(());
    }
    for model in response.models {
        println!("{model}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["modelpick"]);
        assert!(cli.command.is_none());
        assert!(cli.selected.is_none());
        assert!(!cli.no_clear);
    }

    #[test]
    fn test_cli_list_command() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::parse_from(["modelpick", "list"]);
        match cli.command {
            Some(Commands::List) => Ok(()),
            None => Err("Expected List command".into()),
        }
    }

    #[test]
    fn test_cli_selected_flag() {
        let cli = Cli::parse_from(["modelpick", "--selected", "gpt-a", "--no-clear"]);
        assert_eq!(cli.selected.as_deref(), Some("gpt-a"));
        assert!(cli.no_clear);
    }
}
