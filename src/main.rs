use anyhow::{Context, Result};
use clap::Parser;
use cpu_compare::{
    cli::commands::{
        compare::CompareCommand, list::ListCommand, search::SearchCommand, show::ShowCommand,
        CommandHandler,
    },
    cli::{Cli, Commands, LogLevel},
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Initialize tracing from the --log-level flag.
///
/// Logs go to stderr so they never mix with command output. The terminal
/// browser owns the screen, so its logs are discarded.
fn initialize_tracing(log_level: &LogLevel, interactive: bool) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    if interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = cli.resolve_settings().with_context(|| match &cli.config {
        Some(path) => format!("Failed to load settings from {}", path.display()),
        None => "Failed to load settings".to_string(),
    })?;
    tracing::debug!(
        command = cli.command.name(),
        data_file = %settings.data_file.display(),
        "Resolved settings"
    );

    let command: Box<dyn CommandHandler> = match cli.command {
        Commands::List { format } => Box::new(ListCommand::new(settings, format)),
        Commands::Show { name, format } => Box::new(ShowCommand::new(settings, name, format)),
        Commands::Search { query, format } => Box::new(SearchCommand::new(settings, query, format)),
        Commands::Compare {
            first,
            second,
            format,
        } => Box::new(CompareCommand::new(settings, first, second, format)),
        #[cfg(feature = "tui")]
        Commands::Browse => Box::new(cpu_compare::cli::commands::browse::BrowseCommand::new(
            settings,
        )),
    };

    tracing::debug!(command = command.name(), "Executing command");
    Ok(command.execute()?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level, cli.command.is_interactive());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
