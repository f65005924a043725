use crate::config::{OutputFormat, Settings, SettingsLoader};
use crate::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// cpu-compare: browse a CPU benchmark ranking and compare two CPUs
#[derive(Parser, Debug)]
#[command(name = "cpu-compare")]
#[command(version)]
#[command(about = "Browse a CPU benchmark ranking and compare two CPUs by score")]
#[command(
    long_about = "cpu-compare reads a ranking file of alternating CPU name and score lines, \
                  lists it as a table, searches names, and compares two CPUs by benchmark score."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog data file (overrides `data_file` from the settings file)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Settings file path (default: ./cpu-compare.yaml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Set log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the whole catalog as a table, in file order
    List {
        /// Output format (text, json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the score of one CPU
    Show {
        /// Exact CPU name
        name: String,

        /// Output format (text, json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List CPU names containing the query (case-insensitive)
    Search {
        /// Text to look for; an empty query matches nothing
        query: String,

        /// Output format (text, json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Compare the scores of two CPUs
    Compare {
        /// Exact name of the first CPU
        first: String,

        /// Exact name of the second CPU
        second: String,

        /// Output format (text, json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Interactive terminal browser
    #[cfg(feature = "tui")]
    Browse,
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::List { .. } => "list",
            Commands::Show { .. } => "show",
            Commands::Search { .. } => "search",
            Commands::Compare { .. } => "compare",
            #[cfg(feature = "tui")]
            Commands::Browse => "browse",
        }
    }

    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        match self {
            #[cfg(feature = "tui")]
            Commands::Browse => true,
            _ => false,
        }
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// Settings file contents with command-line overrides applied
    pub fn resolve_settings(&self) -> Result<Settings> {
        let loader = SettingsLoader::new()?.with_explicit_path(self.config.clone());
        Ok(self.apply_overrides(loader.load()?))
    }

    fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(data) = &self.data {
            settings.data_file = data.clone();
        }
        settings
    }
}
