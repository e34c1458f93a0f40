//! CLI argument parsing

mod host;

pub use host::{
    CancelGuestsArgs, CreateArgs, CreateOptionsArgs, DetailArgs, GuestsArgs, HostCommand, ListArgs,
};

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::defaults;

/// Classic infrastructure dedicated host CLI
#[derive(Parser, Debug)]
#[command(name = "slctl")]
#[command(version)]
#[command(about = "Manage classic infrastructure dedicated hosts", long_about = None)]
pub struct Cli {
    /// API username (overrides env vars and credentials file)
    #[arg(short = 'u', long, global = true)]
    pub username: Option<String>,

    /// API key (overrides env vars and credentials file)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// API host
    #[arg(long, global = true, default_value = defaults::API_HOST)]
    pub api_host: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Suppress progress spinners
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dedicated host operations
    Host {
        #[command(subcommand)]
        command: HostCommand,
    },
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
    /// YAML document
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
