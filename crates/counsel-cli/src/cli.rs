//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Counsel CLI - Extract attorney profiles from saved pages and search them.
#[derive(Debug, Parser)]
#[command(name = "counsel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database path (overrides the configuration file)
    #[arg(short, long, global = true, env = "COUNSEL_DATABASE")]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract an attorney from a saved HTML page and store it
    Ingest(IngestArgs),

    /// Search stored attorneys with a free-text query
    Search(SearchArgs),

    /// Show one stored attorney
    Show(ShowArgs),

    /// Show record counts
    Stats,

    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for the ingest command.
#[derive(Debug, Parser)]
pub struct IngestArgs {
    /// HTML file to read
    pub file: PathBuf,

    /// URL the page was fetched from
    #[arg(short, long)]
    pub url: String,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Free-text query (e.g. "94621 family law", "Oakland, CA")
    pub query: Vec<String>,

    /// City filter (overrides the parsed city)
    #[arg(long)]
    pub city: Option<String>,

    /// Zip code filter (overrides the parsed zip code)
    #[arg(short, long)]
    pub zip: Option<String>,

    /// Practice area filter (overrides the parsed practice area)
    #[arg(short, long)]
    pub practice: Option<String>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Attorney id
    pub id: String,
}

/// Arguments for the init command.
#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
