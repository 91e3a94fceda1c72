//! Counsel CLI - Extract, store and search attorney contact records.

use counsel_cli::commands;
use counsel_cli::{Cli, Command, Config, Formatter};
use counsel_store::SqliteStore;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> counsel_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    // Initialize tracing (log to stderr); RUST_LOG wins over the config
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.settings.log_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let open_store = || -> counsel_cli::Result<SqliteStore> {
        let database = config.resolve_database_path(cli.database.as_deref())?;
        if let Some(parent) = database.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        debug!("Using database {}", database.display());
        Ok(SqliteStore::new(&database)?)
    };

    let output = match cli.command {
        Command::Init(args) => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => Config::path()?,
            };
            commands::execute_init(&path, args.force, &formatter)?
        }
        Command::Ingest(args) => commands::execute_ingest(args, open_store()?, &config.extractor, &formatter)?,
        Command::Search(args) => {
            commands::execute_search(args, &open_store()?, config.settings.default_limit, &formatter)?
        }
        Command::Show(args) => commands::execute_show(args, &open_store()?, &formatter)?,
        Command::Stats => commands::execute_stats(&open_store()?, &formatter)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
