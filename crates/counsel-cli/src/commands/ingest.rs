//! Ingest command implementation.

use crate::cli::IngestArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use counsel_domain::AttorneyStore;
use counsel_extractor::{AttorneyExtractor, ExtractorConfig, IngestOutcome, Ingestor};
use std::fs;
use tracing::info;

/// Execute the ingest command.
pub fn execute_ingest<S>(
    args: IngestArgs,
    store: S,
    config: &ExtractorConfig,
    formatter: &Formatter,
) -> Result<String>
where
    S: AttorneyStore,
    S::Error: std::fmt::Display,
{
    if args.url.trim().is_empty() {
        return Err(CliError::InvalidInput("Source URL must not be empty".to_string()));
    }

    let html = fs::read_to_string(&args.file)?;
    info!("Read {} bytes from {}", html.len(), args.file.display());

    let extractor = AttorneyExtractor::new(config.clone())?;
    let mut ingestor = Ingestor::new(extractor, store);

    match ingestor.ingest_html(&html, &args.url)? {
        IngestOutcome::Stored(id) => Ok(formatter.attorney_stored(id)),
        IngestOutcome::Rejected => Ok(formatter.warning(&format!(
            "Could not extract an attorney from {} (no name or phone found)",
            args.file.display()
        ))),
    }
}
