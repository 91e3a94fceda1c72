//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use counsel_domain::{AttorneyStore, Filter};
use counsel_query::parse_query;
use tracing::debug;

/// Execute the search command.
pub fn execute_search<S>(
    args: SearchArgs,
    store: &S,
    default_limit: usize,
    formatter: &Formatter,
) -> Result<String>
where
    S: AttorneyStore,
    CliError: From<S::Error>,
{
    let limit = args.limit.unwrap_or(default_limit);
    if limit == 0 {
        return Err(CliError::InvalidInput("Limit must be greater than 0".to_string()));
    }

    let filter = build_filter(&args);
    debug!("Searching with {:?} (limit {})", filter, limit);

    let attorneys = store.search(&filter, limit)?;
    formatter.format_attorneys(&attorneys)
}

/// Parse the free text, then let explicit flags override parsed fields
fn build_filter(args: &SearchArgs) -> Filter {
    let parsed = parse_query(&args.query.join(" "));
    parsed.merged_with(Filter {
        zip_code: args.zip.clone(),
        practice_area: args.practice.clone(),
        city: args.city.clone(),
    })
}
