//! Stats command implementation.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use counsel_domain::AttorneyStore;

/// Execute the stats command.
pub fn execute_stats<S>(store: &S, formatter: &Formatter) -> Result<String>
where
    S: AttorneyStore,
    CliError: From<S::Error>,
{
    let stats = store.stats()?;
    formatter.format_stats(&stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use counsel_store::SqliteStore;

    #[test]
    fn test_stats_on_empty_store() {
        let store = SqliteStore::new(":memory:").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(execute_stats(&store, &formatter).unwrap(), "0");
    }
}
