//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use counsel_domain::{AttorneyId, AttorneyStore};

/// Execute the show command.
pub fn execute_show<S>(args: ShowArgs, store: &S, formatter: &Formatter) -> Result<String>
where
    S: AttorneyStore,
    CliError: From<S::Error>,
{
    let id = AttorneyId::parse(&args.id).map_err(CliError::InvalidInput)?;
    let attorney = store.get_by_id(id)?.ok_or(CliError::NotFound(id))?;
    formatter.format_attorney(&attorney)
}
