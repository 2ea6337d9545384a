//! List dump command implementation.

use super::{CliError, load_list};
use std::path::Path;

/// Execute the dump command.
///
/// # Errors
///
/// Returns an error if the list cannot be loaded.
pub(crate) fn execute(list: &Path) -> Result<(), CliError> {
    let roster = load_list(list)?;
    print!("{}", roster.dump());
    Ok(())
}
