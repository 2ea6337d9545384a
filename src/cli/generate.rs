//! Card generation command implementation.

use super::{CliError, load_list};
use std::path::Path;
use xhud::card::write_card;

/// Execute the gen command.
///
/// # Errors
///
/// Returns an error if the list cannot be loaded or the card cannot be written.
pub(crate) fn execute(list: &Path, out: &Path) -> Result<(), CliError> {
    let roster = load_list(list)?;
    write_card(&roster, out)?;
    println!("Card for {} written to: {}", roster.name(), out.display());
    Ok(())
}
