//! List verification command implementation.

use super::{CliError, load_list};
use std::path::PathBuf;
use xhud::roster::VerifyConfig;

/// Execute the check command.
///
/// # Errors
///
/// Returns an error if any list fails to load or has issues.
pub(crate) fn execute(lists: &[PathBuf], point_limit: u32) -> Result<(), CliError> {
    let config = VerifyConfig { point_limit };
    let mut failed = 0usize;

    println!("Checking {} list(s) against a {point_limit} point limit...", lists.len());
    println!();

    for path in lists {
        let roster = match load_list(path) {
            Ok(roster) => roster,
            Err(e) => {
                print_check(&path.display().to_string(), false);
                println!("      {e}");
                failed += 1;
                continue;
            }
        };

        let issues = roster.verify(&config);
        let summary = format!(
            "{} - {} ({} ships, {} pts)",
            path.display(),
            roster.name(),
            roster.units().len(),
            roster.cost()
        );
        print_check(&summary, issues.is_empty());
        for issue in &issues {
            println!("      {issue}");
        }
        if !issues.is_empty() {
            failed += 1;
        }
    }

    println!();
    if failed > 0 {
        return Err(CliError::new(format!(
            "{failed} of {} list(s) failed verification",
            lists.len()
        )));
    }
    println!("All lists OK");
    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
