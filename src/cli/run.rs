//! Run command implementation.

use super::{CliError, load_list};
use std::io;
use std::path::{Path, PathBuf};
use xhud::roster::VerifyConfig;
use xhud::{Fleet, Player, Session, SessionConfig};

/// Execute the run command.
///
/// Lists that fail verification are reported but still played; the table
/// has the final say on legality.
///
/// # Errors
///
/// Returns an error if a list cannot be loaded or the session fails.
pub(crate) fn execute(
    first: &Path,
    second: &Path,
    p1_card: Option<PathBuf>,
    p2_card: Option<PathBuf>,
    prompt: Option<String>,
) -> Result<(), CliError> {
    let fleet = Fleet::new(load_list(first)?, load_list(second)?);

    let verify = VerifyConfig::default();
    for player in Player::ALL {
        let roster = fleet.roster(player);
        for issue in roster.verify(&verify) {
            eprintln!("Warning: player {player} ({}): {issue}", roster.name());
        }
    }

    let defaults = SessionConfig::default();
    let [default_p1, default_p2] = defaults.card_paths;
    let config = SessionConfig {
        prompt: prompt.unwrap_or(defaults.prompt),
        card_paths: [
            p1_card.unwrap_or(default_p1),
            p2_card.unwrap_or(default_p2),
        ],
    };

    println!("Player 1: {}", fleet.roster(Player::One).name());
    println!("Player 2: {}", fleet.roster(Player::Two).name());
    println!("Type ? for help, qqq to quit.");

    let mut session = Session::from_config(fleet, config);
    let stdin = io::stdin();
    let summary = session.run(stdin.lock(), io::stdout().lock())?;

    println!(
        "Session over: {} command(s), {} redraw(s)",
        summary.lines, summary.redraws
    );
    Ok(())
}
