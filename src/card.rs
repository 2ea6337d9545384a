//! Status cards: a per-player text snapshot regenerated after every change.
//!
//! Unit and upgrade numbering on the card is the numbering the command
//! grammar uses, so the moderator can read targets straight off it.
//!
//! ```text
//! ==== Rebel Aces ====
//! rebel - 55 pts
//!
//! 1. Wedge Antilles (X-Wing)
//!    PS 9  ATK 3  AGI 2
//!    SHLD [##-] 2/3
//!    HULL [###] 3/3
//!    Upgrades:
//!      1. R2 Astromech
//!      2. Shield Upgrade (disabled)
//! ```

// Cards are built with format! + push_str for readability
#![allow(clippy::format_push_string)]

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::CardError;
use crate::roster::{Fleet, Player, Roster, Unit};
use crate::session::Redraw;

/// Render a roster's current state.
#[must_use]
pub fn render_card(roster: &Roster) -> String {
    let mut output = String::new();

    output.push_str(&format!("==== {} ====\n", roster.name()));
    if roster.faction().is_empty() {
        output.push_str(&format!("{} pts\n", roster.cost()));
    } else {
        output.push_str(&format!("{} - {} pts\n", roster.faction(), roster.cost()));
    }

    for (i, unit) in roster.units().iter().enumerate() {
        output.push('\n');
        render_unit(&mut output, i + 1, unit);
    }

    output
}

fn render_unit(output: &mut String, index: usize, unit: &Unit) {
    let stats = unit.stats();

    output.push_str(&format!("{index}. {} ({})\n", unit.name(), unit.ship()));
    output.push_str(&format!(
        "   PS {}  ATK {}  AGI {}\n",
        stats.skill, stats.attack, stats.agility
    ));
    output.push_str(&format!(
        "   SHLD {} {}/{}\n",
        gauge(unit.shields(), stats.shields),
        unit.shields(),
        stats.shields
    ));
    output.push_str(&format!(
        "   HULL {} {}/{}\n",
        gauge(unit.hull(), stats.hull),
        unit.hull(),
        stats.hull
    ));

    if unit.is_destroyed() {
        output.push_str("   DESTROYED\n");
    } else if !unit.is_enabled() {
        output.push_str("   DISABLED\n");
    }

    if !unit.upgrades().is_empty() {
        output.push_str("   Upgrades:\n");
        for (j, upgrade) in unit.upgrades().iter().enumerate() {
            let marker = if upgrade.is_enabled() { "" } else { " (disabled)" };
            output.push_str(&format!("     {}. {}{marker}\n", j + 1, upgrade.name()));
        }
    }
}

/// `[##-]` style counter: one `#` per remaining point, `-` per lost point.
fn gauge(current: u8, max: u8) -> String {
    let filled = usize::from(current.min(max));
    let empty = usize::from(max) - filled;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
}

/// Render a roster and write it to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_card(roster: &Roster, path: &Path) -> Result<(), CardError> {
    fs::write(path, render_card(roster)).map_err(|source| CardError {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes both players' cards to fixed paths.
#[derive(Debug, Clone)]
pub struct CardWriter {
    paths: [PathBuf; 2],
}

impl CardWriter {
    /// Cards for player 1 and player 2, in that order.
    #[must_use]
    pub fn new(paths: [PathBuf; 2]) -> Self {
        Self { paths }
    }

    /// Where a player's card is written.
    #[must_use]
    pub fn path(&self, player: Player) -> &Path {
        &self.paths[player.index()]
    }
}

impl Redraw for CardWriter {
    fn redraw(&mut self, fleet: &Fleet) -> Result<(), CardError> {
        for player in Player::ALL {
            write_card(fleet.roster(player), self.path(player))?;
        }
        info!(
            p1 = %self.paths[0].display(),
            p2 = %self.paths[1].display(),
            "cards redrawn"
        );
        Ok(())
    }
}
