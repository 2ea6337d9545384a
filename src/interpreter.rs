//! Command interpreter for moderator input.
//!
//! Each input line is one of:
//! - `qqq` to end the session
//! - `?` to print the command summary
//! - one or more space-separated segments of the form `<PSC>` (player, ship,
//!   commands) or `<PSUC>` (player, ship, upgrade, commands)
//!
//! Segments are validated eagerly, one character at a time, by the
//! [`ParseState`] machine. The first invalid target abandons the rest of the
//! line; mutations dispatched before that point stay applied.

mod state;

pub use state::{Diagnostic, Effect, ParseState, Step, Target, UnitAction, UpgradeAction};

use std::io::{self, Write};

use tracing::debug;

use crate::error::AccessError;
use crate::roster::RosterAccess;

/// Line that ends the session.
pub const QUIT_COMMAND: &str = "qqq";

/// Line that prints [`HELP_TEXT`].
pub const HELP_COMMAND: &str = "?";

/// Command summary printed for [`HELP_COMMAND`].
pub const HELP_TEXT: &str = "\
Commands:
  ?      - help
  qqq    - quit
  <PSC>  - modify ship stats
  <PSUC> - modify upgrade status
   P - player number (1 or 2)
   S - ship number (1..n counting down)
   U - upgrade number (1..n left to right, top to bottom)
   C - command(s)
     s - shield down
     S - shield up
     h - hull down
     H - hull up
     e - disable
     E - enable
  Examples:
    13s     - player 1, ship 3 loses a shield
    21ssh   - player 2, ship 1 loses 2 shield and a hull
    11hhe   - player 1, ship 1 loses 2 hull and is disabled
    231e    - player 2, ship 3, upgrade 1 is disabled
    11h 12h - player 1, ships 1 and 2 each lose a hull
";

/// A mutation the roster accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Unit counter or status change.
    Unit {
        /// Addressed unit.
        target: Target,
        /// Applied action.
        action: UnitAction,
    },
    /// Upgrade status change.
    Upgrade {
        /// Addressed upgrade slot.
        target: Target,
        /// Applied action.
        action: UpgradeAction,
    },
}

/// Everything that happened while interpreting one grammar line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineReport {
    /// Mutations applied, in input order.
    pub applied: Vec<Mutation>,
    /// Characters that meant nothing where they appeared.
    pub ignored: Vec<char>,
    /// Dispatched actions the roster refused (the phantom upgrade slot).
    pub skipped: Vec<AccessError>,
    /// Diagnostic that cut the line short, if any.
    pub aborted: Option<Diagnostic>,
}

impl LineReport {
    /// Whether the roster changed along a path that did not abort.
    ///
    /// An aborted line reports `false` even when segments before the bad one
    /// were applied, so output redrawn on this signal lags the roster until
    /// the next changed line. Check [`LineReport::applied`] to catch that case.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.aborted.is_none() && !self.applied.is_empty()
    }
}

/// Result of interpreting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The moderator asked to end the session.
    Quit,
    /// Help text was printed.
    Help,
    /// The line went through the command grammar.
    Line(LineReport),
}

impl Outcome {
    /// Whether status cards must be regenerated.
    #[must_use]
    pub fn redraw(&self) -> bool {
        match self {
            Outcome::Quit | Outcome::Help => false,
            Outcome::Line(report) => report.changed(),
        }
    }

    /// Whether the session should stop.
    #[must_use]
    pub const fn is_quit(&self) -> bool {
        matches!(self, Outcome::Quit)
    }
}

/// Interpret one line of moderator input against the roster.
///
/// Confirmations and diagnostics are written to `out` as they happen.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn interpret<R, W>(line: &str, roster: &mut R, out: &mut W) -> io::Result<Outcome>
where
    R: RosterAccess + ?Sized,
    W: Write + ?Sized,
{
    if line == QUIT_COMMAND {
        return Ok(Outcome::Quit);
    }
    if line == HELP_COMMAND {
        out.write_all(HELP_TEXT.as_bytes())?;
        return Ok(Outcome::Help);
    }

    let mut report = LineReport::default();
    let mut state = ParseState::default();

    for c in line.chars() {
        let step = state.step(c, &*roster);
        state = step.next;
        match step.effect {
            Effect::None => {}
            Effect::Ignored(c) => {
                debug!(?c, ?state, "ignored character");
                report.ignored.push(c);
            }
            Effect::Abort(diagnostic) => {
                writeln!(out, "{diagnostic}")?;
                report.aborted = Some(diagnostic);
                break;
            }
            Effect::Unit { target, action } => {
                apply_unit(roster, target, action, out, &mut report)?;
            }
            Effect::Upgrade { target, action } => {
                apply_upgrade(roster, target, action, out, &mut report)?;
            }
        }
    }

    Ok(Outcome::Line(report))
}

fn apply_unit<R, W>(
    roster: &mut R,
    target: Target,
    action: UnitAction,
    out: &mut W,
    report: &mut LineReport,
) -> io::Result<()>
where
    R: RosterAccess + ?Sized,
    W: Write + ?Sized,
{
    let Target { player, unit, .. } = target;
    let name = roster.unit_name(player, unit).unwrap_or_default().to_string();

    let result = match action {
        UnitAction::ShieldDown => roster.shield_down(player, unit),
        UnitAction::ShieldUp => roster.shield_up(player, unit),
        UnitAction::HullDown => roster.hull_down(player, unit),
        UnitAction::HullUp => roster.hull_up(player, unit),
        UnitAction::Disable => roster.disable_unit(player, unit),
        UnitAction::Enable => roster.enable_unit(player, unit),
    };

    match result {
        Ok(()) => {
            writeln!(out, "  Player {player} - Ship {unit} ({name}) - {action}")?;
            debug!(%player, unit, ?action, "applied unit action");
            report.applied.push(Mutation::Unit { target, action });
        }
        Err(err) => {
            writeln!(out, "  {err}")?;
            report.skipped.push(err);
        }
    }
    Ok(())
}

fn apply_upgrade<R, W>(
    roster: &mut R,
    target: Target,
    action: UpgradeAction,
    out: &mut W,
    report: &mut LineReport,
) -> io::Result<()>
where
    R: RosterAccess + ?Sized,
    W: Write + ?Sized,
{
    let Target { player, unit, .. } = target;
    // Slot 0 never exists, so a target without a slot is refused by the roster.
    let slot = target.upgrade.unwrap_or_default();
    let name = roster.unit_name(player, unit).unwrap_or_default().to_string();
    let upgrade_name = roster
        .upgrade_name(player, unit, slot)
        .unwrap_or_default()
        .to_string();

    let result = match action {
        UpgradeAction::Disable => roster.disable_upgrade(player, unit, slot),
        UpgradeAction::Enable => roster.enable_upgrade(player, unit, slot),
    };

    match result {
        Ok(()) => {
            writeln!(
                out,
                "  Player {player} - Ship {unit} ({name}) - Upgrade {slot} ({upgrade_name}) - {action}"
            )?;
            debug!(%player, unit, slot, ?action, "applied upgrade action");
            report.applied.push(Mutation::Upgrade { target, action });
        }
        Err(err) => {
            writeln!(out, "  {err}")?;
            report.skipped.push(err);
        }
    }
    Ok(())
}
