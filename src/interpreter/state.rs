//! Per-character state machine for command lines.
//!
//! A line is consumed left to right. Each character moves the machine
//! between four states and yields at most one [`Effect`]:
//!
//! ```text
//! AwaitPlayer --1|2--> AwaitUnit --unit--> AwaitUnitCommand --slot--> AwaitUpgradeCommand
//!      ^                                     |  s S h H e E             |  e E
//!      +------------------ space ------------+--------------------------+
//! ```
//!
//! The transition function only reads the roster through [`RosterView`];
//! applying effects is the caller's job.

use std::fmt;

use crate::roster::{Player, RosterView};

/// A resolved, validated address for one mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    /// Seat addressed.
    pub player: Player,
    /// 1-based unit index.
    pub unit: usize,
    /// 1-based upgrade slot, if the segment addresses an upgrade.
    pub upgrade: Option<usize>,
}

impl Target {
    /// Address a unit.
    #[must_use]
    pub const fn unit(player: Player, unit: usize) -> Self {
        Self {
            player,
            unit,
            upgrade: None,
        }
    }

    /// Address an upgrade slot on a unit.
    #[must_use]
    pub const fn upgrade(player: Player, unit: usize, upgrade: usize) -> Self {
        Self {
            player,
            unit,
            upgrade: Some(upgrade),
        }
    }
}

/// Unit-level action letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitAction {
    /// `s`
    ShieldDown,
    /// `S`
    ShieldUp,
    /// `h`
    HullDown,
    /// `H`
    HullUp,
    /// `e`
    Disable,
    /// `E`
    Enable,
}

impl UnitAction {
    /// Every unit action, in help-text order.
    pub const ALL: [UnitAction; 6] = [
        UnitAction::ShieldDown,
        UnitAction::ShieldUp,
        UnitAction::HullDown,
        UnitAction::HullUp,
        UnitAction::Disable,
        UnitAction::Enable,
    ];

    /// Decode an action letter.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(UnitAction::ShieldDown),
            'S' => Some(UnitAction::ShieldUp),
            'h' => Some(UnitAction::HullDown),
            'H' => Some(UnitAction::HullUp),
            'e' => Some(UnitAction::Disable),
            'E' => Some(UnitAction::Enable),
            _ => None,
        }
    }

    /// The letter that selects this action.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            UnitAction::ShieldDown => 's',
            UnitAction::ShieldUp => 'S',
            UnitAction::HullDown => 'h',
            UnitAction::HullUp => 'H',
            UnitAction::Disable => 'e',
            UnitAction::Enable => 'E',
        }
    }
}

impl fmt::Display for UnitAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UnitAction::ShieldDown => "Shield Down",
            UnitAction::ShieldUp => "Shield Up",
            UnitAction::HullDown => "Hull Down",
            UnitAction::HullUp => "Hull Up",
            UnitAction::Disable => "Disabled",
            UnitAction::Enable => "Enabled",
        };
        f.write_str(label)
    }
}

/// Upgrade-level action letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeAction {
    /// `e`
    Disable,
    /// `E`
    Enable,
}

impl UpgradeAction {
    /// Decode an action letter.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'e' => Some(UpgradeAction::Disable),
            'E' => Some(UpgradeAction::Enable),
            _ => None,
        }
    }
}

impl fmt::Display for UpgradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpgradeAction::Disable => f.write_str("Disabled"),
            UpgradeAction::Enable => f.write_str("Enabled"),
        }
    }
}

/// Why a line was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// Player character was not `1` or `2`.
    InvalidPlayer,
    /// Unit character was not a digit in range for the player's roster.
    InvalidShip,
    /// Upgrade digit was outside `[1, upgrades + 1]`.
    InvalidUpgrade,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidPlayer => f.write_str("Invalid player"),
            Diagnostic::InvalidShip => f.write_str("Invalid ship"),
            Diagnostic::InvalidUpgrade => f.write_str("Invalid upgrade"),
        }
    }
}

/// What a single character asks the interpreter to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond the state change.
    None,
    /// Dispatch a unit mutation.
    Unit {
        /// Addressed unit.
        target: Target,
        /// Requested mutation.
        action: UnitAction,
    },
    /// Dispatch an upgrade mutation.
    Upgrade {
        /// Addressed upgrade slot.
        target: Target,
        /// Requested mutation.
        action: UpgradeAction,
    },
    /// Letter with no meaning in the current state; kept for compatibility.
    Ignored(char),
    /// Stop parsing the rest of the line.
    Abort(Diagnostic),
}

/// Result of feeding one character to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// State to continue from.
    pub next: ParseState,
    /// Side effect requested by the character.
    pub effect: Effect,
}

impl Step {
    const fn to(next: ParseState) -> Self {
        Self {
            next,
            effect: Effect::None,
        }
    }

    const fn stay(state: ParseState, effect: Effect) -> Self {
        Self {
            next: state,
            effect,
        }
    }
}

/// Parser position within one segment of a command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseState {
    /// Expecting `1` or `2`.
    #[default]
    AwaitPlayer,
    /// Expecting a unit digit for this player.
    AwaitUnit {
        /// Player already selected.
        player: Player,
    },
    /// Expecting a unit action, an upgrade digit, or a space.
    AwaitUnitCommand(Target),
    /// Expecting an upgrade action or a space.
    AwaitUpgradeCommand(Target),
}

impl ParseState {
    /// Consume one character.
    ///
    /// Index-consuming transitions are validated against `view` here, so a
    /// dispatched [`Effect`] always carries in-range unit indices.
    #[must_use]
    pub fn step<V: RosterView + ?Sized>(self, c: char, view: &V) -> Step {
        match self {
            ParseState::AwaitPlayer => match Player::from_digit(c) {
                Some(player) => Step::to(ParseState::AwaitUnit { player }),
                None => Step::stay(self, Effect::Abort(Diagnostic::InvalidPlayer)),
            },

            ParseState::AwaitUnit { player } => match digit(c) {
                Some(unit) if (1..=view.unit_count(player)).contains(&unit) => {
                    Step::to(ParseState::AwaitUnitCommand(Target::unit(player, unit)))
                }
                _ => Step::stay(self, Effect::Abort(Diagnostic::InvalidShip)),
            },

            ParseState::AwaitUnitCommand(target) => {
                if let Some(slot) = digit(c) {
                    // One past the last fitted slot is accepted.
                    let last = view.upgrade_count(target.player, target.unit) + 1;
                    if (1..=last).contains(&slot) {
                        let target = Target::upgrade(target.player, target.unit, slot);
                        return Step::to(ParseState::AwaitUpgradeCommand(target));
                    }
                    return Step::stay(self, Effect::Abort(Diagnostic::InvalidUpgrade));
                }
                if c == ' ' {
                    return Step::to(ParseState::AwaitPlayer);
                }
                match UnitAction::from_char(c) {
                    Some(action) => Step::stay(self, Effect::Unit { target, action }),
                    None => Step::stay(self, Effect::Ignored(c)),
                }
            }

            ParseState::AwaitUpgradeCommand(target) => {
                if c == ' ' {
                    return Step::to(ParseState::AwaitPlayer);
                }
                match UpgradeAction::from_char(c) {
                    Some(action) => Step::stay(self, Effect::Upgrade { target, action }),
                    None => Step::stay(self, Effect::Ignored(c)),
                }
            }
        }
    }
}

fn digit(c: char) -> Option<usize> {
    c.to_digit(10).and_then(|d| usize::try_from(d).ok())
}
