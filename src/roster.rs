//! Roster model for both players.
//!
//! Holds the two lists in play and exposes them to the command interpreter
//! through a small capability surface:
//! - [`RosterView`] for the lookups the grammar needs while validating
//! - [`RosterAccess`] for the mutations it dispatches
//!
//! All indices crossing these traits are 1-based, matching what the moderator
//! types. Storage is 0-based.

mod list;
mod unit;
mod verify;

pub use list::Roster;
pub use unit::{Modifiers, Stats, Unit, Upgrade};
pub use verify::{Issue, VerifyConfig, MAX_UNITS, MAX_UPGRADES};

use std::fmt;

use crate::error::AccessError;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player 1.
    One,
    /// Player 2.
    Two,
}

impl Player {
    /// Both players, in seat order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Parse a player from its command character.
    #[must_use]
    pub const fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Player::One),
            '2' => Some(Player::Two),
            _ => None,
        }
    }

    /// Seat number as typed by the moderator (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Storage index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Read-only lookups the command grammar validates against.
pub trait RosterView {
    /// Number of units in a player's roster.
    fn unit_count(&self, player: Player) -> usize;

    /// Display name of a unit, if it exists.
    fn unit_name(&self, player: Player, unit: usize) -> Option<&str>;

    /// Number of upgrades fitted to a unit (0 if the unit does not exist).
    fn upgrade_count(&self, player: Player, unit: usize) -> usize;

    /// Display name of an upgrade, if it exists.
    fn upgrade_name(&self, player: Player, unit: usize, upgrade: usize) -> Option<&str>;
}

/// Mutations the command interpreter dispatches.
///
/// Implementations re-check every index and clamp counters to `[0, max]`;
/// callers never need to pre-validate for memory safety.
pub trait RosterAccess: RosterView {
    /// Remove one shield.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchUnit`] if the unit does not exist.
    fn shield_down(&mut self, player: Player, unit: usize) -> Result<(), AccessError>;

    /// Restore one shield.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchUnit`] if the unit does not exist.
    fn shield_up(&mut self, player: Player, unit: usize) -> Result<(), AccessError>;

    /// Remove one hull point.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchUnit`] if the unit does not exist.
    fn hull_down(&mut self, player: Player, unit: usize) -> Result<(), AccessError>;

    /// Restore one hull point.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchUnit`] if the unit does not exist.
    fn hull_up(&mut self, player: Player, unit: usize) -> Result<(), AccessError>;

    /// Mark a unit disabled.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchUnit`] if the unit does not exist.
    fn disable_unit(&mut self, player: Player, unit: usize) -> Result<(), AccessError>;

    /// Mark a unit enabled.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchUnit`] if the unit does not exist.
    fn enable_unit(&mut self, player: Player, unit: usize) -> Result<(), AccessError>;

    /// Mark an upgrade disabled.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the unit or upgrade does not exist.
    fn disable_upgrade(
        &mut self,
        player: Player,
        unit: usize,
        upgrade: usize,
    ) -> Result<(), AccessError>;

    /// Mark an upgrade enabled.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the unit or upgrade does not exist.
    fn enable_upgrade(
        &mut self,
        player: Player,
        unit: usize,
        upgrade: usize,
    ) -> Result<(), AccessError>;
}

/// Both players' rosters for one game.
#[derive(Debug, Clone)]
pub struct Fleet {
    rosters: [Roster; 2],
}

impl Fleet {
    /// Seat two rosters, player 1 first.
    #[must_use]
    pub fn new(first: Roster, second: Roster) -> Self {
        Self {
            rosters: [first, second],
        }
    }

    /// A player's roster.
    #[must_use]
    pub fn roster(&self, player: Player) -> &Roster {
        &self.rosters[player.index()]
    }

    /// A player's roster, mutably.
    #[must_use]
    pub fn roster_mut(&mut self, player: Player) -> &mut Roster {
        &mut self.rosters[player.index()]
    }

    /// Look up a unit by player and 1-based index.
    #[must_use]
    pub fn unit(&self, player: Player, unit: usize) -> Option<&Unit> {
        self.roster(player).unit(unit)
    }

    fn unit_mut(&mut self, player: Player, unit: usize) -> Result<&mut Unit, AccessError> {
        self.roster_mut(player)
            .unit_mut(unit)
            .ok_or(AccessError::NoSuchUnit { player, unit })
    }

    fn upgrade_mut(
        &mut self,
        player: Player,
        unit: usize,
        upgrade: usize,
    ) -> Result<&mut Upgrade, AccessError> {
        self.unit_mut(player, unit)?
            .upgrade_mut(upgrade)
            .ok_or(AccessError::NoSuchUpgrade {
                player,
                unit,
                upgrade,
            })
    }
}

impl RosterView for Fleet {
    fn unit_count(&self, player: Player) -> usize {
        self.roster(player).units().len()
    }

    fn unit_name(&self, player: Player, unit: usize) -> Option<&str> {
        self.unit(player, unit).map(Unit::name)
    }

    fn upgrade_count(&self, player: Player, unit: usize) -> usize {
        self.unit(player, unit).map_or(0, |u| u.upgrades().len())
    }

    fn upgrade_name(&self, player: Player, unit: usize, upgrade: usize) -> Option<&str> {
        self.unit(player, unit)
            .and_then(|u| u.upgrade(upgrade))
            .map(Upgrade::name)
    }
}

impl RosterAccess for Fleet {
    fn shield_down(&mut self, player: Player, unit: usize) -> Result<(), AccessError> {
        self.unit_mut(player, unit)?.shield_down();
        Ok(())
    }

    fn shield_up(&mut self, player: Player, unit: usize) -> Result<(), AccessError> {
        self.unit_mut(player, unit)?.shield_up();
        Ok(())
    }

    fn hull_down(&mut self, player: Player, unit: usize) -> Result<(), AccessError> {
        self.unit_mut(player, unit)?.hull_down();
        Ok(())
    }

    fn hull_up(&mut self, player: Player, unit: usize) -> Result<(), AccessError> {
        self.unit_mut(player, unit)?.hull_up();
        Ok(())
    }

    fn disable_unit(&mut self, player: Player, unit: usize) -> Result<(), AccessError> {
        self.unit_mut(player, unit)?.disable();
        Ok(())
    }

    fn enable_unit(&mut self, player: Player, unit: usize) -> Result<(), AccessError> {
        self.unit_mut(player, unit)?.enable();
        Ok(())
    }

    fn disable_upgrade(
        &mut self,
        player: Player,
        unit: usize,
        upgrade: usize,
    ) -> Result<(), AccessError> {
        self.upgrade_mut(player, unit, upgrade)?.disable();
        Ok(())
    }

    fn enable_upgrade(
        &mut self,
        player: Player,
        unit: usize,
        upgrade: usize,
    ) -> Result<(), AccessError> {
        self.upgrade_mut(player, unit, upgrade)?.enable();
        Ok(())
    }
}
