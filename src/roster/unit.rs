//! Units, their upgrades and combat counters.

use serde::{Deserialize, Serialize};

/// Printed statistics of a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Pilot skill.
    pub skill: u8,
    /// Primary weapon value.
    pub attack: u8,
    /// Agility.
    pub agility: u8,
    /// Maximum hull.
    pub hull: u8,
    /// Maximum shields.
    pub shields: u8,
}

/// Signed stat adjustments granted by an upgrade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Pilot skill adjustment.
    pub skill: i8,
    /// Primary weapon adjustment.
    pub attack: i8,
    /// Agility adjustment.
    pub agility: i8,
    /// Hull adjustment.
    pub hull: i8,
    /// Shield adjustment.
    pub shields: i8,
}

impl Modifiers {
    /// Whether this modifier changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// An upgrade fitted to a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upgrade {
    name: String,
    points: u32,
    modifiers: Modifiers,
    enabled: bool,
}

impl Upgrade {
    /// Create an enabled upgrade.
    #[must_use]
    pub fn new(name: impl Into<String>, points: u32, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            points,
            modifiers,
            enabled: true,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Point cost.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Stat adjustments.
    #[must_use]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Whether the upgrade is currently usable.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the upgrade face down.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Flip the upgrade face up.
    pub fn enable(&mut self) {
        self.enabled = true;
    }
}

/// A ship in play.
///
/// Shield and hull counters start at their effective maximum and are always
/// kept within `[0, max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    name: String,
    ship: String,
    points: u32,
    base: Stats,
    upgrades: Vec<Upgrade>,
    shields: u8,
    hull: u8,
    enabled: bool,
}

impl Unit {
    /// Create a unit at full strength.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ship: impl Into<String>,
        points: u32,
        base: Stats,
        upgrades: Vec<Upgrade>,
    ) -> Self {
        let mut unit = Self {
            name: name.into(),
            ship: ship.into(),
            points,
            base,
            upgrades,
            shields: 0,
            hull: 0,
            enabled: true,
        };
        let stats = unit.stats();
        unit.shields = stats.shields;
        unit.hull = stats.hull;
        unit
    }

    /// Pilot name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ship type.
    #[must_use]
    pub fn ship(&self) -> &str {
        &self.ship
    }

    /// Pilot cost without upgrades.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Stats before upgrades.
    #[must_use]
    pub const fn base(&self) -> Stats {
        self.base
    }

    /// Effective stats: base plus every fitted upgrade's modifiers, floored at zero.
    #[must_use]
    pub fn stats(&self) -> Stats {
        let mut total = [0i32; 5];
        for upgrade in &self.upgrades {
            let m = upgrade.modifiers;
            total[0] += i32::from(m.skill);
            total[1] += i32::from(m.attack);
            total[2] += i32::from(m.agility);
            total[3] += i32::from(m.hull);
            total[4] += i32::from(m.shields);
        }
        Stats {
            skill: adjust(self.base.skill, total[0]),
            attack: adjust(self.base.attack, total[1]),
            agility: adjust(self.base.agility, total[2]),
            hull: adjust(self.base.hull, total[3]),
            shields: adjust(self.base.shields, total[4]),
        }
    }

    /// Pilot cost plus all upgrade costs, saturating at `u32::MAX`.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.upgrades
            .iter()
            .fold(self.points, |total, upgrade| total.saturating_add(upgrade.points))
    }

    /// Current shields.
    #[must_use]
    pub const fn shields(&self) -> u8 {
        self.shields
    }

    /// Current hull.
    #[must_use]
    pub const fn hull(&self) -> u8 {
        self.hull
    }

    /// Whether the unit is active.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A unit with no hull left has been destroyed.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.hull == 0
    }

    /// Fitted upgrades, in slot order.
    #[must_use]
    pub fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    /// Upgrade by 1-based slot.
    #[must_use]
    pub fn upgrade(&self, slot: usize) -> Option<&Upgrade> {
        slot.checked_sub(1).and_then(|i| self.upgrades.get(i))
    }

    /// Upgrade by 1-based slot, mutably.
    #[must_use]
    pub fn upgrade_mut(&mut self, slot: usize) -> Option<&mut Upgrade> {
        slot.checked_sub(1).and_then(|i| self.upgrades.get_mut(i))
    }

    /// Lose one shield. No-op at zero.
    pub fn shield_down(&mut self) {
        self.shields = self.shields.saturating_sub(1);
    }

    /// Regain one shield. No-op at maximum.
    pub fn shield_up(&mut self) {
        if self.shields < self.stats().shields {
            self.shields += 1;
        }
    }

    /// Lose one hull point. No-op at zero.
    pub fn hull_down(&mut self) {
        self.hull = self.hull.saturating_sub(1);
    }

    /// Regain one hull point. No-op at maximum.
    pub fn hull_up(&mut self) {
        if self.hull < self.stats().hull {
            self.hull += 1;
        }
    }

    /// Mark the unit disabled.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Mark the unit enabled.
    pub fn enable(&mut self) {
        self.enabled = true;
    }
}

fn adjust(base: u8, delta: i32) -> u8 {
    let value = (i32::from(base) + delta).clamp(0, i32::from(u8::MAX));
    u8::try_from(value).unwrap_or(u8::MAX)
}
