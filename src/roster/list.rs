//! Roster lists and the JSON list format.

// Listings are built with format! + push_str for readability
#![allow(clippy::format_push_string)]

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::RosterError;
use crate::roster::{Modifiers, Stats, Unit, Upgrade};

/// On-disk shape of a list file.
#[derive(Debug, Deserialize)]
struct ListDocument {
    name: String,
    #[serde(default)]
    faction: String,
    units: Vec<UnitEntry>,
}

#[derive(Debug, Deserialize)]
struct UnitEntry {
    name: String,
    ship: String,
    #[serde(default)]
    points: u32,
    #[serde(flatten)]
    stats: Stats,
    #[serde(default)]
    upgrades: Vec<UpgradeEntry>,
}

#[derive(Debug, Deserialize)]
struct UpgradeEntry {
    name: String,
    #[serde(default)]
    points: u32,
    #[serde(default)]
    modifiers: Modifiers,
}

impl From<UnitEntry> for Unit {
    fn from(entry: UnitEntry) -> Self {
        let upgrades = entry
            .upgrades
            .into_iter()
            .map(|u| Upgrade::new(u.name, u.points, u.modifiers))
            .collect();
        Unit::new(entry.name, entry.ship, entry.points, entry.stats, upgrades)
    }
}

/// One player's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    name: String,
    faction: String,
    units: Vec<Unit>,
}

impl Roster {
    /// Build a roster from units already in hand.
    #[must_use]
    pub fn new(name: impl Into<String>, faction: impl Into<String>, units: Vec<Unit>) -> Self {
        Self {
            name: name.into(),
            faction: faction.into(),
            units,
        }
    }

    /// Parse a roster from list JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Parse`] if the text is not a valid list.
    pub fn from_json(text: &str) -> Result<Self, RosterError> {
        Self::parse(text, "<inline>")
    }

    /// Load a roster from a list file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let text = fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let roster = Self::parse(&text, &path.display().to_string())?;
        info!(
            path = %path.display(),
            name = roster.name(),
            units = roster.units().len(),
            points = roster.cost(),
            "loaded list"
        );
        Ok(roster)
    }

    fn parse(text: &str, origin: &str) -> Result<Self, RosterError> {
        let doc: ListDocument =
            serde_json::from_str(text).map_err(|source| RosterError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        Ok(Self {
            name: doc.name,
            faction: doc.faction,
            units: doc.units.into_iter().map(Unit::from).collect(),
        })
    }

    /// List name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Faction tag (may be empty).
    #[must_use]
    pub fn faction(&self) -> &str {
        &self.faction
    }

    /// Units in list order.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Unit by 1-based index.
    #[must_use]
    pub fn unit(&self, index: usize) -> Option<&Unit> {
        index.checked_sub(1).and_then(|i| self.units.get(i))
    }

    /// Unit by 1-based index, mutably.
    #[must_use]
    pub fn unit_mut(&mut self, index: usize) -> Option<&mut Unit> {
        index.checked_sub(1).and_then(|i| self.units.get_mut(i))
    }

    /// Total list cost, saturating at `u32::MAX`.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.units
            .iter()
            .fold(0, |total: u32, unit| total.saturating_add(unit.cost()))
    }

    /// Plain listing of every unit, its effective stats and upgrades.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} [{}]\n", self.name, self.faction));
        for (i, unit) in self.units.iter().enumerate() {
            let stats = unit.stats();
            output.push_str(&format!(
                "  {}. {} ({}) - {} pts\n",
                i + 1,
                unit.name(),
                unit.ship(),
                unit.cost()
            ));
            output.push_str(&format!("     {}\n", stat_line(stats)));
            if unit.base() != stats {
                output.push_str(&format!("     base {}\n", stat_line(unit.base())));
            }
            for (j, upgrade) in unit.upgrades().iter().enumerate() {
                output.push_str(&format!(
                    "     {}. {} - {} pts",
                    j + 1,
                    upgrade.name(),
                    upgrade.points()
                ));
                let modifiers = upgrade.modifiers();
                if !modifiers.is_empty() {
                    output.push_str(&format!(" ({})", modifier_list(modifiers)));
                }
                output.push('\n');
            }
        }
        output.push_str(&format!("  Total: {} pts\n", self.cost()));
        output
    }
}

fn stat_line(stats: Stats) -> String {
    format!(
        "PS {}  ATK {}  AGI {}  HULL {}  SHLD {}",
        stats.skill, stats.attack, stats.agility, stats.hull, stats.shields
    )
}

/// Non-zero adjustments only, e.g. `+1 SHLD, -1 AGI`.
fn modifier_list(modifiers: Modifiers) -> String {
    [
        ("PS", modifiers.skill),
        ("ATK", modifiers.attack),
        ("AGI", modifiers.agility),
        ("HULL", modifiers.hull),
        ("SHLD", modifiers.shields),
    ]
    .into_iter()
    .filter(|(_, delta)| *delta != 0)
    .map(|(label, delta)| format!("{delta:+} {label}"))
    .collect::<Vec<_>>()
    .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LIST: &str = r#"{
        "name": "Rebel Aces",
        "faction": "rebel",
        "units": [
            {
                "name": "Wedge Antilles", "ship": "X-Wing", "points": 29,
                "skill": 9, "attack": 3, "agility": 2, "hull": 3, "shields": 2,
                "upgrades": [
                    { "name": "R2 Astromech", "points": 1 },
                    { "name": "Shield Upgrade", "points": 4, "modifiers": { "shields": 1 } }
                ]
            },
            {
                "name": "Rookie Pilot", "ship": "X-Wing", "points": 21,
                "skill": 2, "attack": 3, "agility": 2, "hull": 3, "shields": 2
            }
        ]
    }"#;

    #[test]
    fn test_parse_list() {
        let roster = Roster::from_json(LIST).unwrap();
        assert_eq!(roster.name(), "Rebel Aces");
        assert_eq!(roster.faction(), "rebel");
        assert_eq!(roster.units().len(), 2);

        let wedge = roster.unit(1).unwrap();
        assert_eq!(wedge.name(), "Wedge Antilles");
        assert_eq!(wedge.upgrades().len(), 2);
        assert_eq!(wedge.stats().shields, 3);
        assert_eq!(wedge.shields(), 3);

        let rookie = roster.unit(2).unwrap();
        assert!(rookie.upgrades().is_empty());
        assert_eq!(roster.cost(), 29 + 1 + 4 + 21);
    }

    #[test]
    fn test_cost_of_huge_list_saturates() {
        let roster = Roster::from_json(
            r#"{ "name": "Greedy", "units": [
                { "name": "a", "ship": "b", "points": 4294967295,
                  "skill": 1, "attack": 1, "agility": 1, "hull": 1, "shields": 0,
                  "upgrades": [ { "name": "c", "points": 1 } ] },
                { "name": "d", "ship": "b", "points": 7,
                  "skill": 1, "attack": 1, "agility": 1, "hull": 1, "shields": 0 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(roster.cost(), u32::MAX);
        assert!(roster.dump().contains("Total: 4294967295 pts"));
    }

    #[test]
    fn test_unit_index_is_one_based() {
        let roster = Roster::from_json(LIST).unwrap();
        assert!(roster.unit(0).is_none());
        assert!(roster.unit(3).is_none());
    }

    #[test]
    fn test_parse_rejects_missing_stats() {
        let err = Roster::from_json(r#"{ "name": "x", "units": [ { "name": "a", "ship": "b" } ] }"#)
            .unwrap_err();
        assert!(matches!(err, RosterError::Parse { .. }));
        assert!(err.to_string().contains("<inline>"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LIST.as_bytes()).unwrap();
        let roster = Roster::load(file.path()).unwrap();
        assert_eq!(roster.units().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Roster::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
    }

    #[test]
    fn test_dump_lists_units_and_upgrades() {
        let roster = Roster::from_json(LIST).unwrap();
        let dump = roster.dump();
        assert!(dump.contains("Rebel Aces [rebel]"));
        assert!(dump.contains("1. Wedge Antilles (X-Wing) - 34 pts"));
        assert!(dump.contains("     PS 9  ATK 3  AGI 2  HULL 3  SHLD 3\n"));
        assert!(dump.contains("     base PS 9  ATK 3  AGI 2  HULL 3  SHLD 2\n"));
        assert!(dump.contains("1. R2 Astromech - 1 pts\n"));
        assert!(dump.contains("2. Shield Upgrade - 4 pts (+1 SHLD)\n"));
        // Rookie has no upgrades, so no base line follows its stats.
        assert_eq!(dump.matches("base ").count(), 1);
        assert!(dump.contains("Total: 55 pts"));
    }
}
