//! List legality checks run before a game starts.

use std::fmt;

use tracing::warn;

use crate::roster::Roster;

/// Most units a roster may field; each must be addressable by one digit.
pub const MAX_UNITS: usize = 9;

/// Most upgrades a unit may carry; slot `count + 1` must stay a single digit.
pub const MAX_UPGRADES: usize = 8;

/// Standard squad point limit.
const DEFAULT_POINT_LIMIT: u32 = 100;

/// Settings for [`Roster::verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Maximum total list cost.
    pub point_limit: u32,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            point_limit: DEFAULT_POINT_LIMIT,
        }
    }
}

/// A problem found in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// The list has no units.
    Empty,
    /// More units than single-digit addressing allows.
    TooManyUnits {
        /// Units in the list.
        count: usize,
    },
    /// A unit carries more upgrades than single-digit addressing allows.
    TooManyUpgrades {
        /// 1-based unit index.
        unit: usize,
        /// Unit name.
        name: String,
        /// Upgrades fitted.
        count: usize,
    },
    /// A unit starts with no hull.
    NoHull {
        /// 1-based unit index.
        unit: usize,
        /// Unit name.
        name: String,
    },
    /// The list costs more than the limit.
    OverPointLimit {
        /// Total list cost.
        cost: u32,
        /// Configured limit.
        limit: u32,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Empty => write!(f, "list has no ships"),
            Issue::TooManyUnits { count } => {
                write!(f, "list has {count} ships (at most {MAX_UNITS})")
            }
            Issue::TooManyUpgrades { unit, name, count } => write!(
                f,
                "ship {unit} ({name}) has {count} upgrades (at most {MAX_UPGRADES})"
            ),
            Issue::NoHull { unit, name } => write!(f, "ship {unit} ({name}) has no hull"),
            Issue::OverPointLimit { cost, limit } => {
                write!(f, "list costs {cost} points (limit {limit})")
            }
        }
    }
}

impl Roster {
    /// Check the list against table rules and addressing limits.
    ///
    /// Returns every issue found; an empty vector means the list is legal.
    #[must_use]
    pub fn verify(&self, config: &VerifyConfig) -> Vec<Issue> {
        let mut issues = Vec::new();

        if self.units().is_empty() {
            issues.push(Issue::Empty);
        }
        if self.units().len() > MAX_UNITS {
            issues.push(Issue::TooManyUnits {
                count: self.units().len(),
            });
        }

        for (i, unit) in self.units().iter().enumerate() {
            if unit.upgrades().len() > MAX_UPGRADES {
                issues.push(Issue::TooManyUpgrades {
                    unit: i + 1,
                    name: unit.name().to_string(),
                    count: unit.upgrades().len(),
                });
            }
            if unit.stats().hull == 0 {
                issues.push(Issue::NoHull {
                    unit: i + 1,
                    name: unit.name().to_string(),
                });
            }
        }

        let cost = self.cost();
        if cost > config.point_limit {
            issues.push(Issue::OverPointLimit {
                cost,
                limit: config.point_limit,
            });
        }

        for issue in &issues {
            warn!(list = self.name(), %issue, "list failed verification");
        }
        issues
    }
}
