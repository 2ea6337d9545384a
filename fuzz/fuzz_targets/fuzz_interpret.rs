#![no_main]

//! Command interpreter fuzzer.
//!
//! Feeds arbitrary lines to the interpreter against rosters of arbitrary
//! shape and checks that:
//! 1. Nothing panics, whatever the roster size
//! 2. Counters stay within [0, max]
//! 3. Redraw is only requested for lines that applied something and did not abort

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use xhud::roster::{Modifiers, Stats};
use xhud::{Fleet, Outcome, Player, Roster, Unit, Upgrade, interpret};

/// Shape of one fuzzer-generated unit.
#[derive(Arbitrary, Debug)]
struct FuzzUnit {
    hull: u8,
    shields: u8,
    hull_mod: i8,
    shield_mod: i8,
    upgrades: u8,
}

/// Structured input for interpreter fuzzing.
#[derive(Arbitrary, Debug)]
struct InterpretInput {
    /// Units for each player (capped to keep runs fast).
    rosters: [Vec<FuzzUnit>; 2],
    /// Lines typed by the moderator.
    lines: Vec<String>,
}

fn build(units: &[FuzzUnit]) -> Roster {
    let units = units
        .iter()
        .take(12)
        .enumerate()
        .map(|(i, u)| {
            let upgrades = (0..u.upgrades % 10)
                .map(|j| {
                    let modifiers = if j == 0 {
                        Modifiers {
                            hull: u.hull_mod,
                            shields: u.shield_mod,
                            ..Modifiers::default()
                        }
                    } else {
                        Modifiers::default()
                    };
                    Upgrade::new(format!("upgrade {j}"), 0, modifiers)
                })
                .collect();
            Unit::new(
                format!("unit {i}"),
                "fuzz",
                0,
                Stats {
                    skill: 0,
                    attack: 0,
                    agility: 0,
                    hull: u.hull,
                    shields: u.shields,
                },
                upgrades,
            )
        })
        .collect();
    Roster::new("fuzz", "", units)
}

fuzz_target!(|input: InterpretInput| {
    let [first, second] = &input.rosters;
    let mut fleet = Fleet::new(build(first), build(second));

    for line in input.lines.iter().take(64) {
        let mut out = Vec::new();
        let outcome = match interpret(line, &mut fleet, &mut out) {
            Ok(outcome) => outcome,
            Err(_) => return,
        };

        if let Outcome::Line(report) = &outcome {
            assert_eq!(
                outcome.redraw(),
                report.aborted.is_none() && !report.applied.is_empty()
            );
        } else {
            assert!(!outcome.redraw());
        }

        for player in Player::ALL {
            for unit in fleet.roster(player).units() {
                let stats = unit.stats();
                assert!(unit.shields() <= stats.shields);
                assert!(unit.hull() <= stats.hull);
            }
        }
    }
});
