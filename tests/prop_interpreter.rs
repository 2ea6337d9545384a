//! Property-based tests for the command interpreter.
//!
//! These tests verify that arbitrary moderator input never panics, never
//! pushes a counter outside its bounds, and never ends a session early.
//! Run with: cargo test --release prop_interpreter

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use xhud::error::CardError;
use xhud::roster::{Modifiers, Stats};
use xhud::session::DEFAULT_PROMPT;
use xhud::{Fleet, Outcome, Player, Redraw, Roster, Session, Unit, Upgrade, interpret};

fn unit(name: &str, hull: u8, shields: u8, upgrades: usize) -> Unit {
    let upgrades = (0..upgrades)
        .map(|i| Upgrade::new(format!("{name} upgrade {i}"), 1, Modifiers::default()))
        .collect();
    Unit::new(
        name,
        "Test Ship",
        10,
        Stats {
            skill: 1,
            attack: 2,
            agility: 2,
            hull,
            shields,
        },
        upgrades,
    )
}

fn fleet() -> Fleet {
    Fleet::new(
        Roster::new(
            "First",
            "",
            vec![unit("A", 3, 2, 0), unit("B", 4, 4, 2), unit("C", 8, 1, 1)],
        ),
        Roster::new("Second", "", vec![unit("D", 3, 0, 3), unit("E", 2, 3, 0)]),
    )
}

fn assert_in_bounds(fleet: &Fleet) {
    for player in Player::ALL {
        for unit in fleet.roster(player).units() {
            let stats = unit.stats();
            assert!(unit.shields() <= stats.shields, "{} shields", unit.name());
            assert!(unit.hull() <= stats.hull, "{} hull", unit.name());
        }
    }
}

/// Renderer that draws nothing.
struct NoCards;

impl Redraw for NoCards {
    fn redraw(&mut self, _fleet: &Fleet) -> Result<(), CardError> {
        Ok(())
    }
}

/// Lines the session should read before stopping: up to the first `qqq`, or all of them.
fn expected_lines(input: &[u8]) -> usize {
    let mut count = 0;
    for segment in input.split_inclusive(|&b| b == b'\n') {
        count += 1;
        if String::from_utf8_lossy(segment).trim_end_matches(['\n', '\r']) == "qqq" {
            break;
        }
    }
    count
}

/// Raw input lines: mostly arbitrary bytes, sometimes the quit command.
fn raw_line() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        8 => prop::collection::vec(any::<u8>(), 0..16),
        1 => Just(b"qqq".to_vec()),
    ]
}

/// Characters the grammar cares about, plus a few it does not.
fn command_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '0', '1', '2', '3', '4', '5', '9', 's', 'S', 'h', 'H', 'e', 'E', ' ', 'x', 'q', '?',
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Any string is handled without panicking.
    #[test]
    fn prop_arbitrary_line_no_panic(line in ".{0,40}") {
        let mut fleet = fleet();
        let mut out = Vec::new();
        let outcome = interpret(&line, &mut fleet, &mut out).unwrap();
        if line != "qqq" {
            prop_assert!(!outcome.is_quit());
        }
        assert_in_bounds(&fleet);
    }

    /// Sequences of grammar-shaped lines keep every counter within [0, max].
    #[test]
    fn prop_counters_stay_in_bounds(
        lines in prop::collection::vec(prop::collection::vec(command_char(), 0..16), 1..20)
    ) {
        let mut fleet = fleet();
        for chars in lines {
            let line: String = chars.into_iter().collect();
            let mut out = Vec::new();
            interpret(&line, &mut fleet, &mut out).unwrap();
            assert_in_bounds(&fleet);
        }
    }

    /// Redraw is requested exactly when something applied and nothing aborted.
    #[test]
    fn prop_redraw_matches_report(chars in prop::collection::vec(command_char(), 0..24)) {
        let line: String = chars.into_iter().collect();
        let mut fleet = fleet();
        let mut out = Vec::new();
        let outcome = interpret(&line, &mut fleet, &mut out).unwrap();
        match &outcome {
            Outcome::Line(report) => {
                prop_assert_eq!(
                    outcome.redraw(),
                    report.aborted.is_none() && !report.applied.is_empty()
                );
                // One output line per applied or skipped action, plus the diagnostic.
                let expected = report.applied.len()
                    + report.skipped.len()
                    + usize::from(report.aborted.is_some());
                let text = String::from_utf8(out).unwrap();
                prop_assert_eq!(text.lines().count(), expected);
            }
            Outcome::Help | Outcome::Quit => prop_assert!(!outcome.redraw()),
        }
    }

    /// A well-formed single target with one letter always applies one mutation.
    #[test]
    fn prop_valid_target_applies_once(
        player in 1u8..=2,
        unit_seed in any::<usize>(),
        letter in prop::sample::select(vec!['s', 'S', 'h', 'H', 'e', 'E']),
    ) {
        let mut fleet = fleet();
        let count = fleet.roster(if player == 1 { Player::One } else { Player::Two }).units().len();
        let unit = unit_seed % count + 1;
        let line = format!("{player}{unit}{letter}");
        let mut out = Vec::new();
        let outcome = interpret(&line, &mut fleet, &mut out).unwrap();
        let Outcome::Line(report) = outcome else {
            panic!("expected a grammar line");
        };
        prop_assert_eq!(report.applied.len(), 1);
        prop_assert!(report.changed());
    }

    /// Arbitrary bytes through the session only stop it at `qqq` or end of input.
    #[test]
    fn prop_session_survives_arbitrary_bytes(lines in prop::collection::vec(raw_line(), 0..12)) {
        let input = lines.join(&b'\n');
        let mut session = Session::new(fleet(), NoCards, DEFAULT_PROMPT);
        let mut out = Vec::new();
        let summary = session.run(input.as_slice(), &mut out).unwrap();
        prop_assert_eq!(summary.lines, expected_lines(&input));
        assert_in_bounds(session.fleet());
    }
}
