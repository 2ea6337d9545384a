//! End-to-end session tests: list files in, card files out.
//!
//! Run with: cargo test --test session

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use xhud::{Fleet, Roster, Session, SessionConfig};

fn list_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("lists")
        .join(format!("{name}.json"))
}

fn fleet() -> Fleet {
    Fleet::new(
        Roster::load(&list_path("rebel_aces")).unwrap(),
        Roster::load(&list_path("imperial_swarm")).unwrap(),
    )
}

fn config(dir: &Path) -> SessionConfig {
    SessionConfig {
        card_paths: [dir.join("p1.txt"), dir.join("p2.txt")],
        ..SessionConfig::default()
    }
}

#[test]
fn test_cards_written_before_first_command() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::from_config(fleet(), config(dir.path()));

    let summary = session.run(Cursor::new("qqq\n"), Vec::new()).unwrap();

    assert_eq!(summary.redraws, 1);
    let p1 = fs::read_to_string(dir.path().join("p1.txt")).unwrap();
    let p2 = fs::read_to_string(dir.path().join("p2.txt")).unwrap();
    assert!(p1.starts_with("==== Rebel Aces ===="));
    assert!(p1.contains("3. Keyan Farlander (B-Wing)"));
    assert!(p2.starts_with("==== Imperial Swarm ===="));
    assert!(p2.contains("HULL [####] 4/4"));
}

#[test]
fn test_cards_follow_commands() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::from_config(fleet(), config(dir.path()));
    let mut output = Vec::new();

    let script = "13ss 21hhh\n221e\n12e\nqqq\n";
    let summary = session.run(Cursor::new(script), &mut output).unwrap();

    assert_eq!(summary.lines, 4);
    assert_eq!(summary.redraws, 4);

    let p1 = fs::read_to_string(dir.path().join("p1.txt")).unwrap();
    let p2 = fs::read_to_string(dir.path().join("p2.txt")).unwrap();
    assert!(p1.contains("SHLD [####--] 4/6"));
    assert!(p1.contains("   DISABLED\n"));
    assert!(p2.contains("1. Howlrunner (TIE Fighter)"));
    assert!(p2.contains("   DESTROYED\n"));
    assert!(p2.contains("1. Crack Shot (disabled)"));

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("  Player 2 - Ship 2 (Black Squadron Pilot) - Upgrade 1 (Crack Shot) - Disabled"));
}

#[test]
fn test_phantom_upgrade_slot_does_not_redraw() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::from_config(fleet(), config(dir.path()));
    let mut output = Vec::new();

    // Ship 3 has no upgrades, so slot 1 is accepted by the grammar but refused.
    let summary = session.run(Cursor::new("231e\nqqq\n"), &mut output).unwrap();

    assert_eq!(summary.redraws, 1);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("  player 2 ship 3 has no upgrade 1"));
}

#[test]
fn test_rejected_line_leaves_cards_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::from_config(fleet(), config(dir.path()));
    let mut output = Vec::new();

    let summary = session
        .run(Cursor::new("?\n7\n1x\nqqq\n"), &mut output)
        .unwrap();

    assert_eq!(summary.redraws, 1);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Commands:"));
    assert!(text.contains("Invalid player"));
    assert!(text.contains("Invalid ship"));
}
