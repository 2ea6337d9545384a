// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! xhud: a terminal status tracker for two-player miniatures games.
//!
//! The moderator types compact positional commands (`13s`, `231e`,
//! `11h 12h`) that mutate the shields, hull and status of units in two
//! rosters. After every accepted change both players' status cards are
//! regenerated.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Session loop  ──redraw──▶  Cards  │
//! ├─────────────────────────────────────┤
//! │       Command interpreter           │
//! ├─────────────────────────────────────┤
//! │   Roster model (RosterAccess)       │
//! └─────────────────────────────────────┘
//! ```

pub mod card;
pub mod error;
pub mod interpreter;
pub mod roster;
pub mod session;

pub use error::{AccessError, CardError, RosterError, SessionError};

// Re-export key types at crate root for convenience
pub use interpreter::{Diagnostic, LineReport, Outcome, Target, interpret};
pub use roster::{Fleet, Player, Roster, RosterAccess, RosterView, Unit, Upgrade};
pub use session::{Redraw, Session, SessionConfig};
