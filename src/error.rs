//! Error types for roster loading, roster access and card output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::roster::Player;

/// Failure to load a roster list.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The list file could not be read.
    #[error("failed to read list '{}': {source}", .path.display())]
    Io {
        /// Path of the list file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The list file is not a valid roster document.
    #[error("failed to parse list '{origin}': {source}")]
    Parse {
        /// Where the document came from (a path, or `<inline>`).
        origin: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// A roster mutator was handed an index the roster does not have.
///
/// The interpreter validates indices before dispatching, so in a running
/// session this only happens for the phantom upgrade slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No unit at this 1-based index.
    #[error("player {player} has no ship {unit}")]
    NoSuchUnit {
        /// Owning player.
        player: Player,
        /// Requested unit index.
        unit: usize,
    },
    /// No upgrade at this 1-based index.
    #[error("player {player} ship {unit} has no upgrade {upgrade}")]
    NoSuchUpgrade {
        /// Owning player.
        player: Player,
        /// Unit index.
        unit: usize,
        /// Requested upgrade index.
        upgrade: usize,
    },
}

/// Failure to write a status card.
#[derive(Debug, Error)]
#[error("failed to write card '{}': {source}", .path.display())]
pub struct CardError {
    /// Destination of the card.
    pub path: PathBuf,
    /// Underlying I/O error.
    pub source: io::Error,
}

/// Failure while running an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    /// A status card could not be redrawn.
    #[error(transparent)]
    Card(#[from] CardError),
}
