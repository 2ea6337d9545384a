//! Interactive session loop.
//!
//! Reads one line at a time, hands it to the interpreter, and redraws the
//! status cards whenever the interpreter reports a change. A line is fully
//! applied before any redraw starts.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use crate::card::CardWriter;
use crate::error::{CardError, SessionError};
use crate::interpreter::{Outcome, interpret};
use crate::roster::Fleet;

/// Default prompt shown before each line.
pub const DEFAULT_PROMPT: &str = "xhud> ";

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Text printed before reading each line.
    pub prompt: String,
    /// Card files for player 1 and player 2.
    pub card_paths: [PathBuf; 2],
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            card_paths: [PathBuf::from("p1.txt"), PathBuf::from("p2.txt")],
        }
    }
}

/// Something that regenerates output from the fleet after a change.
pub trait Redraw {
    /// Regenerate from the current fleet state.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn redraw(&mut self, fleet: &Fleet) -> Result<(), CardError>;
}

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines read, including the quit line.
    pub lines: usize,
    /// Redraws performed, including the initial one.
    pub redraws: usize,
}

/// One game in progress.
#[derive(Debug)]
pub struct Session<D> {
    fleet: Fleet,
    renderer: D,
    prompt: String,
}

impl Session<CardWriter> {
    /// Session writing cards to the configured paths.
    #[must_use]
    pub fn from_config(fleet: Fleet, config: SessionConfig) -> Self {
        Self::new(fleet, CardWriter::new(config.card_paths), config.prompt)
    }
}

impl<D: Redraw> Session<D> {
    /// Session with a custom renderer.
    #[must_use]
    pub fn new(fleet: Fleet, renderer: D, prompt: impl Into<String>) -> Self {
        Self {
            fleet,
            renderer,
            prompt: prompt.into(),
        }
    }

    /// Current fleet state.
    #[must_use]
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// The renderer driven by this session.
    #[must_use]
    pub fn renderer(&self) -> &D {
        &self.renderer
    }

    /// Run until `qqq` or end of input.
    ///
    /// Cards are drawn once before the first prompt. Input is read as bytes;
    /// a line that is not valid UTF-8 is interpreted lossily rather than
    /// ending the session.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal I/O fails or a redraw fails.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<SessionSummary, SessionError>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = SessionSummary::default();
        self.draw(&mut summary)?;

        let mut buffer = Vec::new();
        loop {
            output.write_all(self.prompt.as_bytes())?;
            output.flush()?;

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                writeln!(output)?;
                info!("end of input");
                break;
            }
            // Bytes that are not UTF-8 become U+FFFD and fail the grammar like any other junk.
            let text = String::from_utf8_lossy(&buffer);
            let line = text.trim_end_matches(['\n', '\r']);
            summary.lines += 1;
            debug!(line, "read line");

            let outcome = interpret(line, &mut self.fleet, &mut output)?;
            if let Outcome::Line(report) = &outcome
                && let Some(diagnostic) = report.aborted
            {
                warn!(line, %diagnostic, "line abandoned");
            }
            if outcome.is_quit() {
                info!(lines = summary.lines, "quit");
                break;
            }
            if outcome.redraw() {
                self.draw(&mut summary)?;
            }
        }

        Ok(summary)
    }

    fn draw(&mut self, summary: &mut SessionSummary) -> Result<(), SessionError> {
        if let Err(err) = self.renderer.redraw(&self.fleet) {
            error!(%err, "redraw failed");
            return Err(err.into());
        }
        summary.redraws += 1;
        Ok(())
    }
}
