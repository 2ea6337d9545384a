//! CLI command implementations for xhud.

pub(crate) mod check;
pub(crate) mod dump;
pub(crate) mod generate;
pub(crate) mod run;

use std::error::Error;
use std::fmt;
use std::path::Path;

use xhud::Roster;

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<xhud::RosterError> for CliError {
    fn from(e: xhud::RosterError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<xhud::CardError> for CliError {
    fn from(e: xhud::CardError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<xhud::SessionError> for CliError {
    fn from(e: xhud::SessionError) -> Self {
        Self::new(e.to_string())
    }
}

/// Load a list, failing early with a short message if the file is missing.
fn load_list(path: &Path) -> Result<Roster, CliError> {
    if !path.exists() {
        return Err(CliError::new(format!(
            "list not found - '{}'",
            path.display()
        )));
    }
    Ok(Roster::load(path)?)
}
