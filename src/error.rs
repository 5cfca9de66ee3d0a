//! Crate-level error types.

use std::fmt;

/// Errors produced by the cursor-trail crate.
///
/// The animator itself never fails; these cover the configuration and
/// replay surfaces around it.
#[derive(Debug)]
pub enum TrailError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Replay script could not be parsed.
    ScriptParse(String),
    /// Failed to encode or write replay output.
    Output(String),
}

impl fmt::Display for TrailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ScriptParse(msg) => {
                write!(f, "replay script parse error: {msg}")
            }
            Self::Output(msg) => write!(f, "output error: {msg}"),
        }
    }
}

impl std::error::Error for TrailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrailError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
