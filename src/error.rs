//! Crate-level error types.

use std::fmt;

/// Which end of the beam an anchor element sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorRole {
    /// The element the beam starts from.
    From,
    /// The element the beam travels to.
    To,
}

impl fmt::Display for AnchorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => f.write_str("from"),
            Self::To => f.write_str("to"),
        }
    }
}

/// Errors produced by the connection-beam crate.
#[derive(Debug)]
pub enum BeamError {
    /// An anchor element was never provided. Fatal, not retried.
    MissingAnchor(AnchorRole),
    /// A gradient keyframe string is not of the form `<number>%`.
    InvalidPercentage(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for BeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAnchor(role) => {
                write!(f, "missing `{role}` anchor element")
            }
            Self::InvalidPercentage(value) => {
                write!(f, "invalid percentage value: {value:?}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for BeamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BeamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
