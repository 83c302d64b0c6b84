//! Unified error type for the triled-lib crate.
//!
//! [`TriledError`] wraps the sink's module error (`SinkError`) and the
//! domain-specific error kinds (`UnsupportedKind`, `Config`, `Color`).
//! `From` impls allow `?` to propagate across module boundaries.

use std::fmt;

use crate::light::LightKind;
use crate::sink::SinkError;

/// Unified error type for triled-lib operations.
#[derive(Debug)]
pub enum TriledError {
    /// Channel sink error (construction-time unavailability or a failed write).
    Sink(SinkError),
    /// Request named a light kind this service does not handle.
    UnsupportedKind(LightKind),
    /// Standard I/O error (config file read).
    Io(std::io::Error),
    /// Configuration parse/validation error.
    Config(String),
    /// Malformed inbound request (unknown kind or flash mode name).
    Request(String),
    /// Color parsing error.
    Color(String),
}

impl fmt::Display for TriledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriledError::Sink(e) => write!(f, "{e}"),
            TriledError::UnsupportedKind(kind) => {
                write!(f, "Unsupported light kind: {kind}")
            }
            TriledError::Io(e) => write!(f, "I/O error: {e}"),
            TriledError::Config(e) => write!(f, "Config error: {e}"),
            TriledError::Request(e) => write!(f, "Request error: {e}"),
            TriledError::Color(e) => write!(f, "Color error: {e}"),
        }
    }
}

impl std::error::Error for TriledError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TriledError::Sink(e) => Some(e),
            TriledError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SinkError> for TriledError {
    fn from(e: SinkError) -> Self {
        TriledError::Sink(e)
    }
}

impl From<std::io::Error> for TriledError {
    fn from(e: std::io::Error) -> Self {
        TriledError::Io(e)
    }
}

/// Crate-level Result alias using [`TriledError`].
pub type Result<T> = std::result::Result<T, TriledError>;
