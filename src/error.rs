//! Crate-level error types.
//!
//! Per-frame stepping is infallible; only configuration I/O and validation
//! produce errors.

use std::fmt;

/// Errors produced by the flythrough crate.
#[derive(Debug)]
pub enum FlightError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but hold values the animation cannot run with.
    InvalidOptions(String),
}

impl fmt::Display for FlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
        }
    }
}

impl std::error::Error for FlightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FlightError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_and_source() {
        let io = FlightError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(io.to_string(), "I/O error: missing");
        assert!(io.source().is_some());

        let parse = FlightError::OptionsParse("bad".into());
        assert_eq!(parse.to_string(), "options parse error: bad");
        assert!(parse.source().is_none());
    }
}
