//! Error types for godzilla
//!
//! Every error is terminal: nothing is retried, the run stops and the process
//! exits with a non-zero status.

use std::io;
use thiserror::Error;

use crate::pattern::Slot;

/// Semantic validation failure of a generation configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("charset is empty - give a non-empty string to -s or pick a named charset with -c")]
    EmptyCharset,

    #[error("{which} length must be at least 1 (got 0)")]
    ZeroLength { which: &'static str },

    #[error("minimum length ({min}) cannot be greater than maximum length ({max})")]
    MinExceedsMax { min: usize, max: usize },

    #[error("pattern length ({len}) must equal the minimum length ({min}) for lengths {min}-{max}")]
    PatternLength { len: usize, min: usize, max: usize },

    #[error("pattern character '{ch}' at position {position} is not in the charset")]
    LiteralNotInCharset { ch: char, position: usize },

    #[error("pattern placeholder {slot} at position {position} matches no character of the charset")]
    EmptySlot { slot: Slot, position: usize },
}

/// Top-level error for a generation run
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Write error on {target}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl GenError {
    /// Create a write error for the given output target
    pub fn write(target: impl Into<String>, source: io::Error) -> Self {
        Self::Write {
            target: target.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages_name_the_value() {
        let err = ConfigError::MinExceedsMax { min: 5, max: 3 };
        assert!(err.to_string().contains("(5)"));
        assert!(err.to_string().contains("(3)"));

        let err = ConfigError::LiteralNotInCharset { ch: 'x', position: 2 };
        assert!(err.to_string().contains("'x'"));

        let err = ConfigError::EmptySlot { slot: Slot::Digit, position: 0 };
        assert!(err.to_string().contains("','"));
        assert!(err.to_string().contains("digit"));
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error as _;

        let err = GenError::write("stdout", io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "Write error on stdout");
        assert!(err.source().unwrap().to_string().contains("pipe closed"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: GenError = ConfigError::EmptyCharset.into();
        assert!(matches!(err, GenError::Configuration(ConfigError::EmptyCharset)));
    }
}
