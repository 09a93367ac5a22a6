//! Error types for schema configuration and file reading.

use thiserror::Error;

/// A width schema that cannot be used.
///
/// Configuration errors are fatal at parser construction time; per-line
/// conditions (no matching schema, short lines) never produce an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The field width list has no entries.
    #[error("field width list is empty")]
    EmptySpec,

    /// A width entry is zero, which is neither a keep nor a skip.
    #[error("field width at index {index} is zero")]
    ZeroWidth { index: usize },

    /// A schema table with no entries can never match a line.
    #[error("schema table is empty")]
    EmptyTable,

    /// The chunked reader was asked for zero-length records.
    #[error("chunk record length must be at least 1")]
    ZeroChunkLength,
}

/// Errors from the file-reading convenience methods.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(ConfigError::EmptySpec.to_string(), "field width list is empty");
        assert_eq!(
            ConfigError::ZeroWidth { index: 2 }.to_string(),
            "field width at index 2 is zero"
        );
    }

    #[test]
    fn test_parse_error_wraps_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ParseError::from(io);
        assert!(err.to_string().starts_with("i/o error:"));
    }
}
