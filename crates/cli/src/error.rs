//! Error types for CLI operations.

use contracts::ContractError;
use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file not found
    #[error("{kind} file not found: {path}")]
    FileNotFound { kind: &'static str, path: String },

    /// Invalid command-line value
    #[error("invalid argument '{arg}': {message}")]
    InvalidArgument { arg: &'static str, message: String },

    /// Plugin, host or config error
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Record output error
    #[error("failed to write record: {0}")]
    Output(#[from] std::io::Error),

    /// Record serialization error
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    pub fn file_not_found(kind: &'static str, path: &std::path::Path) -> Self {
        Self::FileNotFound {
            kind,
            path: path.display().to_string(),
        }
    }

    pub fn invalid_argument(arg: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            message: message.into(),
        }
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_messages() {
        let err = CliError::file_not_found("trace", Path::new("flight.jsonl"));
        assert_eq!(err.to_string(), "trace file not found: flight.jsonl");

        let err: CliError = ContractError::property_not_found("position/lat-geod-deg").into();
        assert_eq!(
            err.to_string(),
            "dynamics property not found: 'position/lat-geod-deg'"
        );
    }
}
