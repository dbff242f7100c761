//! Layered error definitions
//!
//! Categorized by source: config / host / plugin

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Host Errors =====
    /// Named property unknown to the dynamics host
    #[error("dynamics property not found: '{property}'")]
    PropertyNotFound { property: String },

    /// Host query failed
    #[error("{host} query error: {message}")]
    HostQuery { host: &'static str, message: String },

    // ===== Replay Errors =====
    /// Recorded trace parse error
    #[error("trace parse error at line {line}: {message}")]
    TraceParse { line: usize, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ContractError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create property-not-found error
    pub fn property_not_found(property: impl Into<String>) -> Self {
        Self::PropertyNotFound {
            property: property.into(),
        }
    }

    /// Create host query error
    pub fn host_query(host: &'static str, message: impl Into<String>) -> Self {
        Self::HostQuery {
            host,
            message: message.into(),
        }
    }
}
