//! Error types for health-check configuration resolution

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DynamicHealthCheckError>;

#[derive(Error, Debug)]
pub enum DynamicHealthCheckError {
    /// Raised for an unregistered or mismatched context shape, and for lookups
    /// that match no configured entry. Callers treat it as fatal for the probe.
    #[error("The type {kind} has not been well configured.")]
    ConfigurationMismatch { kind: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl DynamicHealthCheckError {
    pub fn mismatch(kind: impl Into<String>) -> Self {
        DynamicHealthCheckError::ConfigurationMismatch { kind: kind.into() }
    }

    pub fn is_configuration_mismatch(&self) -> bool {
        matches!(self, DynamicHealthCheckError::ConfigurationMismatch { .. })
    }
}
