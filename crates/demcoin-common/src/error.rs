//! Error types for the DemCoin simulator
//!
//! Provides a unified error type and the configuration validation variants

use thiserror::Error;

/// Result type alias using DemcoinError
pub type Result<T> = std::result::Result<T, DemcoinError>;

/// Unified error type for DemCoin operations
#[derive(Debug, Error)]
pub enum DemcoinError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Population size must be positive")]
    EmptyPopulation,

    #[error("Parameter {name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Parameter {name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("Agent id mismatch at position {position}: expected {expected}, got {actual}")]
    AgentIdMismatch {
        position: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Parameter grid has no candidates for {0}")]
    EmptyGrid(&'static str),
}
