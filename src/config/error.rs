//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Swipe threshold must be a positive number of pixels")]
    InvalidSwipeThreshold,

    #[error("Export file name must be a plain file name ending in .json")]
    InvalidExportFileName,

    #[error("Contact submit delay must be at most 60000 ms")]
    InvalidSubmitDelay,

    #[error("Portfolio offsets must be non-negative")]
    InvalidPortfolioOffset,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
