//! BIAIA Core - Shared configuration and runtime plumbing
//!
//! Holds the pieces every BIAIA service needs before it can do anything
//! useful: centralized configuration, the top-level error type, and the
//! tracing setup used by the CLI.

pub mod config;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::{BiaiaConfig, PlacesConfig, ServerConfig};
pub use tracing_setup::{CliLogLevel, init_tracing};

/// Errors that can bubble up to the process boundary.
#[derive(Debug, thiserror::Error)]
pub enum BiaiaError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("Server error: {reason}")]
    Server { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BiaiaError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            BiaiaError::Configuration { reason } => format!("Invalid configuration: {reason}"),
            BiaiaError::Server { .. } => "The web server stopped unexpectedly".to_string(),
            BiaiaError::Io(_) => "File system or network error occurred".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BiaiaError>;
