//! Error types for pi estimation.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate, from configuration validation through worker
//! pool construction to benchmark output.
//!
//! ## Design notes
//!
//! * **Fail-fast**: Configuration errors are raised before any work begins.
//! * **Fatal I/O**: Output failures abort the whole run, never degrade to partial output.
//! * **No retries**: Every variant is terminal for the run that produced it.
//!
//! ## Non-goals
//!
//! * This module does not format diagnostics for the terminal (handled by the binary).

use std::io;

/// Errors that can occur while configuring or running a pi estimation.
#[derive(Debug, thiserror::Error)]
pub enum PiError {
    /// A run parameter is out of range (zero workers, zero steps, ...).
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfiguration {
        field: &'static str,
        message: String,
    },

    /// The worker pool or its per-worker tables could not be allocated.
    #[error("Failed to start {workers} workers: {message}")]
    ResourceExhaustion { workers: usize, message: String },

    /// The benchmark output destination could not be opened or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A record could not be serialised to CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input could not be parsed into run parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Writing results or progress to an output stream failed.
    #[error("Output error: {0}")]
    Output(#[source] io::Error),
}

impl PiError {
    pub(crate) fn invalid_configuration(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn resource_exhaustion(workers: usize, message: impl ToString) -> Self {
        Self::ResourceExhaustion {
            workers,
            message: message.to_string(),
        }
    }

    /// Whether the error was raised before any computation started.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. } | Self::InvalidInput(_))
    }
}
