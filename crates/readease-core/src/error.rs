//! Error types for readease-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised at the simplifier boundary.
///
/// The restructuring and scoring functions are total; only the external
/// simplification step can fail.
#[derive(Error, Debug)]
pub enum SimplifyError {
    /// The simplifier program could not be started.
    #[error("failed to start simplifier `{program}`: {source}")]
    Spawn {
        /// Program that was launched.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the input text to the simplifier failed.
    #[error("failed to send text to simplifier `{program}`: {source}")]
    Stdin {
        /// Program that was launched.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The simplifier exited unsuccessfully.
    #[error("simplifier `{program}` exited with {status}: {stderr}")]
    Failed {
        /// Program that was launched.
        program: String,
        /// Exit status description.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The simplifier produced output that is not UTF-8.
    #[error("simplifier `{program}` produced invalid UTF-8")]
    InvalidUtf8 {
        /// Program that was launched.
        program: String,
    },
}

/// Result type alias using [`SimplifyError`].
pub type SimplifyResult<T> = Result<T, SimplifyError>;
