//! Error types for the crate.

use thiserror::Error;

/// Crate error type.
#[derive(Error, Debug)]
pub enum Error {
    /// A string key did not name any variant of a style table.
    #[error("unknown {kind} key: {key:?}")]
    UnknownKey {
        /// Which table was consulted, e.g. `"progress color"`.
        kind: &'static str,
        /// The key as supplied.
        key: String,
    },

    /// Command-line arguments were rejected, or `--help`/`--version` was requested.
    #[error("{0}")]
    Cli(#[from] clap::Error),

    /// Configuration could not be assembled or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Writing rendered output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
