//! Error types for payroute-core.
//!
//! Absence is not an error here: a missing branch from a lookup or an
//! unreachable destination is reported as `Option::None` by the query
//! APIs, never through this enum.

use thiserror::Error;

/// Core error types.
#[derive(Error, Debug)]
pub enum Error {
    /// A branch with this name is already registered.
    #[error("Branch '{0}' already exists")]
    BranchExists(String),

    /// The named branch is not registered.
    #[error("Branch '{0}' does not exist")]
    BranchNotFound(String),

    /// The branch name is empty or whitespace-only.
    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    /// Network configuration could not be loaded or applied.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
