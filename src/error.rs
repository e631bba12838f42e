//! Error kinds for a run.

use thiserror::Error;

/// Failure kinds for a single invocation. Every variant is terminal;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// No AWS region could be resolved from the environment.
    #[error("no AWS region configured")]
    MissingRegion,

    /// The DescribeInstances call failed.
    #[error("failed to describe EC2 instances: {0}")]
    DescribeInstances(String),
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
