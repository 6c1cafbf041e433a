//! Domain-level error types.

use thiserror::Error;

/// Domain errors - expected failures of store and query operations.
///
/// These are the only error kinds the core ever surfaces for misuse; the
/// transport boundary maps `Validation` to 400 and `NotFound` to 404. An
/// operation either fully succeeds or fails with one of these, leaving the
/// collection untouched.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post with id {0} not found.")]
    NotFound(u64),

    #[error("{0}")]
    Validation(String),
}
