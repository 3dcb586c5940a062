use thiserror::Error;

/// Failure taxonomy for catalog operations.
///
/// The view pipeline (`view/`) never produces these: it operates on
/// already-validated in-memory data and degrades to empty results instead.
/// Only the catalog boundary and mutation dispatch can fail.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport-level failure: unreachable host, timeout, connection reset.
    #[error("Network error: {0}")]
    Network(String),

    /// The remote rejected the payload shape or values.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Stale id: the product no longer exists on the remote.
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
