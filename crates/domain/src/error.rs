//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CampusError`]
//! via `#[from]`. Adapters map the variants onto their own failure surface
//! (HTTP status codes, log lines, …).

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum CampusError {
    /// The caller supplied something unusable, or a business precondition failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No row matches the requested identifier.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The underlying store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invalid input or violated precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An identifier could not be parsed.
    #[error("Invalid {entity} id")]
    InvalidId {
        entity: &'static str,
        value: String,
    },

    /// The point balance does not cover the requested debit.
    #[error("Insufficient points")]
    InsufficientPoints { required: i64, available: i64 },

    /// A donation amount below zero.
    #[error("Invalid amount: {0}")]
    NegativeAmount(i64),

    /// A request body that is not the expected JSON shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// A lookup found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
