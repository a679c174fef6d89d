use crate::types::EntityId;

/// Domain-level error taxonomy.
///
/// `NotFound` is the only variant callers are expected to branch on (the HTTP
/// boundary maps it to 404). Storage failures surface as `Internal`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience alias used throughout the repository traits and services.
pub type CoreResult<T> = Result<T, CoreError>;
