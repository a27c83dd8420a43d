#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup with a valid key matched no rows.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// Client input with a bad shape or type.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A resource, category or column name outside its allow-list.
    #[error("Not allowed: {0}")]
    NotAllowed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
