use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }

    /// Whether this error should surface as a client-side validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Model(models::errors::ModelError::Validation(_)))
    }
}
