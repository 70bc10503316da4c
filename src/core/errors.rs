//! Service error taxonomy

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required field was missing or empty.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// A uniqueness constraint rejected the write.
    #[error("{0}")]
    Conflict(String),
    /// Any other storage failure, reported verbatim.
    #[error("{0}")]
    Storage(sqlx::Error),
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                ServiceError::Conflict(db_err.message().to_owned())
            }
            _ => ServiceError::Storage(err),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
