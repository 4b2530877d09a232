use thiserror::Error;

/// Errors raised by the inventory domain layer
///
/// Domain-rule violations are synchronous and non-retryable; persistence
/// failures pass through unchanged as `Repository`.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{upc} already exists in the inventory database")]
    Conflict { upc: String },

    #[error("upc {upc} does not exist in the inventory database")]
    NotFound { upc: String },

    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Errors surfaced by repository implementations
///
/// Unique-key violations are split out so the domain layer can treat a
/// write-time duplicate as an authoritative conflict signal.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db)
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                RepositoryError::UniqueViolation(db.message().to_string())
            }
            other => RepositoryError::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_error_wraps_into_domain_error() {
        let err = DomainError::from(RepositoryError::UniqueViolation("upc".to_string()));
        assert!(matches!(err, DomainError::Repository(_)));
    }

    #[test]
    fn conflict_message_names_the_upc() {
        let err = DomainError::Conflict {
            upc: "11223344".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "11223344 already exists in the inventory database"
        );
    }

    #[test]
    fn not_found_message_names_the_upc() {
        let err = DomainError::NotFound {
            upc: "16263646".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "upc 16263646 does not exist in the inventory database"
        );
    }
}
