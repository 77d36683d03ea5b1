use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                return DomainError::DuplicateSlugOnPersist(db_err.message().to_string());
            }
            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Failures of a read used as a namespace existence check.
pub fn map_exists_check(err: sqlx::Error) -> DomainError {
    DomainError::ExistsCheck(err.to_string())
}
