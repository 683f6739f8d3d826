use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Malformed input reaching a layer that does not coerce, e.g. a page
    /// size of zero handed straight to the executor.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        DomainError::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }

    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        match self {
            DomainError::Database(msg) => {
                let msg = msg.to_ascii_lowercase();
                msg.contains("connection") || msg.contains("pool timed out") || msg.contains("locked")
            }
            _ => false,
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        let msg = e.to_string();
        if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key") {
            return DomainError::Conflict(msg);
        }
        // Deleting a row that other rows still reference.
        if msg.contains("FOREIGN KEY constraint failed") || msg.contains("violates foreign key") {
            return DomainError::Conflict(msg);
        }
        DomainError::Database(msg)
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
