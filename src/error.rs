use rusqlite;
use thiserror::Error;
use tracing::{error, warn};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage error: {message}")]
    Storage { message: String },

    #[error("record not found")]
    NotFound,

    #[error("conflict: {message}")]
    Conflict { message: String },

    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, "validation error");
        AppError::Validation { message }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::conflict", %message, "conflict error");
        AppError::Conflict { message }
    }

    pub fn not_found() -> Self {
        warn!(target: "app::store", "resource not found");
        AppError::NotFound
    }

    pub fn storage(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::store", %message, "storage error");
        AppError::Storage { message }
    }

    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::other", %message, "other error");
        AppError::Other(message)
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(error: rusqlite::Error) -> Self {
        use rusqlite::Error::{QueryReturnedNoRows, SqliteFailure};
        use rusqlite::ErrorCode;

        match &error {
            QueryReturnedNoRows => AppError::not_found(),
            SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation => {
                AppError::conflict("unique or constraint violation")
            }
            _ => {
                error!(target: "app::store", error = ?error, "sqlite error");
                AppError::storage(error.to_string())
            }
        }
    }
}
