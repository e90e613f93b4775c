use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerServiceError>;

#[derive(Error, Debug)]
pub enum LedgerServiceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for LedgerServiceError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(json!({
            "error": {
                "code": status_code.as_u16(),
                "message": error_message,
                "type": self.error_type()
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            LedgerServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LedgerServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            LedgerServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl LedgerServiceError {
    fn error_type(&self) -> &str {
        match self {
            LedgerServiceError::Database(_) => "database_error",
            LedgerServiceError::Validation(_) => "validation_error",
            LedgerServiceError::Internal(_) => "internal_error",
        }
    }
}
