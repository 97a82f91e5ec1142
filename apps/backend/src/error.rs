use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::errors::{DomainError, ErrorCode};
use crate::request_ctx;

/// Error body returned to JSON clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BadRequest { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Message shown to the client.
    pub fn detail(&self) -> &str {
        match self {
            AppError::BadRequest { detail, .. } => detail,
            AppError::NotFound { detail, .. } => detail,
            AppError::Internal { detail, .. } => detail,
            AppError::Config { detail } => detail,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Internal {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidFormat(detail) => {
                AppError::bad_request(ErrorCode::InvalidDeckId, detail)
            }
            DomainError::NotFound(kind, detail) => AppError::not_found(kind.into(), detail),
            DomainError::Internal(_, detail) => AppError::internal(ErrorCode::DbError, detail),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::internal(ErrorCode::DbError, format!("db error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = request_ctx::trace_id();

        if status.is_server_error() {
            error!(status = status.as_u16(), code = %self.code(), error = %self, "Returning error");
        } else {
            debug!(status = status.as_u16(), code = %self.code(), error = %self, "Returning error");
        }

        let mut builder = HttpResponse::build(status);
        builder.insert_header(("x-trace-id", trace_id));

        if request_ctx::response_format().is_html() {
            builder
                .content_type("text/plain; charset=utf-8")
                .body(self.detail().to_string())
        } else {
            builder.json(ErrorBody {
                error: self.detail().to_string(),
            })
        }
    }
}
