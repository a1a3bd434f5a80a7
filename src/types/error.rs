use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // registration-time
    #[error("identity already registered")]
    DuplicateIdentity,
    #[error("credential rejected: {0}")]
    InvalidCredential(String),
    #[error("validation error: {0}")]
    Validation(String),

    // login-time. Deliberately does not say which factor was wrong.
    #[error("authentication failed")]
    AuthFailure,

    // token-level
    #[error("malformed token")]
    TokenMalformed,
    #[error("token expired")]
    TokenExpired,
    #[error("bad token signature")]
    BadSignature,
    #[error("account no longer exists")]
    AccountRemoved,

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(e: argon2::password_hash::Error) -> Self {
        AppError::Internal(format!("password hashing failed: {e}"))
    }
}

#[derive(Serialize)]
struct ErrorBody<'a, 'b> {
    error: &'a str,
    message: &'b str,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateIdentity => "DUPLICATE_IDENTITY",
            Self::InvalidCredential(_) => "INVALID_CREDENTIAL",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::AuthFailure => "AUTH_FAILURE",
            Self::TokenMalformed => "TOKEN_MALFORMED",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::BadSignature => "BAD_SIGNATURE",
            Self::AccountRemoved => "ACCOUNT_REMOVED",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        // A violated unique index on the identity column is how the store
        // reports a concurrent duplicate registration.
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::DuplicateIdentity,
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateIdentity => StatusCode::CONFLICT,
            Self::InvalidCredential(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AuthFailure
            | Self::TokenMalformed
            | Self::TokenExpired
            | Self::BadSignature
            | Self::AccountRemoved => StatusCode::UNAUTHORIZED,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // 5xx bodies carry the stable code only, never internal detail.
        let message = match self {
            Self::Db(_) | Self::Internal(_) => self.kind().to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: &message,
        })
    }
}
