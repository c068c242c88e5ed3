//! Error types and their HTTP mapping.
//!
//! Repositories return `DbErr`, services and controllers return `AppError`. Client
//! mistakes carry their message to the response body, everything else is logged and
//! answered with a generic 500.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Every error a handler can return.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// 401 or 403, see `AuthError`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Raised while preparing the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// 404 with the message as body.
    #[error("{0}")]
    NotFound(String),

    /// 400: the request itself is malformed or fails validation.
    #[error("{0}")]
    BadRequest(String),

    /// 409: a business rule or unique index refused the change.
    #[error("{0}")]
    Conflict(String),

    /// 500 for states that should not happen; the message is only logged.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Maps a unique constraint violation to `Conflict` with the given message.
    ///
    /// Any other database error is kept as `DbErr`.
    pub fn conflict_on_unique(err: DbErr, message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(message.to_string()),
            _ => Self::DbErr(err),
        }
    }
}

fn error_body(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_body(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_body(StatusCode::CONFLICT, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and answers 500 without leaking its details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
