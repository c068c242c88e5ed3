use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id stored in the session.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but not allowed to perform the operation.
    ///
    /// The message is logged; clients receive it as the error body since it only
    /// describes the missing permission.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden with the denial reason
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("User {} denied access: {}", user_id, reason);
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: reason })).into_response()
            }
        }
    }
}
