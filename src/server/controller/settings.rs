use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, settings::ClubCreateDatesDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::settings::ClubCreateDates,
        service::settings::SettingsService,
        state::AppState,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Window during which clubs may be founded.
#[utoipa::path(
    get,
    path = "/api/settings/club-create-dates",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Club creation window", body = ClubCreateDatesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club_create_dates(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let dates = SettingsService::new(&state.db).club_create_dates().await?;

    Ok((StatusCode::OK, Json(dates.into_dto())))
}

/// Set the club creation window. A `null` end clears it.
///
/// # Access Control
/// - `Admin` - Only admins can change settings
#[utoipa::path(
    put,
    path = "/api/settings/club-create-dates",
    tag = SETTINGS_TAG,
    request_body = ClubCreateDatesDto,
    responses(
        (status = 200, description = "Club creation window stored", body = ClubCreateDatesDto),
        (status = 400, description = "Start date after end date", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_club_create_dates(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ClubCreateDatesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let dates = SettingsService::new(&state.db)
        .set_club_create_dates(ClubCreateDates::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(dates.into_dto())))
}
