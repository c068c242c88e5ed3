use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        event::{
            CompletedEventDto, CreateEventDto, EventDto, EventQueryDto, ParticipantDto,
            ParticipationDto, ReviewEventDto, UpdateEventDto,
        },
        reservation::ReservationDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::{
            CreateEventParams, EventDetailsParams, EventFilter, EventView, ReviewDecision,
        },
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

fn into_dtos(views: Vec<EventView>) -> Vec<EventDto> {
    let now = Utc::now();
    views.into_iter().map(|v| v.into_dto(now)).collect()
}

/// List events, soonest first.
///
/// Optionally narrowed to one club and to names containing `search`.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(EventQueryDto),
    responses(
        (status = 200, description = "Events", body = Vec<EventDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<EventQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let events = EventService::new(&state.db)
        .list(EventFilter::from_dto(query), user.id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

/// Create an event for a club.
///
/// The event starts in the advisor review stage.
///
/// # Access Control
/// - Admins, or the club's president or leader
///
/// # Returns
/// - `201 Created` - Event created as `advisor_pending`
/// - `400 Bad Request` - Empty name, start in the past, end before start or no capacity
/// - `403 Forbidden` - User cannot manage this club's events
/// - `404 Not Found` - Club does not exist
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this club's events", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let event = EventService::new(&state.db)
        .create(CreateEventParams::from_dto(payload), &user)
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto(Utc::now()))))
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let event = EventService::new(&state.db).get(event_id, user.id).await?;

    Ok((StatusCode::OK, Json(event.into_dto(Utc::now()))))
}

/// Update an event that has not started yet.
#[utoipa::path(
    put,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Invalid event data or event already started", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this club's events", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let event = EventService::new(&state.db)
        .update(event_id, EventDetailsParams::from_dto(payload), &user)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto(Utc::now()))))
}

/// Delete an event that has not started yet, releasing its reservations.
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted", body = MessageDto),
        (status = 400, description = "Event already started", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage this club's events", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    EventService::new(&state.db).delete(event_id, &user).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Event deleted"))))
}

/// Register the logged in user for an approved event.
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/join",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Registered", body = ParticipationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event not open, full or already joined", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let participation = EventService::new(&state.db)
        .join(event_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(participation.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/events/{event_id}/leave",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Registration removed", body = ParticipationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found or user not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let participation = EventService::new(&state.db)
        .leave(event_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(participation.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/participants",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Registered participants", body = Vec<ParticipantDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn event_participants(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let participants = EventService::new(&state.db)
        .participants(event_id)
        .await?;

    let dtos: Vec<ParticipantDto> = participants.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/reservations",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Reservations of the event", body = Vec<ReservationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn event_reservations(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservations = EventService::new(&state.db)
        .reservations(event_id)
        .await?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Ended events of a club with the state of their result reports.
///
/// # Access Control
/// - Admins, advisors and leaders
///
/// # Returns
/// - `200 OK` - Ended events, latest end date first
/// - `403 Forbidden` - User is a student
/// - `404 Not Found` - Club does not exist
#[utoipa::path(
    get,
    path = "/api/events/clubs/{club_id}/completed",
    tag = EVENT_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Completed events", body = Vec<CompletedEventDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not list completed events", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn completed_events(
    State(state): State<AppState>,
    session: Session,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let events = EventService::new(&state.db)
        .completed(club_id, &user)
        .await?;

    let now = Utc::now();
    let dtos: Vec<CompletedEventDto> = events
        .into_iter()
        .map(|v| v.into_completed_dto(now))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Events of the clubs the logged in user advises or presides. Admins get every event.
#[utoipa::path(
    get,
    path = "/api/events/managed",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Managed events", body = Vec<EventDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn managed_events(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let events = EventService::new(&state.db).managed(&user).await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

/// Events waiting for the logged in reviewer.
///
/// # Access Control
/// - `Staff` - Advisors see `advisor_pending` events of their clubs, admins every
///   `admin_pending` event
#[utoipa::path(
    get,
    path = "/api/events/pending",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Events awaiting review", body = Vec<EventDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is neither admin nor advisor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pending_events(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let events = EventService::new(&state.db).pending(&user).await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

/// Approve or reject an event at the reviewer's stage.
///
/// Advisors forward `advisor_pending` events of clubs they advise to admins; admins
/// approve `admin_pending` events. Rejecting releases every slot the event reserved.
///
/// # Access Control
/// - `Staff` - Admins and advisors
///
/// # Returns
/// - `200 OK` - Event with its new status
/// - `403 Forbidden` - User may not review this event
/// - `404 Not Found` - Event does not exist
/// - `409 Conflict` - Event is not at the reviewer's stage
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/review",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = ReviewEventDto,
    responses(
        (status = 200, description = "Event reviewed", body = EventDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not review this event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event not awaiting this review", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(payload): Json<ReviewEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let event = EventService::new(&state.db)
        .review(event_id, ReviewDecision::from_dto(payload), &user)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto(Utc::now()))))
}
