use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        reservation::{
            AvailabilityQueryDto, CreateDailySlotDto, CreateLocationDto, DailySlotDto,
            DailySlotGroupDto, DailySlotStatusDto, DateQueryDto, DisableSlotsDto,
            DisabledDatesDto, LocationAvailabilityDto, LocationDto, LocationWithTimeSlotsDto,
            RenameLocationDto, ReservationDto, ReserveDto, SlotTimesDto, TimeSlotDto,
            UpdateDailySlotsDto, ValidDaysDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            location::{CreateLocationParams, SlotTimes},
            reservation::ReserveParams,
        },
        service::{
            event::EventService, location::LocationService, reservation::ReservationService,
        },
        state::AppState,
        util::parse::{parse_date, parse_slot_times},
    },
};

/// Tag for grouping reservation and facility endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

fn parse_dates(values: &[String]) -> Result<Vec<NaiveDate>, AppError> {
    values.iter().map(|v| parse_date(v)).collect()
}

fn slot_times(dto: &SlotTimesDto) -> Result<SlotTimes, AppError> {
    let (start, end) = parse_slot_times(&dto.start_time, &dto.end_time)?;
    Ok(SlotTimes { start, end })
}

/// All reservations, newest date first.
#[utoipa::path(
    get,
    path = "/api/EventReservation/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations", body = Vec<ReservationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn all_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservations = ReservationService::new(&state.db).all().await?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Locations with their valid weekdays and disabled dates.
#[utoipa::path(
    get,
    path = "/api/EventReservation/locations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Locations", body = Vec<LocationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let locations = LocationService::new(&state.db).all().await?;

    let dtos: Vec<LocationDto> = locations.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add a location.
///
/// # Access Control
/// - `Admin` - Only admins can change the facility catalog
///
/// # Returns
/// - `201 Created` - Location created
/// - `400 Bad Request` - Empty name, weekday outside 0-6 or malformed date
/// - `403 Forbidden` - User is not an admin
#[utoipa::path(
    post,
    path = "/api/EventReservation/locations",
    tag = RESERVATION_TAG,
    request_body = CreateLocationDto,
    responses(
        (status = 201, description = "Location created", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_location(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateLocationParams {
        disabled_dates: parse_dates(&payload.disabled_dates)?,
        name: payload.name,
        valid_days: payload.valid_days,
    };

    let location = LocationService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(location.into_dto())))
}

/// Locations with their fixed time slots, each flagged when a reservation at the
/// location uses the same times.
#[utoipa::path(
    get,
    path = "/api/EventReservation/locations/time-slots",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Locations with time slots", body = Vec<LocationWithTimeSlotsDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn locations_with_time_slots(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let locations = LocationService::new(&state.db).with_time_slots().await?;

    let dtos: Vec<LocationWithTimeSlotsDto> =
        locations.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    put,
    path = "/api/EventReservation/locations/{location_id}/name",
    tag = RESERVATION_TAG,
    params(
        ("location_id" = i32, Path, description = "Location ID")
    ),
    request_body = RenameLocationDto,
    responses(
        (status = 200, description = "Location renamed", body = LocationDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rename_location(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
    Json(payload): Json<RenameLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let location = LocationService::new(&state.db)
        .rename(location_id, &payload.name)
        .await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Replace the weekdays a location can be booked on. An empty list opens it every day.
#[utoipa::path(
    put,
    path = "/api/EventReservation/locations/{location_id}/valid-days",
    tag = RESERVATION_TAG,
    params(
        ("location_id" = i32, Path, description = "Location ID")
    ),
    request_body = ValidDaysDto,
    responses(
        (status = 200, description = "Valid days replaced", body = LocationDto),
        (status = 400, description = "Weekday outside 0-6", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_valid_days(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
    Json(payload): Json<ValidDaysDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let location = LocationService::new(&state.db)
        .set_valid_days(location_id, &payload.days)
        .await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Replace the calendar dates on which a location is closed.
#[utoipa::path(
    put,
    path = "/api/EventReservation/locations/{location_id}/disabled-dates",
    tag = RESERVATION_TAG,
    params(
        ("location_id" = i32, Path, description = "Location ID")
    ),
    request_body = DisabledDatesDto,
    responses(
        (status = 200, description = "Disabled dates replaced", body = LocationDto),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_disabled_dates(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
    Json(payload): Json<DisabledDatesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let dates = parse_dates(&payload.dates)?;
    let location = LocationService::new(&state.db)
        .set_disabled_dates(location_id, &dates)
        .await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/EventReservation/locations/{location_id}/time-slots",
    tag = RESERVATION_TAG,
    params(
        ("location_id" = i32, Path, description = "Location ID")
    ),
    request_body = SlotTimesDto,
    responses(
        (status = 201, description = "Time slot added", body = TimeSlotDto),
        (status = 400, description = "Malformed or empty time window", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_time_slot(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
    Json(payload): Json<SlotTimesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let slot = LocationService::new(&state.db)
        .add_time_slot(location_id, slot_times(&payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(slot.into_dto())))
}

/// Reserve a daily slot at a location on a date for an event.
///
/// # Access Control
/// - Admins, or the president or leader of the event's club
///
/// # Returns
/// - `201 Created` - Slot reserved
/// - `400 Bad Request` - Malformed date, unknown event/location/slot, slot not offered
///   that weekday, location closed or slot disabled that date, or event rejected
/// - `403 Forbidden` - User cannot manage the event's club
/// - `409 Conflict` - Slot already reserved on that date
#[utoipa::path(
    post,
    path = "/api/EventReservation/reserve",
    tag = RESERVATION_TAG,
    request_body = ReserveDto,
    responses(
        (status = 201, description = "Slot reserved", body = ReservationDto),
        (status = 400, description = "Reservation request invalid", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot manage the event's club", body = ErrorDto),
        (status = 409, description = "Slot already reserved on that date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reserve(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ReserveDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = ReserveParams {
        event_id: payload.event_id,
        location_id: payload.location_id,
        daily_slot_id: payload.daily_slot_id,
        date: parse_date(&payload.date)?,
    };

    let reservation = ReservationService::new(&state.db)
        .reserve(params, &user)
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Free daily slots per location on a date.
#[utoipa::path(
    get,
    path = "/api/EventReservation/available-slots",
    tag = RESERVATION_TAG,
    params(AvailabilityQueryDto),
    responses(
        (status = 200, description = "Free slots grouped by location", body = Vec<LocationAvailabilityDto>),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn available_slots(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AvailabilityQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let date = parse_date(&query.date)?;
    let availability = ReservationService::new(&state.db)
        .available_slots(date)
        .await?;

    let dtos: Vec<LocationAvailabilityDto> =
        availability.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/EventReservation/events/{event_id}",
    tag = RESERVATION_TAG,
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
pub async fn reservations_by_event(
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

/// Daily slots of a location grouped by weekday.
#[utoipa::path(
    get,
    path = "/api/EventReservation/locations/{location_id}/daily-slots",
    tag = RESERVATION_TAG,
    params(
        ("location_id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Daily slots by weekday", body = Vec<DailySlotGroupDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_daily_slots(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let groups = LocationService::new(&state.db)
        .daily_slots_by_day(location_id)
        .await?;

    let dtos: Vec<DailySlotGroupDto> = groups
        .into_iter()
        .map(|(day_of_week, slots)| DailySlotGroupDto {
            day_of_week,
            slots: slots.into_iter().map(|s| s.into_dto()).collect(),
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/EventReservation/locations/{location_id}/daily-slots",
    tag = RESERVATION_TAG,
    params(
        ("location_id" = i32, Path, description = "Location ID")
    ),
    request_body = CreateDailySlotDto,
    responses(
        (status = 201, description = "Daily slot added", body = DailySlotDto),
        (status = 400, description = "Invalid weekday or time window", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_daily_slot(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
    Json(payload): Json<CreateDailySlotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (start, end) = parse_slot_times(&payload.start_time, &payload.end_time)?;
    let slot = LocationService::new(&state.db)
        .add_daily_slot(location_id, payload.day_of_week, SlotTimes { start, end })
        .await?;

    Ok((StatusCode::CREATED, Json(slot.into_dto())))
}

/// Daily slots of a location on one weekday, flagged with whether they are enabled
/// on the optional `date`.
#[utoipa::path(
    get,
    path = "/api/EventReservation/locations/{location_id}/daily-slots/{day_of_week}",
    tag = RESERVATION_TAG,
    params(
        ("location_id" = i32, Path, description = "Location ID"),
        ("day_of_week" = i32, Path, description = "Weekday, 0 = Monday"),
        DateQueryDto
    ),
    responses(
        (status = 200, description = "Slots with enabled flag", body = Vec<DailySlotStatusDto>),
        (status = 400, description = "Invalid weekday or malformed date", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn daily_slots_for_date(
    State(state): State<AppState>,
    session: Session,
    Path((location_id, day_of_week)): Path<(i32, i32)>,
    Query(query): Query<DateQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let date = query.date.as_deref().map(parse_date).transpose()?;
    let slots = ReservationService::new(&state.db)
        .daily_slots_for_date(location_id, day_of_week, date)
        .await?;

    let dtos: Vec<DailySlotStatusDto> = slots.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Replace the daily slots of a location on one weekday.
///
/// Slots whose times are kept retain their id. Removing a slot that carries a
/// reservation fails.
#[utoipa::path(
    put,
    path = "/api/EventReservation/locations/{location_id}/daily-slots/{day_of_week}",
    tag = RESERVATION_TAG,
    params(
        ("location_id" = i32, Path, description = "Location ID"),
        ("day_of_week" = i32, Path, description = "Weekday, 0 = Monday")
    ),
    request_body = UpdateDailySlotsDto,
    responses(
        (status = 200, description = "Slots of the weekday after the update", body = Vec<DailySlotDto>),
        (status = 400, description = "Invalid slots or a removed slot is reserved", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_daily_slots(
    State(state): State<AppState>,
    session: Session,
    Path((location_id, day_of_week)): Path<(i32, i32)>,
    Json(payload): Json<UpdateDailySlotsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let times = payload
        .slots
        .iter()
        .map(slot_times)
        .collect::<Result<Vec<_>, _>>()?;

    let slots = LocationService::new(&state.db)
        .replace_daily_slots(location_id, day_of_week, times)
        .await?;

    let dtos: Vec<DailySlotDto> = slots.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Disable daily slots of a location for one date. Already disabled slots are skipped.
#[utoipa::path(
    post,
    path = "/api/EventReservation/locations/{location_id}/daily-slots/disable",
    tag = RESERVATION_TAG,
    params(
        ("location_id" = i32, Path, description = "Location ID")
    ),
    request_body = DisableSlotsDto,
    responses(
        (status = 200, description = "Slots disabled", body = MessageDto),
        (status = 400, description = "Malformed date or slot of another location", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn disable_daily_slots(
    State(state): State<AppState>,
    session: Session,
    Path(location_id): Path<i32>,
    Json(payload): Json<DisableSlotsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let date = parse_date(&payload.date)?;
    LocationService::new(&state.db)
        .disable_slots(location_id, &payload.slot_ids, date)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Slots disabled"))))
}
