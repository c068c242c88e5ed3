use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        membership::{
            ApplicationDto, ApplyDto, ChangePresidentDto, ClubMemberDto, MemberDetailsDto,
            MembershipDto, PresidentValidationDto, WhoAmIDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::membership::MembershipService,
        state::AppState,
    },
};

/// Tag for grouping membership endpoints in OpenAPI documentation
pub static MEMBERSHIP_TAG: &str = "membership";

/// Apply to join a club.
///
/// Files a pending application for the logged in user. The club advisor and the
/// current president are notified.
///
/// # Returns
/// - `201 Created` - Application stored as pending
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Club does not exist
/// - `409 Conflict` - Already a member or an application is pending
#[utoipa::path(
    post,
    path = "/api/memberships/apply",
    tag = MEMBERSHIP_TAG,
    request_body = ApplyDto,
    responses(
        (status = 201, description = "Application stored", body = MembershipDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 409, description = "Already a member or already applied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ApplyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let membership = MembershipService::new(&state.db)
        .apply(&user, payload.club_id)
        .await?;

    Ok((StatusCode::CREATED, Json(membership.into_dto())))
}

/// Pending applications of the logged in user.
#[utoipa::path(
    get,
    path = "/api/memberships/my-applications",
    tag = MEMBERSHIP_TAG,
    responses(
        (status = 200, description = "Pending applications", body = Vec<MembershipDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_applications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let applications = MembershipService::new(&state.db)
        .my_applications(user.id)
        .await?;

    let dtos: Vec<MembershipDto> = applications.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Approve a pending application.
///
/// # Access Control
/// - Admins, the club advisor or the club president
///
/// # Returns
/// - `200 OK` - Membership approved and member count updated
/// - `403 Forbidden` - User may not review applications of this club
/// - `404 Not Found` - No pending application with that id
#[utoipa::path(
    post,
    path = "/api/memberships/{membership_id}/approve",
    tag = MEMBERSHIP_TAG,
    params(
        ("membership_id" = i32, Path, description = "Membership ID")
    ),
    responses(
        (status = 200, description = "Application approved", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to review this application", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve(
    State(state): State<AppState>,
    session: Session,
    Path(membership_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MembershipService::new(&state.db)
        .approve(membership_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Application approved"))))
}

/// Reject a pending application. The application is deleted.
#[utoipa::path(
    post,
    path = "/api/memberships/{membership_id}/reject",
    tag = MEMBERSHIP_TAG,
    params(
        ("membership_id" = i32, Path, description = "Membership ID")
    ),
    responses(
        (status = 200, description = "Application rejected", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to review this application", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject(
    State(state): State<AppState>,
    session: Session,
    Path(membership_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MembershipService::new(&state.db)
        .reject(membership_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Application rejected"))))
}

/// Memberships of the logged in user.
///
/// # Returns
/// - `200 OK` - Approved and pending memberships and whether the user presides
///   over any club
#[utoipa::path(
    get,
    path = "/api/memberships/whoami",
    tag = MEMBERSHIP_TAG,
    responses(
        (status = 200, description = "Memberships of the user", body = WhoAmIDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn whoami(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let whoami = MembershipService::new(&state.db).whoami(user.id).await?;

    Ok((StatusCode::OK, Json(whoami.into_dto())))
}

/// Applications waiting for the logged in user, for clubs they advise or preside.
#[utoipa::path(
    get,
    path = "/api/memberships/pending",
    tag = MEMBERSHIP_TAG,
    responses(
        (status = 200, description = "Pending applications", body = Vec<ApplicationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pending_for_advisor(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let applications = MembershipService::new(&state.db)
        .pending_for_advisor(user.id)
        .await?;

    let dtos: Vec<ApplicationDto> = applications.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Applications waiting in the clubs the logged in user presides.
#[utoipa::path(
    get,
    path = "/api/memberships/pending/led-clubs",
    tag = MEMBERSHIP_TAG,
    responses(
        (status = 200, description = "Pending applications", body = Vec<ApplicationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pending_for_led_clubs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let applications = MembershipService::new(&state.db)
        .pending_for_led_clubs(user.id)
        .await?;

    let dtos: Vec<ApplicationDto> = applications.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Approved members of a club.
#[utoipa::path(
    get,
    path = "/api/memberships/clubs/{club_id}/members",
    tag = MEMBERSHIP_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Approved members", body = Vec<ClubMemberDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn club_members(
    State(state): State<AppState>,
    session: Session,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let members = MembershipService::new(&state.db)
        .club_members(club_id)
        .await?;

    let dtos: Vec<ClubMemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Remove an approved member from their club.
///
/// # Access Control
/// - Admins or the club president. The president cannot be removed.
#[utoipa::path(
    delete,
    path = "/api/memberships/{membership_id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("membership_id" = i32, Path, description = "Membership ID")
    ),
    responses(
        (status = 200, description = "Member removed", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to remove members of this club", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 409, description = "The president cannot be removed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path(membership_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MembershipService::new(&state.db)
        .remove_member(membership_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Member removed"))))
}

/// Profile of a user with their approved memberships.
#[utoipa::path(
    get,
    path = "/api/memberships/users/{user_id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Member details", body = MemberDetailsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found or not a member of any club", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn member_details(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let details = MembershipService::new(&state.db)
        .member_details(user_id)
        .await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Leave a club. Presidents must hand over the presidency first.
#[utoipa::path(
    post,
    path = "/api/memberships/{membership_id}/leave",
    tag = MEMBERSHIP_TAG,
    params(
        ("membership_id" = i32, Path, description = "Membership ID")
    ),
    responses(
        (status = 200, description = "Membership left", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Membership belongs to another user", body = ErrorDto),
        (status = 404, description = "Membership not found", body = ErrorDto),
        (status = 409, description = "Membership not approved or held by the president", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave(
    State(state): State<AppState>,
    session: Session,
    Path(membership_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MembershipService::new(&state.db)
        .leave(membership_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("You left the club"))))
}

/// Make the owner of an approved membership the club president.
///
/// The current president, if any, is demoted to member in the same transaction.
///
/// # Access Control
/// - `Staff` - Admins and advisors
///
/// # Returns
/// - `200 OK` - Presidency transferred, both users notified
/// - `403 Forbidden` - User is neither admin nor advisor
/// - `404 Not Found` - No approved membership with that id
/// - `409 Conflict` - Already president here or of another club
#[utoipa::path(
    post,
    path = "/api/memberships/{membership_id}/set-president",
    tag = MEMBERSHIP_TAG,
    params(
        ("membership_id" = i32, Path, description = "Membership ID")
    ),
    responses(
        (status = 200, description = "President set", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is neither admin nor advisor", body = ErrorDto),
        (status = 404, description = "Approved membership not found", body = ErrorDto),
        (status = 409, description = "User already presides over a club", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_president(
    State(state): State<AppState>,
    session: Session,
    Path(membership_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    MembershipService::new(&state.db)
        .set_president(membership_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("President updated"))))
}

/// Check that a club has exactly one president.
///
/// # Access Control
/// - Admins, the club advisor or the club president
#[utoipa::path(
    get,
    path = "/api/memberships/clubs/{club_id}/validate-president",
    tag = MEMBERSHIP_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Validation result", body = PresidentValidationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this club", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_president(
    State(state): State<AppState>,
    session: Session,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageClub(club_id)])
        .await?;

    let has_single_president = MembershipService::new(&state.db)
        .validate_president(club_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PresidentValidationDto {
            club_id,
            has_single_president,
        }),
    ))
}

/// Hand a club's presidency to another approved member.
///
/// # Access Control
/// - `Staff` - Admins and advisors
#[utoipa::path(
    post,
    path = "/api/memberships/clubs/{club_id}/change-president",
    tag = MEMBERSHIP_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID")
    ),
    request_body = ChangePresidentDto,
    responses(
        (status = 200, description = "President changed", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is neither admin nor advisor", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 409, description = "Target is not an eligible member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_president(
    State(state): State<AppState>,
    session: Session,
    Path(club_id): Path<i32>,
    Json(payload): Json<ChangePresidentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    MembershipService::new(&state.db)
        .change_president(club_id, payload.new_president_user_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("President changed"))))
}

/// Current president of a club.
#[utoipa::path(
    get,
    path = "/api/memberships/clubs/{club_id}/president",
    tag = MEMBERSHIP_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "The club president", body = ClubMemberDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Club not found or without president", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn president_of(
    State(state): State<AppState>,
    session: Session,
    Path(club_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let president = MembershipService::new(&state.db)
        .president_of(club_id)
        .await?;

    Ok((StatusCode::OK, Json(president.into_dto())))
}
