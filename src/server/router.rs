//! Route table and OpenAPI document.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        event::{self, EVENT_TAG},
        membership::{self, MEMBERSHIP_TAG},
        notification::{self, NOTIFICATION_TAG},
        reservation::{self, RESERVATION_TAG},
        settings::{self, SETTINGS_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Clubhub API", description = "Club memberships, events and facility reservations"),
    tags(
        (name = MEMBERSHIP_TAG, description = "Applications, members and presidency"),
        (name = EVENT_TAG, description = "Events, registrations and the review workflow"),
        (name = RESERVATION_TAG, description = "Locations, slots and reservations"),
        (name = SETTINGS_TAG, description = "Application settings"),
        (name = NOTIFICATION_TAG, description = "User notifications")
    )
)]
struct ApiDoc;

/// Builds every API route plus Swagger UI at `/swagger-ui`.
///
/// `routes!` groups handlers sharing one path; each group is registered once.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Memberships
        .routes(routes!(membership::apply))
        .routes(routes!(membership::my_applications))
        .routes(routes!(membership::approve))
        .routes(routes!(membership::reject))
        .routes(routes!(membership::whoami))
        .routes(routes!(membership::pending_for_advisor))
        .routes(routes!(membership::pending_for_led_clubs))
        .routes(routes!(membership::club_members))
        .routes(routes!(membership::remove_member))
        .routes(routes!(membership::member_details))
        .routes(routes!(membership::leave))
        .routes(routes!(membership::set_president))
        .routes(routes!(membership::validate_president))
        .routes(routes!(membership::change_president))
        .routes(routes!(membership::president_of))
        // Events
        .routes(routes!(event::list_events, event::create_event))
        .routes(routes!(event::managed_events))
        .routes(routes!(event::pending_events))
        .routes(routes!(event::completed_events))
        .routes(routes!(
            event::get_event,
            event::update_event,
            event::delete_event
        ))
        .routes(routes!(event::join_event))
        .routes(routes!(event::leave_event))
        .routes(routes!(event::event_participants))
        .routes(routes!(event::event_reservations))
        .routes(routes!(event::review_event))
        // Facilities and reservations
        .routes(routes!(reservation::all_reservations))
        .routes(routes!(reservation::get_locations, reservation::add_location))
        .routes(routes!(reservation::locations_with_time_slots))
        .routes(routes!(reservation::rename_location))
        .routes(routes!(reservation::set_valid_days))
        .routes(routes!(reservation::set_disabled_dates))
        .routes(routes!(reservation::add_time_slot))
        .routes(routes!(reservation::reserve))
        .routes(routes!(reservation::available_slots))
        .routes(routes!(reservation::reservations_by_event))
        .routes(routes!(
            reservation::get_daily_slots,
            reservation::add_daily_slot
        ))
        .routes(routes!(
            reservation::daily_slots_for_date,
            reservation::update_daily_slots
        ))
        .routes(routes!(reservation::disable_daily_slots))
        // Settings and notifications
        .routes(routes!(
            settings::get_club_create_dates,
            settings::set_club_create_dates
        ))
        .routes(routes!(notification::get_notifications))
        .routes(routes!(notification::mark_notification_read))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
