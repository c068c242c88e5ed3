//! Unique constraints that the entity definitions cannot express.
//!
//! Shared between the migrations and the test schema builder so both databases
//! enforce the same invariants.

use sea_orm_migration::prelude::*;

use crate::m20250722_000003_create_club_membership_table::ClubMembership;
use crate::m20250722_000009_create_disabled_slot_table::DisabledSlot;
use crate::m20250722_000012_create_event_reservation_table::EventReservation;

/// At most one approved president per club.
pub const ONE_PRESIDENT_PER_CLUB: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
    idx_club_membership_president_per_club ON club_membership (club_id) \
    WHERE role = 'president' AND status = 'approved'";

/// At most one approved presidency per user.
pub const ONE_PRESIDENCY_PER_USER: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
    idx_club_membership_presidency_per_user ON club_membership (user_id) \
    WHERE role = 'president' AND status = 'approved'";

pub const DROP_ONE_PRESIDENT_PER_CLUB: &str =
    "DROP INDEX IF EXISTS idx_club_membership_president_per_club";
pub const DROP_ONE_PRESIDENCY_PER_USER: &str =
    "DROP INDEX IF EXISTS idx_club_membership_presidency_per_user";

/// One membership row per (club, user).
pub fn club_membership_unique() -> IndexCreateStatement {
    Index::create()
        .if_not_exists()
        .unique()
        .name("idx_club_membership_club_user")
        .table(ClubMembership::Table)
        .col(ClubMembership::ClubId)
        .col(ClubMembership::UserId)
        .to_owned()
}

/// One reservation per (location, daily slot, date).
pub fn event_reservation_unique() -> IndexCreateStatement {
    Index::create()
        .if_not_exists()
        .unique()
        .name("idx_event_reservation_location_slot_date")
        .table(EventReservation::Table)
        .col(EventReservation::LocationId)
        .col(EventReservation::DailySlotId)
        .col(EventReservation::ReservationDate)
        .to_owned()
}

/// One disable marker per (daily slot, date).
pub fn disabled_slot_unique() -> IndexCreateStatement {
    Index::create()
        .if_not_exists()
        .unique()
        .name("idx_disabled_slot_slot_date")
        .table(DisabledSlot::Table)
        .col(DisabledSlot::DailySlotId)
        .col(DisabledSlot::Date)
        .to_owned()
}
