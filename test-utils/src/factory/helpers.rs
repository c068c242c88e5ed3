//! Shared helper utilities for factory methods.
//!
//! Provides the id counter every factory uses for unique names, plus convenience methods
//! creating entities together with their dependencies.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and emails in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a club with an advisor and an approved president.
///
/// This convenience method creates:
/// 1. An advisor user (system role `advisor`) set as the club's advisor
/// 2. The club
/// 3. A student user holding the club's approved presidency
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((club, president, advisor))` - Created club and its two staff users
/// - `Err(DbErr)` - Database error during creation
pub async fn create_club_with_staff(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::club::Model,
        entity::user::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let advisor = crate::factory::user::create_user_with_role(db, UserRole::Advisor).await?;
    let club = crate::factory::club::ClubFactory::new(db)
        .advisor_id(Some(advisor.id))
        .build()
        .await?;
    let president = crate::factory::user::create_user(db).await?;
    crate::factory::club_membership::create_president(db, club.id, president.id).await?;

    Ok((club, president, advisor))
}

/// Creates a club and an event owned by it.
///
/// # Returns
/// - `Ok((club, event))` - Created club and `advisor_pending` event
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::club::Model, entity::event::Model), DbErr> {
    let club = crate::factory::club::create_club(db).await?;
    let event = crate::factory::event::create_event(db, club.id).await?;

    Ok((club, event))
}

/// Creates a location with one daily slot on the given weekday.
///
/// # Arguments
/// - `db` - Database connection
/// - `day_of_week` - 0 = Monday … 6 = Sunday
///
/// # Returns
/// - `Ok((location, slot))` - Location and its 10:00-12:00 slot
/// - `Err(DbErr)` - Database error during creation
pub async fn create_location_with_slot(
    db: &DatabaseConnection,
    day_of_week: i32,
) -> Result<(entity::location::Model, entity::daily_slot::Model), DbErr> {
    let location = crate::factory::location::create_location(db).await?;
    let slot = crate::factory::daily_slot::create_daily_slot(db, location.id, day_of_week).await?;

    Ok((location, slot))
}
