//! Event reservation factory.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a reservation directly, bypassing the booking checks.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Owning event
/// - `slot` - Daily slot being reserved; its location is reserved too
/// - `date` - Reservation date
///
/// # Returns
/// - `Ok(entity::event_reservation::Model)` - Created reservation
/// - `Err(DbErr)` - Insert failed, e.g. the slot is already reserved that date
pub async fn create_reservation(
    db: &DatabaseConnection,
    event_id: i32,
    slot: &entity::daily_slot::Model,
    date: NaiveDate,
) -> Result<entity::event_reservation::Model, DbErr> {
    entity::event_reservation::ActiveModel {
        id: ActiveValue::NotSet,
        event_id: ActiveValue::Set(event_id),
        location_id: ActiveValue::Set(slot.location_id),
        daily_slot_id: ActiveValue::Set(slot.id),
        reservation_date: ActiveValue::Set(date),
    }
    .insert(db)
    .await
}
