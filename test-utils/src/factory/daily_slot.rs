//! Daily slot factory.

use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating weekly recurring slots.
pub struct DailySlotFactory<'a> {
    db: &'a DatabaseConnection,
    location_id: i32,
    day_of_week: i32,
    start_hour: NaiveTime,
    end_hour: NaiveTime,
}

impl<'a> DailySlotFactory<'a> {
    /// Creates a new DailySlotFactory for a 10:00-12:00 slot.
    pub fn new(db: &'a DatabaseConnection, location_id: i32, day_of_week: i32) -> Self {
        Self {
            db,
            location_id,
            day_of_week,
            start_hour: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
            end_hour: NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
        }
    }

    /// Sets start and end as whole hours.
    pub fn hours(mut self, start: u32, end: u32) -> Self {
        self.start_hour = NaiveTime::from_hms_opt(start, 0, 0).unwrap_or_default();
        self.end_hour = NaiveTime::from_hms_opt(end, 0, 0).unwrap_or_default();
        self
    }

    pub async fn build(self) -> Result<entity::daily_slot::Model, DbErr> {
        entity::daily_slot::ActiveModel {
            id: ActiveValue::NotSet,
            location_id: ActiveValue::Set(self.location_id),
            day_of_week: ActiveValue::Set(self.day_of_week),
            start_hour: ActiveValue::Set(self.start_hour),
            end_hour: ActiveValue::Set(self.end_hour),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a 10:00-12:00 slot for the location on the weekday (0 = Monday).
pub async fn create_daily_slot(
    db: &DatabaseConnection,
    location_id: i32,
    day_of_week: i32,
) -> Result<entity::daily_slot::Model, DbErr> {
    DailySlotFactory::new(db, location_id, day_of_week)
        .build()
        .await
}
