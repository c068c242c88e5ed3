//! Time slot data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::location::SlotTimes;

pub struct TimeSlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeSlotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        location_id: i32,
        times: SlotTimes,
    ) -> Result<entity::time_slot::Model, DbErr> {
        entity::time_slot::ActiveModel {
            location_id: ActiveValue::Set(location_id),
            start_hour: ActiveValue::Set(times.start),
            end_hour: ActiveValue::Set(times.end),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// All time slots ordered by location, then start time.
    pub async fn find_all(&self) -> Result<Vec<entity::time_slot::Model>, DbErr> {
        entity::prelude::TimeSlot::find()
            .order_by_asc(entity::time_slot::Column::LocationId)
            .order_by_asc(entity::time_slot::Column::StartHour)
            .all(self.db)
            .await
    }

    pub async fn find_by_location(
        &self,
        location_id: i32,
    ) -> Result<Vec<entity::time_slot::Model>, DbErr> {
        entity::prelude::TimeSlot::find()
            .filter(entity::time_slot::Column::LocationId.eq(location_id))
            .order_by_asc(entity::time_slot::Column::StartHour)
            .all(self.db)
            .await
    }
}
