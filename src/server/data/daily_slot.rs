//! Daily slot data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::location::{DailySlot, SlotTimes};

pub struct DailySlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DailySlotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        location_id: i32,
        day_of_week: i32,
        times: SlotTimes,
    ) -> Result<DailySlot, DbErr> {
        let entity = entity::daily_slot::ActiveModel {
            location_id: ActiveValue::Set(location_id),
            day_of_week: ActiveValue::Set(day_of_week),
            start_hour: ActiveValue::Set(times.start),
            end_hour: ActiveValue::Set(times.end),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DailySlot::from_entity(entity))
    }

    pub async fn find_by_id(&self, slot_id: i32) -> Result<Option<DailySlot>, DbErr> {
        let entity = entity::prelude::DailySlot::find_by_id(slot_id)
            .one(self.db)
            .await?;

        Ok(entity.map(DailySlot::from_entity))
    }

    /// All slots of a location ordered by weekday, then start time.
    pub async fn find_by_location(&self, location_id: i32) -> Result<Vec<DailySlot>, DbErr> {
        let entities = entity::prelude::DailySlot::find()
            .filter(entity::daily_slot::Column::LocationId.eq(location_id))
            .order_by_asc(entity::daily_slot::Column::DayOfWeek)
            .order_by_asc(entity::daily_slot::Column::StartHour)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DailySlot::from_entity).collect())
    }

    /// Slots of one location on one weekday ordered by start time.
    pub async fn find_by_location_and_day(
        &self,
        location_id: i32,
        day_of_week: i32,
    ) -> Result<Vec<DailySlot>, DbErr> {
        let entities = entity::prelude::DailySlot::find()
            .filter(entity::daily_slot::Column::LocationId.eq(location_id))
            .filter(entity::daily_slot::Column::DayOfWeek.eq(day_of_week))
            .order_by_asc(entity::daily_slot::Column::StartHour)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DailySlot::from_entity).collect())
    }

    /// Slots of every location on one weekday ordered by start time.
    pub async fn find_by_day(&self, day_of_week: i32) -> Result<Vec<DailySlot>, DbErr> {
        let entities = entity::prelude::DailySlot::find()
            .filter(entity::daily_slot::Column::DayOfWeek.eq(day_of_week))
            .order_by_asc(entity::daily_slot::Column::StartHour)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DailySlot::from_entity).collect())
    }

    pub async fn find_by_ids(&self, slot_ids: &[i32]) -> Result<Vec<DailySlot>, DbErr> {
        if slot_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::DailySlot::find()
            .filter(entity::daily_slot::Column::Id.is_in(slot_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DailySlot::from_entity).collect())
    }

    /// Deletes the given slots. Fails while any of them is referenced by a reservation.
    pub async fn delete_many(&self, slot_ids: &[i32]) -> Result<u64, DbErr> {
        if slot_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::DailySlot::delete_many()
            .filter(entity::daily_slot::Column::Id.is_in(slot_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
