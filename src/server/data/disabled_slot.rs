//! Disabled slot data repository.
//!
//! A disabled slot blocks one daily slot on one calendar date. Rows are only ever
//! added; disabling an already disabled slot is a no-op.

use std::collections::HashSet;

use chrono::NaiveDate;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect,
};

pub struct DisabledSlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DisabledSlotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Disables the given slots of a location on `date`.
    ///
    /// Slots already disabled on that date are skipped through the (slot, date) unique
    /// index.
    pub async fn disable_many(
        &self,
        location_id: i32,
        slot_ids: &[i32],
        date: NaiveDate,
    ) -> Result<(), DbErr> {
        if slot_ids.is_empty() {
            return Ok(());
        }

        let rows = slot_ids
            .iter()
            .map(|slot_id| entity::disabled_slot::ActiveModel {
                location_id: ActiveValue::Set(location_id),
                daily_slot_id: ActiveValue::Set(*slot_id),
                date: ActiveValue::Set(date),
                ..Default::default()
            });

        entity::prelude::DisabledSlot::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    entity::disabled_slot::Column::DailySlotId,
                    entity::disabled_slot::Column::Date,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Ids of the daily slots disabled on `date`.
    pub async fn disabled_slot_ids_on(&self, date: NaiveDate) -> Result<HashSet<i32>, DbErr> {
        let ids: Vec<i32> = entity::prelude::DisabledSlot::find()
            .select_only()
            .column(entity::disabled_slot::Column::DailySlotId)
            .filter(entity::disabled_slot::Column::Date.eq(date))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    pub async fn is_disabled(&self, slot_id: i32, date: NaiveDate) -> Result<bool, DbErr> {
        let count = entity::prelude::DisabledSlot::find()
            .filter(entity::disabled_slot::Column::DailySlotId.eq(slot_id))
            .filter(entity::disabled_slot::Column::Date.eq(date))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
