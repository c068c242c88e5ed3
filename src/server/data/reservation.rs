//! Event reservation data repository.
//!
//! The (location, daily slot, date) unique index makes `create` the only place that
//! decides whether a slot is still free. Concurrent bookings of the same slot race on
//! the insert and all but one fail with a unique constraint violation.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    location::DailySlot,
    reservation::{Reservation, ReserveParams},
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reservation.
    ///
    /// # Returns
    /// - `Ok(entity::event_reservation::Model)` - The stored reservation
    /// - `Err(DbErr)` - Unique violation when the slot is taken that date, or another
    ///   database error
    pub async fn create(
        &self,
        params: ReserveParams,
    ) -> Result<entity::event_reservation::Model, DbErr> {
        entity::event_reservation::ActiveModel {
            event_id: ActiveValue::Set(params.event_id),
            location_id: ActiveValue::Set(params.location_id),
            daily_slot_id: ActiveValue::Set(params.daily_slot_id),
            reservation_date: ActiveValue::Set(params.date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Ids of the daily slots reserved on `date`.
    pub async fn reserved_slot_ids_on(&self, date: NaiveDate) -> Result<HashSet<i32>, DbErr> {
        let ids: Vec<i32> = entity::prelude::EventReservation::find()
            .select_only()
            .column(entity::event_reservation::Column::DailySlotId)
            .filter(entity::event_reservation::Column::ReservationDate.eq(date))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Number of reservations referencing any of the given slots, on any date.
    pub async fn count_for_slots(&self, slot_ids: &[i32]) -> Result<u64, DbErr> {
        if slot_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::EventReservation::find()
            .filter(entity::event_reservation::Column::DailySlotId.is_in(slot_ids.iter().copied()))
            .count(self.db)
            .await
    }

    /// Daily slots that carry at least one reservation at the location.
    pub async fn reserved_slots_at(&self, location_id: i32) -> Result<Vec<DailySlot>, DbErr> {
        let rows = entity::prelude::EventReservation::find()
            .filter(entity::event_reservation::Column::LocationId.eq(location_id))
            .find_also_related(entity::prelude::DailySlot)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, slot)| slot.map(DailySlot::from_entity))
            .collect())
    }

    /// All reservations with names and times, newest date first.
    pub async fn find_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let rows = entity::prelude::EventReservation::find()
            .order_by_desc(entity::event_reservation::Column::ReservationDate)
            .order_by_desc(entity::event_reservation::Column::Id)
            .all(self.db)
            .await?;

        self.with_details(rows).await
    }

    /// Reservations of one event, earliest date first.
    pub async fn find_by_event(&self, event_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let rows = entity::prelude::EventReservation::find()
            .filter(entity::event_reservation::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_reservation::Column::ReservationDate)
            .all(self.db)
            .await?;

        self.with_details(rows).await
    }

    /// Deletes every reservation of an event.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of reservations removed
    pub async fn delete_by_event(&self, event_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::EventReservation::delete_many()
            .filter(entity::event_reservation::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn with_details(
        &self,
        rows: Vec<entity::event_reservation::Model>,
    ) -> Result<Vec<Reservation>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: HashSet<i32> = rows.iter().map(|r| r.event_id).collect();
        let location_ids: HashSet<i32> = rows.iter().map(|r| r.location_id).collect();
        let slot_ids: HashSet<i32> = rows.iter().map(|r| r.daily_slot_id).collect();

        let event_names: HashMap<i32, String> = entity::prelude::Event::find()
            .filter(entity::event::Column::Id.is_in(event_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| (e.id, e.name))
            .collect();

        let location_names: HashMap<i32, String> = entity::prelude::Location::find()
            .filter(entity::location::Column::Id.is_in(location_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|l| (l.id, l.name))
            .collect();

        let slots: HashMap<i32, DailySlot> = entity::prelude::DailySlot::find()
            .filter(entity::daily_slot::Column::Id.is_in(slot_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, DailySlot::from_entity(s)))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let slot = slots.get(&row.daily_slot_id)?.clone();

                Some(Reservation {
                    id: row.id,
                    event_id: row.event_id,
                    event_name: event_names.get(&row.event_id).cloned().unwrap_or_default(),
                    location_id: row.location_id,
                    location_name: location_names
                        .get(&row.location_id)
                        .cloned()
                        .unwrap_or_default(),
                    slot,
                    reservation_date: row.reservation_date,
                })
            })
            .collect())
    }
}
