//! Facility catalog administration: locations, their opening rules and slots.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        daily_slot::DailySlotRepository, disabled_slot::DisabledSlotRepository,
        location::LocationRepository, reservation::ReservationRepository,
        time_slot::TimeSlotRepository,
    },
    error::AppError,
    model::location::{
        CreateLocationParams, DailySlot, Location, LocationWithTimeSlots, SlotTimes, TimeSlot,
    },
    util::parse::validate_day_of_week,
};

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, mut params: CreateLocationParams) -> Result<Location, AppError> {
        params.name = validate_name(&params.name)?;
        validate_days(&params.valid_days)?;

        let txn = self.db.begin().await?;
        let location = LocationRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::info!("Created location {} ({})", location.id, location.name);

        Ok(location)
    }

    pub async fn all(&self) -> Result<Vec<Location>, AppError> {
        Ok(LocationRepository::new(self.db).find_all().await?)
    }

    pub async fn rename(&self, location_id: i32, name: &str) -> Result<Location, AppError> {
        let name = validate_name(name)?;

        if !LocationRepository::new(self.db)
            .rename(location_id, name)
            .await?
        {
            return Err(location_not_found());
        }

        self.find_location(location_id).await
    }

    /// Replaces the weekdays on which the location can be booked. An empty list opens
    /// it every day.
    pub async fn set_valid_days(
        &self,
        location_id: i32,
        days: &[i32],
    ) -> Result<Location, AppError> {
        validate_days(days)?;
        self.find_location(location_id).await?;

        let txn = self.db.begin().await?;
        LocationRepository::new(&txn)
            .replace_valid_days(location_id, days)
            .await?;
        txn.commit().await?;

        self.find_location(location_id).await
    }

    pub async fn set_disabled_dates(
        &self,
        location_id: i32,
        dates: &[NaiveDate],
    ) -> Result<Location, AppError> {
        self.find_location(location_id).await?;

        let txn = self.db.begin().await?;
        LocationRepository::new(&txn)
            .replace_disabled_dates(location_id, dates)
            .await?;
        txn.commit().await?;

        self.find_location(location_id).await
    }

    pub async fn add_time_slot(
        &self,
        location_id: i32,
        times: SlotTimes,
    ) -> Result<TimeSlot, AppError> {
        self.find_location(location_id).await?;

        let entity = TimeSlotRepository::new(self.db)
            .create(location_id, times)
            .await?;

        Ok(TimeSlot::from_entity(entity, false))
    }

    /// Every location with its time slots.
    ///
    /// A time slot counts as reserved when some reservation at the same location uses
    /// a daily slot with identical start and end times.
    pub async fn with_time_slots(&self) -> Result<Vec<LocationWithTimeSlots>, AppError> {
        let locations = LocationRepository::new(self.db).find_all().await?;
        let time_slot_repo = TimeSlotRepository::new(self.db);
        let reservation_repo = ReservationRepository::new(self.db);

        let mut result = Vec::with_capacity(locations.len());
        for location in locations {
            let reserved: HashSet<SlotTimes> = reservation_repo
                .reserved_slots_at(location.id)
                .await?
                .into_iter()
                .map(|slot| slot.times)
                .collect();

            let time_slots = time_slot_repo
                .find_by_location(location.id)
                .await?
                .into_iter()
                .map(|entity| {
                    let times = SlotTimes {
                        start: entity.start_hour,
                        end: entity.end_hour,
                    };
                    TimeSlot::from_entity(entity, reserved.contains(&times))
                })
                .collect();

            result.push(LocationWithTimeSlots {
                id: location.id,
                name: location.name,
                time_slots,
            });
        }

        Ok(result)
    }

    pub async fn add_daily_slot(
        &self,
        location_id: i32,
        day_of_week: i32,
        times: SlotTimes,
    ) -> Result<DailySlot, AppError> {
        let day_of_week = validate_day_of_week(day_of_week)?;
        self.find_location(location_id).await?;

        Ok(DailySlotRepository::new(self.db)
            .create(location_id, day_of_week, times)
            .await?)
    }

    /// Daily slots of a location grouped by weekday, both ascending.
    pub async fn daily_slots_by_day(
        &self,
        location_id: i32,
    ) -> Result<Vec<(i32, Vec<DailySlot>)>, AppError> {
        self.find_location(location_id).await?;

        let mut groups: BTreeMap<i32, Vec<DailySlot>> = BTreeMap::new();
        for slot in DailySlotRepository::new(self.db)
            .find_by_location(location_id)
            .await?
        {
            groups.entry(slot.day_of_week).or_default().push(slot);
        }

        Ok(groups.into_iter().collect())
    }

    /// Replaces the daily slots of one location and weekday with `times`.
    ///
    /// Slots whose times appear in the new set keep their id and reservations. Slots
    /// that disappear must not carry any reservation.
    ///
    /// # Returns
    /// - `Ok(Vec<DailySlot>)` - The slots of that weekday after the update
    /// - `Err(AppError::NotFound)` - Location does not exist
    /// - `Err(AppError::BadRequest)` - Invalid weekday or a removed slot is reserved
    pub async fn replace_daily_slots(
        &self,
        location_id: i32,
        day_of_week: i32,
        times: Vec<SlotTimes>,
    ) -> Result<Vec<DailySlot>, AppError> {
        let day_of_week = validate_day_of_week(day_of_week)?;
        self.find_location(location_id).await?;

        let wanted: HashSet<SlotTimes> = times.into_iter().collect();

        let txn = self.db.begin().await?;
        let slot_repo = DailySlotRepository::new(&txn);
        let existing = slot_repo
            .find_by_location_and_day(location_id, day_of_week)
            .await?;

        let kept: HashSet<SlotTimes> = existing
            .iter()
            .filter(|slot| wanted.contains(&slot.times))
            .map(|slot| slot.times)
            .collect();
        let removed: Vec<i32> = existing
            .iter()
            .filter(|slot| !wanted.contains(&slot.times))
            .map(|slot| slot.id)
            .collect();

        if ReservationRepository::new(&txn)
            .count_for_slots(&removed)
            .await?
            > 0
        {
            return Err(AppError::BadRequest(
                "Slots that carry reservations cannot be removed".to_string(),
            ));
        }

        slot_repo.delete_many(&removed).await?;

        let mut added: Vec<SlotTimes> = wanted.difference(&kept).copied().collect();
        added.sort_by_key(|times| (times.start, times.end));
        for times in added {
            slot_repo.create(location_id, day_of_week, times).await?;
        }

        let slots = slot_repo
            .find_by_location_and_day(location_id, day_of_week)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Replaced daily slots of location {} on day {}: {} slot(s), {} removed",
            location_id,
            day_of_week,
            slots.len(),
            removed.len()
        );

        Ok(slots)
    }

    /// Blocks daily slots of a location on one date. Already blocked slots are skipped.
    pub async fn disable_slots(
        &self,
        location_id: i32,
        slot_ids: &[i32],
        date: NaiveDate,
    ) -> Result<(), AppError> {
        self.find_location(location_id).await?;

        let slots = DailySlotRepository::new(self.db)
            .find_by_ids(slot_ids)
            .await?;
        let known: HashSet<i32> = slots
            .iter()
            .filter(|slot| slot.location_id == location_id)
            .map(|slot| slot.id)
            .collect();

        if let Some(unknown) = slot_ids.iter().find(|id| !known.contains(id)) {
            return Err(AppError::BadRequest(format!(
                "Daily slot {} does not belong to this location",
                unknown
            )));
        }

        DisabledSlotRepository::new(self.db)
            .disable_many(location_id, slot_ids, date)
            .await?;

        Ok(())
    }

    async fn find_location(&self, location_id: i32) -> Result<Location, AppError> {
        LocationRepository::new(self.db)
            .find_by_id(location_id)
            .await?
            .ok_or_else(location_not_found)
    }
}

fn location_not_found() -> AppError {
    AppError::NotFound("Location not found".to_string())
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(AppError::BadRequest("Location name is required".to_string()));
    }

    Ok(name.to_string())
}

fn validate_days(days: &[i32]) -> Result<(), AppError> {
    for day in days {
        validate_day_of_week(*day)?;
    }

    Ok(())
}
