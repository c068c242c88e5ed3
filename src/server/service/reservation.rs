//! Booking of daily slots for events and the availability views built on them.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use entity::sea_orm_active_enums::EventStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        club_permission::ClubPermissionRepository, daily_slot::DailySlotRepository,
        disabled_slot::DisabledSlotRepository, event::EventRepository,
        location::LocationRepository, reservation::ReservationRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        location::{DailySlot, DailySlotStatus, Location},
        reservation::{LocationAvailability, Reservation, ReserveParams},
        user::User,
    },
    util::parse::{day_of_week, validate_day_of_week},
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a daily slot at a location on a date for an event.
    ///
    /// Every precondition is checked first; whether the slot is still free is decided
    /// by the (location, slot, date) unique index on insert.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The stored reservation
    /// - `Err(AppError::BadRequest)` - Event, location or slot invalid for that date
    /// - `Err(AuthError::AccessDenied)` - Actor cannot manage the event's club
    /// - `Err(AppError::Conflict)` - Slot already reserved on that date
    pub async fn reserve(
        &self,
        params: ReserveParams,
        actor: &User,
    ) -> Result<Reservation, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_id(params.event_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Event not found".to_string()))?;

        if !actor.is_admin()
            && !ClubPermissionRepository::new(self.db)
                .can_manage_events(actor.id, event.club_id)
                .await?
        {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Only the club president or leader can reserve slots for its events"
                    .to_string(),
            )
            .into());
        }

        if event.status == EventStatus::Rejected {
            return Err(AppError::BadRequest(
                "Rejected events cannot reserve slots".to_string(),
            ));
        }

        let location = LocationRepository::new(self.db)
            .find_by_id(params.location_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Location not found".to_string()))?;

        let slot = DailySlotRepository::new(self.db)
            .find_by_id(params.daily_slot_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Daily slot not found".to_string()))?;

        if slot.location_id != location.id {
            return Err(AppError::BadRequest(
                "Daily slot does not belong to this location".to_string(),
            ));
        }

        if slot.day_of_week != day_of_week(params.date) {
            return Err(AppError::BadRequest(
                "Daily slot is not offered on that weekday".to_string(),
            ));
        }

        if !location.is_open_on(params.date) {
            return Err(AppError::BadRequest(
                "Location is closed on that date".to_string(),
            ));
        }

        if DisabledSlotRepository::new(self.db)
            .is_disabled(slot.id, params.date)
            .await?
        {
            return Err(AppError::BadRequest(
                "Daily slot is disabled on that date".to_string(),
            ));
        }

        let date = params.date;
        let entity = ReservationRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| {
                AppError::conflict_on_unique(e, "This slot is already reserved for that date")
            })?;

        tracing::info!(
            "Event {} reserved slot {} at location {} on {}",
            event.id,
            slot.id,
            location.id,
            date
        );

        Ok(Reservation {
            id: entity.id,
            event_id: event.id,
            event_name: event.name,
            location_id: location.id,
            location_name: location.name,
            slot,
            reservation_date: entity.reservation_date,
        })
    }

    /// Free daily slots per location on `date`.
    ///
    /// Slots disabled or reserved that date are left out, as are locations closed
    /// that date. Locations without any free slot are omitted.
    pub async fn available_slots(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<LocationAvailability>, AppError> {
        let slots = DailySlotRepository::new(self.db)
            .find_by_day(day_of_week(date))
            .await?;
        let disabled = DisabledSlotRepository::new(self.db)
            .disabled_slot_ids_on(date)
            .await?;
        let reserved = ReservationRepository::new(self.db)
            .reserved_slot_ids_on(date)
            .await?;

        let open: HashMap<i32, Location> = LocationRepository::new(self.db)
            .find_all()
            .await?
            .into_iter()
            .filter(|location| location.is_open_on(date))
            .map(|location| (location.id, location))
            .collect();

        let mut free: BTreeMap<i32, Vec<DailySlot>> = BTreeMap::new();
        for slot in slots {
            if disabled.contains(&slot.id) || reserved.contains(&slot.id) {
                continue;
            }
            if open.contains_key(&slot.location_id) {
                free.entry(slot.location_id).or_default().push(slot);
            }
        }

        let mut result: Vec<LocationAvailability> = free
            .into_iter()
            .filter_map(|(location_id, slots)| {
                let location = open.get(&location_id)?;
                Some(LocationAvailability {
                    location_id,
                    location_name: location.name.clone(),
                    slots,
                })
            })
            .collect();
        result.sort_by(|a, b| a.location_name.cmp(&b.location_name));

        Ok(result)
    }

    /// Daily slots of one location and weekday, each flagged with whether it is
    /// enabled on `date`. Without a date every slot is enabled.
    pub async fn daily_slots_for_date(
        &self,
        location_id: i32,
        day: i32,
        date: Option<NaiveDate>,
    ) -> Result<Vec<DailySlotStatus>, AppError> {
        let day = validate_day_of_week(day)?;

        if LocationRepository::new(self.db)
            .find_by_id(location_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Location not found".to_string()));
        }

        let slots = DailySlotRepository::new(self.db)
            .find_by_location_and_day(location_id, day)
            .await?;

        let disabled = match date {
            Some(date) => {
                DisabledSlotRepository::new(self.db)
                    .disabled_slot_ids_on(date)
                    .await?
            }
            None => Default::default(),
        };

        Ok(slots
            .into_iter()
            .map(|slot| DailySlotStatus {
                enabled: !disabled.contains(&slot.id),
                slot,
            })
            .collect())
    }

    /// Every reservation, newest date first.
    pub async fn all(&self) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db).find_all().await?)
    }
}
