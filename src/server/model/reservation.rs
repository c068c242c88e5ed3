//! Reservation domain models.

use chrono::NaiveDate;

use crate::{
    model::reservation::{FreeSlotDto, LocationAvailabilityDto, ReservationDto},
    server::{model::location::DailySlot, util::parse::format_time},
};

/// Parameters for booking a daily slot on a date.
#[derive(Debug, Clone)]
pub struct ReserveParams {
    pub event_id: i32,
    pub location_id: i32,
    pub daily_slot_id: i32,
    pub date: NaiveDate,
}

/// Reservation joined with the names and times shown in listings.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub event_id: i32,
    pub event_name: String,
    pub location_id: i32,
    pub location_name: String,
    pub slot: DailySlot,
    pub reservation_date: NaiveDate,
}

impl Reservation {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            event_id: self.event_id,
            event_name: self.event_name,
            location_id: self.location_id,
            location_name: self.location_name,
            daily_slot_id: self.slot.id,
            start_time: format_time(self.slot.times.start),
            end_time: format_time(self.slot.times.end),
            reservation_date: self.reservation_date,
        }
    }
}

/// Free slots of one location on one date, ordered by start time.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationAvailability {
    pub location_id: i32,
    pub location_name: String,
    pub slots: Vec<DailySlot>,
}

impl LocationAvailability {
    pub fn into_dto(self) -> LocationAvailabilityDto {
        LocationAvailabilityDto {
            location_id: self.location_id,
            location_name: self.location_name,
            slots: self
                .slots
                .into_iter()
                .map(|slot| FreeSlotDto {
                    id: slot.id,
                    start_time: format_time(slot.times.start),
                    end_time: format_time(slot.times.end),
                })
                .collect(),
        }
    }
}
