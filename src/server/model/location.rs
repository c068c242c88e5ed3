//! Facility catalog domain models.
//!
//! A location is bookable on its valid weekdays (every day when none are configured)
//! except on its disabled dates. Daily slots recur weekly per location and weekday.
//! Time slots form a fixed catalog that is listed but never booked.

use chrono::{NaiveDate, NaiveTime};

use crate::{
    model::reservation::{
        DailySlotDto, DailySlotStatusDto, LocationDto, LocationWithTimeSlotsDto, TimeSlotDto,
    },
    server::util::parse::{day_of_week, format_time},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: i32,
    pub name: String,
    /// Weekdays 0 (Monday) to 6 (Sunday), ascending.
    pub valid_days: Vec<i32>,
    /// Ascending.
    pub disabled_dates: Vec<NaiveDate>,
}

impl Location {
    pub fn from_entity(
        entity: entity::location::Model,
        valid_days: Vec<entity::location_valid_day::Model>,
        disabled_dates: Vec<entity::location_disabled_date::Model>,
    ) -> Self {
        let mut valid_days: Vec<i32> = valid_days.into_iter().map(|d| d.day_of_week).collect();
        valid_days.sort_unstable();

        let mut disabled_dates: Vec<NaiveDate> =
            disabled_dates.into_iter().map(|d| d.date).collect();
        disabled_dates.sort_unstable();

        Self {
            id: entity.id,
            name: entity.name,
            valid_days,
            disabled_dates,
        }
    }

    /// Whether the location accepts bookings on `date`.
    pub fn is_open_on(&self, date: NaiveDate) -> bool {
        if self.disabled_dates.contains(&date) {
            return false;
        }

        self.valid_days.is_empty() || self.valid_days.contains(&day_of_week(date))
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            id: self.id,
            name: self.name,
            valid_days: self.valid_days,
            disabled_dates: self.disabled_dates,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateLocationParams {
    pub name: String,
    pub valid_days: Vec<i32>,
    pub disabled_dates: Vec<NaiveDate>,
}

/// Start and end of a slot, start strictly before end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotTimes {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailySlot {
    pub id: i32,
    pub location_id: i32,
    pub day_of_week: i32,
    pub times: SlotTimes,
}

impl DailySlot {
    pub fn from_entity(entity: entity::daily_slot::Model) -> Self {
        Self {
            id: entity.id,
            location_id: entity.location_id,
            day_of_week: entity.day_of_week,
            times: SlotTimes {
                start: entity.start_hour,
                end: entity.end_hour,
            },
        }
    }

    pub fn into_dto(self) -> DailySlotDto {
        DailySlotDto {
            id: self.id,
            location_id: self.location_id,
            day_of_week: self.day_of_week,
            start_time: format_time(self.times.start),
            end_time: format_time(self.times.end),
        }
    }
}

/// Daily slot annotated with whether it can be booked on a given date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySlotStatus {
    pub slot: DailySlot,
    pub enabled: bool,
}

impl DailySlotStatus {
    pub fn into_dto(self) -> DailySlotStatusDto {
        DailySlotStatusDto {
            id: self.slot.id,
            start_time: format_time(self.slot.times.start),
            end_time: format_time(self.slot.times.end),
            enabled: self.enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    pub id: i32,
    pub location_id: i32,
    pub times: SlotTimes,
    /// Set when a reservation at the location uses a daily slot with the same times.
    pub is_reserved: bool,
}

impl TimeSlot {
    pub fn from_entity(entity: entity::time_slot::Model, is_reserved: bool) -> Self {
        Self {
            id: entity.id,
            location_id: entity.location_id,
            times: SlotTimes {
                start: entity.start_hour,
                end: entity.end_hour,
            },
            is_reserved,
        }
    }

    pub fn into_dto(self) -> TimeSlotDto {
        TimeSlotDto {
            id: self.id,
            start_time: format_time(self.times.start),
            end_time: format_time(self.times.end),
            is_reserved: self.is_reserved,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationWithTimeSlots {
    pub id: i32,
    pub name: String,
    pub time_slots: Vec<TimeSlot>,
}

impl LocationWithTimeSlots {
    pub fn into_dto(self) -> LocationWithTimeSlotsDto {
        LocationWithTimeSlotsDto {
            id: self.id,
            name: self.name,
            time_slots: self.time_slots.into_iter().map(|s| s.into_dto()).collect(),
        }
    }
}
