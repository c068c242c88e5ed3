//! Facility catalog and reservation DTOs.
//!
//! Times travel as `"HH:MM"` strings and dates as `"YYYY-MM-DD"`. Weekdays are
//! numbered 0 = Monday through 6 = Sunday.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub id: i32,
    pub name: String,
    pub valid_days: Vec<i32>,
    pub disabled_dates: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLocationDto {
    pub name: String,
    #[serde(default)]
    pub valid_days: Vec<i32>,
    #[serde(default)]
    pub disabled_dates: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RenameLocationDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidDaysDto {
    pub days: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DisabledDatesDto {
    pub dates: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlotTimesDto {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeSlotDto {
    pub id: i32,
    pub start_time: String,
    pub end_time: String,
    pub is_reserved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationWithTimeSlotsDto {
    pub id: i32,
    pub name: String,
    pub time_slots: Vec<TimeSlotDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDailySlotDto {
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateDailySlotsDto {
    pub slots: Vec<SlotTimesDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DisableSlotsDto {
    pub date: String,
    pub slot_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailySlotDto {
    pub id: i32,
    pub location_id: i32,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailySlotGroupDto {
    pub day_of_week: i32,
    pub slots: Vec<DailySlotDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailySlotStatusDto {
    pub id: i32,
    pub start_time: String,
    pub end_time: String,
    pub enabled: bool,
}

/// Optional date narrowing a slot listing.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateQueryDto {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQueryDto {
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReserveDto {
    pub event_id: i32,
    pub location_id: i32,
    pub daily_slot_id: i32,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub event_id: i32,
    pub event_name: String,
    pub location_id: i32,
    pub location_name: String,
    pub daily_slot_id: i32,
    pub start_time: String,
    pub end_time: String,
    pub reservation_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FreeSlotDto {
    pub id: i32,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationAvailabilityDto {
    pub location_id: i32,
    pub location_name: String,
    pub slots: Vec<FreeSlotDto>,
}
