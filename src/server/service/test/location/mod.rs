use chrono::{NaiveDate, NaiveTime};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::location::{CreateLocationParams, SlotTimes},
    service::location::LocationService,
};

mod with_time_slots;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 7).unwrap()
}

fn times(start: u32, end: u32) -> SlotTimes {
    SlotTimes {
        start: NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
        end: NaiveTime::from_hms_opt(end, 0, 0).unwrap(),
    }
}
