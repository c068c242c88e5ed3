use chrono::NaiveDate;
use test_utils::builder::TestBuilder;

use crate::server::{
    error::AppError, model::settings::ClubCreateDates, service::settings::SettingsService,
};

mod set_club_create_dates;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 3, day).unwrap()
}
