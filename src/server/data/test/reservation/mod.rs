use chrono::NaiveDate;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::reservation::ReservationRepository, model::reservation::ReserveParams};

mod create;
mod delete_by_event;
mod find_by_event;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 7).unwrap()
}
