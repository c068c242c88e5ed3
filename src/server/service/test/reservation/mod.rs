use chrono::{Duration, NaiveDate};
use entity::sea_orm_active_enums::{EventStatus, UserRole};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{reservation::ReserveParams, user::User},
    service::{location::LocationService, reservation::ReservationService},
};

mod reserve;

fn user(entity: entity::user::Model) -> User {
    User::from_entity(entity)
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 7).unwrap()
}
