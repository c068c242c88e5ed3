use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::disabled_slot::DisabledSlotRepository;
