use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::club::ClubRepository;

mod refresh_member_count;
