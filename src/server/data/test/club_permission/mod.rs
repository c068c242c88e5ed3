use entity::sea_orm_active_enums::{MembershipRole, MembershipStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::club_permission::ClubPermissionRepository;

mod advised_club_ids;
mod can_manage_events;
mod is_club_advisor;
