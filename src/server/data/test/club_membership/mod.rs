use entity::sea_orm_active_enums::{MembershipRole, MembershipStatus};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::club_membership::ClubMembershipRepository;

mod find_by_user;
mod find_pending_for_clubs;
mod set_role;
