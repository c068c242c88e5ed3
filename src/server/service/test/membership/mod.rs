use entity::sea_orm_active_enums::{MembershipRole, MembershipStatus, UserRole};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{club::ClubRepository, notification::NotificationRepository},
    error::{auth::AuthError, AppError},
    model::{notification::kind, user::User},
    service::membership::MembershipService,
};

mod apply;
mod approve;
mod change_president;
mod reject;
mod set_president;

fn user(entity: entity::user::Model) -> User {
    User::from_entity(entity)
}

async fn membership_row(
    db: &sea_orm::DatabaseConnection,
    membership_id: i32,
) -> Result<Option<entity::club_membership::Model>, DbErr> {
    entity::prelude::ClubMembership::find_by_id(membership_id)
        .one(db)
        .await
}
