//! Club membership factory.

use chrono::Utc;
use entity::sea_orm_active_enums::{MembershipRole, MembershipStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating memberships with customizable status and role.
///
/// # Example
///
/// ```rust,ignore
/// let membership = MembershipFactory::new(&db, club.id, user.id)
///     .status(MembershipStatus::Approved)
///     .role(MembershipRole::Leader)
///     .build()
///     .await?;
/// ```
pub struct MembershipFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    user_id: i32,
    status: MembershipStatus,
    role: MembershipRole,
}

impl<'a> MembershipFactory<'a> {
    /// Creates a new MembershipFactory for a pending `member` application.
    pub fn new(db: &'a DatabaseConnection, club_id: i32, user_id: i32) -> Self {
        Self {
            db,
            club_id,
            user_id,
            status: MembershipStatus::Pending,
            role: MembershipRole::Member,
        }
    }

    pub fn status(mut self, status: MembershipStatus) -> Self {
        self.status = status;
        self
    }

    pub fn role(mut self, role: MembershipRole) -> Self {
        self.role = role;
        self
    }

    /// Builds and inserts the membership entity into the database.
    ///
    /// Does not touch the club's `member_count`.
    pub async fn build(self) -> Result<entity::club_membership::Model, DbErr> {
        entity::club_membership::ActiveModel {
            id: ActiveValue::NotSet,
            club_id: ActiveValue::Set(self.club_id),
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            role: ActiveValue::Set(self.role),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending `member` application.
pub async fn create_pending_membership(
    db: &DatabaseConnection,
    club_id: i32,
    user_id: i32,
) -> Result<entity::club_membership::Model, DbErr> {
    MembershipFactory::new(db, club_id, user_id).build().await
}

/// Creates an approved `member` membership.
pub async fn create_member(
    db: &DatabaseConnection,
    club_id: i32,
    user_id: i32,
) -> Result<entity::club_membership::Model, DbErr> {
    MembershipFactory::new(db, club_id, user_id)
        .status(MembershipStatus::Approved)
        .build()
        .await
}

/// Creates an approved `president` membership.
pub async fn create_president(
    db: &DatabaseConnection,
    club_id: i32,
    user_id: i32,
) -> Result<entity::club_membership::Model, DbErr> {
    MembershipFactory::new(db, club_id, user_id)
        .status(MembershipStatus::Approved)
        .role(MembershipRole::President)
        .build()
        .await
}
