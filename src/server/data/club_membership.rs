//! Club membership data repository.
//!
//! The `club_membership` table carries three uniqueness rules enforced by the
//! database: one row per (club, user), one approved president per club and one
//! approved presidency per user. Inserts and role updates that break them fail with a
//! unique constraint violation which the service layer reports as a conflict.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::{MembershipRole, MembershipStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::club::ClubRepository,
    model::{
        membership::{Application, ClubMember, ClubMembership, Membership},
        user::User,
    },
};

pub struct ClubMembershipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubMembershipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, membership_id: i32) -> Result<Option<Membership>, DbErr> {
        let entity = entity::prelude::ClubMembership::find_by_id(membership_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Membership::from_entity))
    }

    pub async fn find_by_club_and_user(
        &self,
        club_id: i32,
        user_id: i32,
    ) -> Result<Option<Membership>, DbErr> {
        let entity = entity::prelude::ClubMembership::find()
            .filter(entity::club_membership::Column::ClubId.eq(club_id))
            .filter(entity::club_membership::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Membership::from_entity))
    }

    /// Inserts a pending `member` application.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The created application
    /// - `Err(DbErr)` - Unique violation when the user already has a row for the club,
    ///   or another database error
    pub async fn create_pending(&self, club_id: i32, user_id: i32) -> Result<Membership, DbErr> {
        let entity = entity::club_membership::ActiveModel {
            club_id: ActiveValue::Set(club_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(MembershipStatus::Pending),
            role: ActiveValue::Set(MembershipRole::Member),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Membership::from_entity(entity))
    }

    /// Sets the status of a membership.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The updated membership
    /// - `Err(DbErr::RecordNotFound)` - No membership with that id
    pub async fn set_status(
        &self,
        membership_id: i32,
        status: MembershipStatus,
    ) -> Result<Membership, DbErr> {
        let mut active_model = self.find_active(membership_id).await?;
        active_model.status = ActiveValue::Set(status);

        Ok(Membership::from_entity(active_model.update(self.db).await?))
    }

    /// Sets the club role of a membership.
    ///
    /// Promoting to president fails with a unique violation while another approved
    /// president exists for the club, or while the user presides over another club.
    pub async fn set_role(
        &self,
        membership_id: i32,
        role: MembershipRole,
    ) -> Result<Membership, DbErr> {
        let mut active_model = self.find_active(membership_id).await?;
        active_model.role = ActiveValue::Set(role);

        Ok(Membership::from_entity(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, membership_id: i32) -> Result<(), DbErr> {
        entity::prelude::ClubMembership::delete_by_id(membership_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Approved president of a club, if any.
    pub async fn find_president(&self, club_id: i32) -> Result<Option<Membership>, DbErr> {
        let entity = entity::prelude::ClubMembership::find()
            .filter(entity::club_membership::Column::ClubId.eq(club_id))
            .filter(entity::club_membership::Column::Role.eq(MembershipRole::President))
            .filter(entity::club_membership::Column::Status.eq(MembershipStatus::Approved))
            .one(self.db)
            .await?;

        Ok(entity.map(Membership::from_entity))
    }

    /// Approved presidency held by a user in any club.
    pub async fn find_presidency(&self, user_id: i32) -> Result<Option<Membership>, DbErr> {
        let entity = entity::prelude::ClubMembership::find()
            .filter(entity::club_membership::Column::UserId.eq(user_id))
            .filter(entity::club_membership::Column::Role.eq(MembershipRole::President))
            .filter(entity::club_membership::Column::Status.eq(MembershipStatus::Approved))
            .one(self.db)
            .await?;

        Ok(entity.map(Membership::from_entity))
    }

    pub async fn count_presidents(&self, club_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ClubMembership::find()
            .filter(entity::club_membership::Column::ClubId.eq(club_id))
            .filter(entity::club_membership::Column::Role.eq(MembershipRole::President))
            .filter(entity::club_membership::Column::Status.eq(MembershipStatus::Approved))
            .count(self.db)
            .await
    }

    /// Memberships of a user in the given status, each with its club name.
    ///
    /// Ordered by join time, newest first.
    pub async fn find_by_user(
        &self,
        user_id: i32,
        status: MembershipStatus,
    ) -> Result<Vec<ClubMembership>, DbErr> {
        let rows = entity::prelude::ClubMembership::find()
            .filter(entity::club_membership::Column::UserId.eq(user_id))
            .filter(entity::club_membership::Column::Status.eq(status))
            .order_by_desc(entity::club_membership::Column::JoinedAt)
            .find_also_related(entity::prelude::Club)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(membership, club)| ClubMembership {
                membership: Membership::from_entity(membership),
                club_name: club.map(|c| c.name).unwrap_or_default(),
            })
            .collect())
    }

    /// Pending applications to any of the given clubs, oldest first.
    pub async fn find_pending_for_clubs(
        &self,
        club_ids: &[i32],
    ) -> Result<Vec<Application>, DbErr> {
        if club_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::ClubMembership::find()
            .filter(entity::club_membership::Column::ClubId.is_in(club_ids.iter().copied()))
            .filter(entity::club_membership::Column::Status.eq(MembershipStatus::Pending))
            .order_by_asc(entity::club_membership::Column::JoinedAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let club_names: HashMap<i32, String> = ClubRepository::new(self.db)
            .find_by_ids(club_ids)
            .await?
            .into_iter()
            .map(|club| (club.id, club.name))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|(membership, user)| {
                let applicant = User::from_entity(user?);
                let membership = Membership::from_entity(membership);
                let club_name = club_names
                    .get(&membership.club_id)
                    .cloned()
                    .unwrap_or_default();

                Some(Application {
                    membership,
                    club_name,
                    applicant,
                })
            })
            .collect())
    }

    /// Approved members of a club with their user details, oldest first.
    pub async fn find_approved_by_club(&self, club_id: i32) -> Result<Vec<ClubMember>, DbErr> {
        let rows = entity::prelude::ClubMembership::find()
            .filter(entity::club_membership::Column::ClubId.eq(club_id))
            .filter(entity::club_membership::Column::Status.eq(MembershipStatus::Approved))
            .order_by_asc(entity::club_membership::Column::JoinedAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(membership, user)| {
                Some(ClubMember {
                    membership: Membership::from_entity(membership),
                    user: User::from_entity(user?),
                })
            })
            .collect())
    }

    async fn find_active(
        &self,
        membership_id: i32,
    ) -> Result<entity::club_membership::ActiveModel, DbErr> {
        let membership = entity::prelude::ClubMembership::find_by_id(membership_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Membership with id {} not found",
                membership_id
            )))?;

        Ok(membership.into())
    }
}
