//! Club permission repository.
//!
//! Answers "may this user act for this club" questions from club advisorship and
//! approved memberships. System admins are not handled here; callers check the
//! system role before asking.

use entity::sea_orm_active_enums::{MembershipRole, MembershipStatus};
use sea_orm::{
    sea_query::Condition, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QuerySelect,
};

pub struct ClubPermissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubPermissionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Whether the user advises the club.
    ///
    /// True when the club names the user as its advisor, or when the user holds an
    /// approved `advisor` membership in it.
    pub async fn is_club_advisor(&self, user_id: i32, club_id: i32) -> Result<bool, DbErr> {
        let named = entity::prelude::Club::find()
            .filter(entity::club::Column::Id.eq(club_id))
            .filter(entity::club::Column::AdvisorId.eq(user_id))
            .count(self.db)
            .await?;

        if named > 0 {
            return Ok(true);
        }

        self.has_approved_role(user_id, club_id, &[MembershipRole::Advisor])
            .await
    }

    pub async fn is_club_president(&self, user_id: i32, club_id: i32) -> Result<bool, DbErr> {
        self.has_approved_role(user_id, club_id, &[MembershipRole::President])
            .await
    }

    /// Advisor or president: may approve, reject and remove members.
    pub async fn can_manage_members(&self, user_id: i32, club_id: i32) -> Result<bool, DbErr> {
        Ok(self.is_club_advisor(user_id, club_id).await?
            || self.is_club_president(user_id, club_id).await?)
    }

    /// President or leader: may create and edit the club's events.
    pub async fn can_manage_events(&self, user_id: i32, club_id: i32) -> Result<bool, DbErr> {
        self.has_approved_role(
            user_id,
            club_id,
            &[MembershipRole::President, MembershipRole::Leader],
        )
        .await
    }

    /// Ids of the clubs the user advises, by `advisor_id` or advisor membership.
    pub async fn advised_club_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let mut ids: Vec<i32> = entity::prelude::Club::find()
            .select_only()
            .column(entity::club::Column::Id)
            .filter(entity::club::Column::AdvisorId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await?;

        ids.extend(
            self.club_ids_with_roles(user_id, &[MembershipRole::Advisor])
                .await?,
        );
        ids.sort_unstable();
        ids.dedup();

        Ok(ids)
    }

    /// Ids of the clubs where the user is the approved president.
    pub async fn presided_club_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        self.club_ids_with_roles(user_id, &[MembershipRole::President])
            .await
    }

    /// Ids of the clubs whose events the user may manage as president or leader.
    pub async fn led_club_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        self.club_ids_with_roles(user_id, &[MembershipRole::President, MembershipRole::Leader])
            .await
    }

    async fn has_approved_role(
        &self,
        user_id: i32,
        club_id: i32,
        roles: &[MembershipRole],
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::ClubMembership::find()
            .filter(
                Condition::all()
                    .add(entity::club_membership::Column::UserId.eq(user_id))
                    .add(entity::club_membership::Column::ClubId.eq(club_id))
                    .add(entity::club_membership::Column::Status.eq(MembershipStatus::Approved))
                    .add(entity::club_membership::Column::Role.is_in(roles.iter().copied())),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn club_ids_with_roles(
        &self,
        user_id: i32,
        roles: &[MembershipRole],
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ClubMembership::find()
            .select_only()
            .column(entity::club_membership::Column::ClubId)
            .filter(entity::club_membership::Column::UserId.eq(user_id))
            .filter(entity::club_membership::Column::Status.eq(MembershipStatus::Approved))
            .filter(entity::club_membership::Column::Role.is_in(roles.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await
    }
}
