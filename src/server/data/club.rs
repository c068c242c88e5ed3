//! Club data repository.

use entity::sea_orm_active_enums::MembershipStatus;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::club::Club;

pub struct ClubRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, club_id: i32) -> Result<Option<Club>, DbErr> {
        let entity = entity::prelude::Club::find_by_id(club_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Club::from_entity))
    }

    /// Finds all clubs whose id is in `club_ids`, ordered by name.
    pub async fn find_by_ids(&self, club_ids: &[i32]) -> Result<Vec<Club>, DbErr> {
        if club_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Club::find()
            .filter(entity::club::Column::Id.is_in(club_ids.iter().copied()))
            .order_by_asc(entity::club::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Club::from_entity).collect())
    }

    /// Clubs whose `advisor_id` is the given user.
    pub async fn find_advised_by(&self, user_id: i32) -> Result<Vec<Club>, DbErr> {
        let entities = entity::prelude::Club::find()
            .filter(entity::club::Column::AdvisorId.eq(user_id))
            .order_by_asc(entity::club::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Club::from_entity).collect())
    }

    /// Recomputes `member_count` from the approved memberships of the club.
    ///
    /// # Returns
    /// - `Ok(count)` - The stored member count
    /// - `Err(DbErr)` - Database error during count or update
    pub async fn refresh_member_count(&self, club_id: i32) -> Result<i32, DbErr> {
        let count = entity::prelude::ClubMembership::find()
            .filter(entity::club_membership::Column::ClubId.eq(club_id))
            .filter(entity::club_membership::Column::Status.eq(MembershipStatus::Approved))
            .count(self.db)
            .await? as i32;

        entity::prelude::Club::update_many()
            .filter(entity::club::Column::Id.eq(club_id))
            .col_expr(entity::club::Column::MemberCount, Expr::value(count))
            .exec(self.db)
            .await?;

        Ok(count)
    }
}
