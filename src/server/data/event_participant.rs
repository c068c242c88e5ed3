//! Event participant data repository.
//!
//! Registrations are unique per (event, user) through the composite primary key.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{event::Participant, user::User};

pub struct EventParticipantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventParticipantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a user for an event.
    ///
    /// # Returns
    /// - `Ok(())` - Registration stored
    /// - `Err(DbErr)` - Unique violation when already registered, or another database error
    pub async fn add(&self, event_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::event_participant::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            registered_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a registration.
    ///
    /// # Returns
    /// - `Ok(true)` - Registration removed
    /// - `Ok(false)` - User was not registered
    pub async fn remove(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::EventParticipant::delete_many()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .filter(entity::event_participant::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self, event_id: i32) -> Result<u64, DbErr> {
        entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .count(self.db)
            .await
    }

    pub async fn is_participating(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .filter(entity::event_participant::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Participants of an event in registration order.
    pub async fn find_by_event(&self, event_id: i32) -> Result<Vec<Participant>, DbErr> {
        let rows = entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_participant::Column::RegisteredAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(participant, user)| {
                Some(Participant {
                    user: User::from_entity(user?),
                    registered_at: participant.registered_at,
                })
            })
            .collect())
    }

    pub async fn delete_by_event(&self, event_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::EventParticipant::delete_many()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
