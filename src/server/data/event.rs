//! Event data repository.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EventStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::event::{CreateEventParams, Event, EventDetailsParams, EventFilter};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an event awaiting advisor review.
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let details = params.details;

        let entity = entity::event::ActiveModel {
            club_id: ActiveValue::Set(params.club_id),
            name: ActiveValue::Set(details.name),
            description: ActiveValue::Set(details.description),
            start_date: ActiveValue::Set(details.start_date),
            end_date: ActiveValue::Set(details.end_date),
            max_participants: ActiveValue::Set(details.max_participants),
            category: ActiveValue::Set(details.category),
            status: ActiveValue::Set(EventStatus::AdvisorPending),
            reject_reason: ActiveValue::Set(None),
            result_report_document_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn find_by_id(&self, event_id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Event::from_entity))
    }

    /// Lists events matching the filter, soonest first.
    pub async fn find_filtered(&self, filter: EventFilter) -> Result<Vec<Event>, DbErr> {
        let mut query = entity::prelude::Event::find();

        if let Some(club_id) = filter.club_id {
            query = query.filter(entity::event::Column::ClubId.eq(club_id));
        }

        if let Some(search) = filter.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                query = query.filter(entity::event::Column::Name.contains(search));
            }
        }

        let entities = query
            .order_by_asc(entity::event::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    /// Events of the given clubs, optionally narrowed to one status. Newest first.
    pub async fn find_by_clubs(
        &self,
        club_ids: &[i32],
        status: Option<EventStatus>,
    ) -> Result<Vec<Event>, DbErr> {
        if club_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::Event::find()
            .filter(entity::event::Column::ClubId.is_in(club_ids.iter().copied()));

        if let Some(status) = status {
            query = query.filter(entity::event::Column::Status.eq(status));
        }

        let entities = query
            .order_by_desc(entity::event::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    /// Events in the given status across all clubs. Newest first.
    pub async fn find_by_status(&self, status: EventStatus) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::Status.eq(status))
            .order_by_desc(entity::event::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    pub async fn find_all(&self) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    /// Replaces the editable fields of an event and stamps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Event)` - The updated event
    /// - `Err(DbErr::RecordNotFound)` - No event with that id
    pub async fn update(&self, event_id: i32, details: EventDetailsParams) -> Result<Event, DbErr> {
        let mut active_model = self.find_active(event_id).await?;
        active_model.name = ActiveValue::Set(details.name);
        active_model.description = ActiveValue::Set(details.description);
        active_model.start_date = ActiveValue::Set(details.start_date);
        active_model.end_date = ActiveValue::Set(details.end_date);
        active_model.max_participants = ActiveValue::Set(details.max_participants);
        active_model.category = ActiveValue::Set(details.category);
        active_model.updated_at = ActiveValue::Set(Some(Utc::now()));

        Ok(Event::from_entity(active_model.update(self.db).await?))
    }

    /// Moves an event from `from` to `to` and stamps `updated_at`.
    ///
    /// The status check is part of the UPDATE, so two reviews racing on the same
    /// event cannot both apply.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - The event after the transition
    /// - `Ok(None)` - No event with that id is in status `from`
    pub async fn set_status(
        &self,
        event_id: i32,
        from: EventStatus,
        to: EventStatus,
        reject_reason: Option<String>,
    ) -> Result<Option<Event>, DbErr> {
        let result = entity::prelude::Event::update_many()
            .set(entity::event::ActiveModel {
                status: ActiveValue::Set(to),
                reject_reason: ActiveValue::Set(reject_reason),
                updated_at: ActiveValue::Set(Some(Utc::now())),
                ..Default::default()
            })
            .filter(entity::event::Column::Id.eq(event_id))
            .filter(entity::event::Column::Status.eq(from))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(event_id).await
    }

    /// Completed events of a club, latest end date first.
    pub async fn find_completed_by_club(
        &self,
        club_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::ClubId.eq(club_id))
            .filter(entity::event::Column::EndDate.lt(now))
            .order_by_desc(entity::event::Column::EndDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    pub async fn delete(&self, event_id: i32) -> Result<(), DbErr> {
        entity::prelude::Event::delete_by_id(event_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn find_active(&self, event_id: i32) -> Result<entity::event::ActiveModel, DbErr> {
        let event = entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Event with id {} not found",
                event_id
            )))?;

        Ok(event.into())
    }
}
