//! Event management and the two-stage approval workflow.
//!
//! New events wait for the club advisor (`advisor_pending`), then for an admin
//! (`admin_pending`), before they are `approved`. Either reviewer may reject, which
//! also releases every slot the event had reserved.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{EventStatus, UserRole};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        club::ClubRepository, club_permission::ClubPermissionRepository,
        event::EventRepository, event_participant::EventParticipantRepository,
        reservation::ReservationRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        club::Club,
        event::{
            CreateEventParams, Event, EventDetailsParams, EventFilter, EventView, Participant,
            Participation, ReviewDecision,
        },
        reservation::Reservation,
        user::User,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event awaiting advisor review.
    ///
    /// # Returns
    /// - `Ok(EventView)` - The created event
    /// - `Err(AppError::NotFound)` - Club does not exist
    /// - `Err(AuthError::AccessDenied)` - Actor is not admin, club president or leader
    /// - `Err(AppError::BadRequest)` - Invalid name, dates or capacity
    pub async fn create(
        &self,
        params: CreateEventParams,
        actor: &User,
    ) -> Result<EventView, AppError> {
        let club = self.find_club(params.club_id).await?;
        self.ensure_can_manage_events(actor, club.id).await?;
        let details = validate_details(params.details, Utc::now())?;

        let event = EventRepository::new(self.db)
            .create(CreateEventParams {
                club_id: club.id,
                details,
            })
            .await?;

        tracing::info!(
            "User {} created event {} for club {}",
            actor.id,
            event.id,
            club.id
        );

        Ok(EventView {
            event,
            club_name: club.name,
            participant_count: 0,
            is_participating: false,
        })
    }

    /// Lists events, soonest first.
    pub async fn list(&self, filter: EventFilter, viewer_id: i32) -> Result<Vec<EventView>, AppError> {
        let events = EventRepository::new(self.db).find_filtered(filter).await?;

        self.into_views(events, viewer_id).await
    }

    pub async fn get(&self, event_id: i32, viewer_id: i32) -> Result<EventView, AppError> {
        let event = self.find_event(event_id).await?;

        self.into_view(event, viewer_id).await
    }

    /// Replaces the details of an event that has not started yet.
    pub async fn update(
        &self,
        event_id: i32,
        details: EventDetailsParams,
        actor: &User,
    ) -> Result<EventView, AppError> {
        let now = Utc::now();
        let event = self.find_event(event_id).await?;
        self.ensure_can_manage_events(actor, event.club_id).await?;
        ensure_not_started(&event, now)?;
        let details = validate_details(details, now)?;

        let event = EventRepository::new(self.db)
            .update(event_id, details)
            .await?;

        self.into_view(event, actor.id).await
    }

    /// Deletes an event that has not started yet, with its reservations and
    /// registrations.
    pub async fn delete(&self, event_id: i32, actor: &User) -> Result<(), AppError> {
        let event = self.find_event(event_id).await?;
        self.ensure_can_manage_events(actor, event.club_id).await?;
        ensure_not_started(&event, Utc::now())?;

        let txn = self.db.begin().await?;
        let released = ReservationRepository::new(&txn)
            .delete_by_event(event_id)
            .await?;
        EventParticipantRepository::new(&txn)
            .delete_by_event(event_id)
            .await?;
        EventRepository::new(&txn).delete(event_id).await?;
        txn.commit().await?;

        tracing::info!(
            "User {} deleted event {} releasing {} reservation(s)",
            actor.id,
            event_id,
            released
        );

        Ok(())
    }

    /// Registers the user for an approved event that has room left.
    ///
    /// # Returns
    /// - `Ok(Participation)` - Registration stored
    /// - `Err(AppError::NotFound)` - Event does not exist
    /// - `Err(AppError::Conflict)` - Event not approved, ended, full, or already joined
    pub async fn join(&self, event_id: i32, user_id: i32) -> Result<Participation, AppError> {
        let event = self.find_event(event_id).await?;
        let participant_repo = EventParticipantRepository::new(self.db);

        if event.status != EventStatus::Approved {
            return Err(AppError::Conflict(
                "Only approved events accept participants".to_string(),
            ));
        }

        if event.has_ended(Utc::now()) {
            return Err(AppError::Conflict("The event has already ended".to_string()));
        }

        if participant_repo.is_participating(event_id, user_id).await? {
            return Err(AppError::Conflict(
                "You are already registered for this event".to_string(),
            ));
        }

        if participant_repo.count(event_id).await? >= event.max_participants.max(0) as u64 {
            return Err(AppError::Conflict("The event is full".to_string()));
        }

        participant_repo
            .add(event_id, user_id)
            .await
            .map_err(|e| {
                AppError::conflict_on_unique(e, "You are already registered for this event")
            })?;

        Ok(Participation {
            event_id,
            is_participating: true,
            participant_count: participant_repo.count(event_id).await?,
        })
    }

    pub async fn leave(&self, event_id: i32, user_id: i32) -> Result<Participation, AppError> {
        self.find_event(event_id).await?;
        let participant_repo = EventParticipantRepository::new(self.db);

        if !participant_repo.remove(event_id, user_id).await? {
            return Err(AppError::NotFound(
                "You are not registered for this event".to_string(),
            ));
        }

        Ok(Participation {
            event_id,
            is_participating: false,
            participant_count: participant_repo.count(event_id).await?,
        })
    }

    pub async fn participants(&self, event_id: i32) -> Result<Vec<Participant>, AppError> {
        self.find_event(event_id).await?;

        Ok(EventParticipantRepository::new(self.db)
            .find_by_event(event_id)
            .await?)
    }

    pub async fn reservations(&self, event_id: i32) -> Result<Vec<Reservation>, AppError> {
        self.find_event(event_id).await?;

        Ok(ReservationRepository::new(self.db)
            .find_by_event(event_id)
            .await?)
    }

    /// Events the actor is responsible for: every event for admins, otherwise the
    /// events of clubs the actor advises or leads.
    pub async fn managed(&self, actor: &User) -> Result<Vec<EventView>, AppError> {
        let event_repo = EventRepository::new(self.db);

        let events = if actor.is_admin() {
            event_repo.find_all().await?
        } else {
            let permission_repo = ClubPermissionRepository::new(self.db);
            let mut club_ids = permission_repo.advised_club_ids(actor.id).await?;
            club_ids.extend(permission_repo.led_club_ids(actor.id).await?);
            club_ids.sort_unstable();
            club_ids.dedup();

            event_repo.find_by_clubs(&club_ids, None).await?
        };

        self.into_views(events, actor.id).await
    }

    /// Events waiting for the actor's review.
    ///
    /// Advisors see `advisor_pending` events of the clubs they advise; admins see
    /// every `admin_pending` event.
    pub async fn pending(&self, actor: &User) -> Result<Vec<EventView>, AppError> {
        let event_repo = EventRepository::new(self.db);

        let events = if actor.is_admin() {
            event_repo.find_by_status(EventStatus::AdminPending).await?
        } else if actor.is_advisor() {
            let club_ids = ClubPermissionRepository::new(self.db)
                .advised_club_ids(actor.id)
                .await?;
            event_repo
                .find_by_clubs(&club_ids, Some(EventStatus::AdvisorPending))
                .await?
        } else {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Only advisors and admins review events".to_string(),
            )
            .into());
        };

        self.into_views(events, actor.id).await
    }

    /// Applies one review step.
    ///
    /// Advisors move `advisor_pending` events of clubs they advise to
    /// `admin_pending`; admins move `admin_pending` events to `approved`. Either may
    /// reject at their own stage. Rejection deletes the event's reservations in the
    /// same transaction as the status change.
    ///
    /// # Returns
    /// - `Ok(EventView)` - The reviewed event
    /// - `Err(AppError::NotFound)` - Event does not exist
    /// - `Err(AuthError::AccessDenied)` - Actor may not review this event
    /// - `Err(AppError::Conflict)` - Event is not at the actor's review stage, or
    ///   another review changed it first
    pub async fn review(
        &self,
        event_id: i32,
        decision: ReviewDecision,
        actor: &User,
    ) -> Result<EventView, AppError> {
        let event = self.find_event(event_id).await?;

        let (stage, approved_status) = if actor.is_admin() {
            (EventStatus::AdminPending, EventStatus::Approved)
        } else if actor.is_advisor() {
            if !ClubPermissionRepository::new(self.db)
                .is_club_advisor(actor.id, event.club_id)
                .await?
            {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    "You do not advise the club organising this event".to_string(),
                )
                .into());
            }
            (EventStatus::AdvisorPending, EventStatus::AdminPending)
        } else {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Only advisors and admins review events".to_string(),
            )
            .into());
        };

        if event.status != stage {
            return Err(AppError::Conflict(format!(
                "Event is not awaiting this review (current status: {:?})",
                event.status
            )));
        }

        let stale = || {
            AppError::Conflict("Event was reviewed by someone else in the meantime".to_string())
        };

        let event = match decision {
            ReviewDecision::Approve => EventRepository::new(self.db)
                .set_status(event_id, stage, approved_status, None)
                .await?
                .ok_or_else(stale)?,
            ReviewDecision::Reject { reason } => {
                let reason = reason
                    .map(|r| r.trim().to_string())
                    .filter(|r| !r.is_empty());

                let txn = self.db.begin().await?;
                let event = EventRepository::new(&txn)
                    .set_status(event_id, stage, EventStatus::Rejected, reason)
                    .await?
                    .ok_or_else(stale)?;
                let released = ReservationRepository::new(&txn)
                    .delete_by_event(event_id)
                    .await?;
                txn.commit().await?;

                tracing::info!(
                    "Event {} rejected, released {} reservation(s)",
                    event_id,
                    released
                );

                event
            }
        };

        tracing::info!(
            "User {} reviewed event {}, status is now {:?}",
            actor.id,
            event_id,
            event.status
        );

        self.into_view(event, actor.id).await
    }

    /// Ended events of a club, latest end date first.
    ///
    /// Open to admins, advisors and leaders, who follow up on result reports.
    ///
    /// # Returns
    /// - `Ok(Vec<EventView>)` - Ended events of the club
    /// - `Err(AuthError::AccessDenied)` - Actor is a student
    /// - `Err(AppError::NotFound)` - Club does not exist
    pub async fn completed(&self, club_id: i32, actor: &User) -> Result<Vec<EventView>, AppError> {
        if !matches!(
            actor.role,
            UserRole::Admin | UserRole::Advisor | UserRole::Leader
        ) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Only admins, advisors and leaders can list completed events".to_string(),
            )
            .into());
        }

        let club = self.find_club(club_id).await?;

        let events = EventRepository::new(self.db)
            .find_completed_by_club(club.id, Utc::now())
            .await?;

        self.into_views(events, actor.id).await
    }

    async fn into_view(&self, event: Event, viewer_id: i32) -> Result<EventView, AppError> {
        let mut views = self.into_views(vec![event], viewer_id).await?;

        views
            .pop()
            .ok_or_else(|| AppError::InternalError("Event view was not built".to_string()))
    }

    async fn into_views(
        &self,
        events: Vec<Event>,
        viewer_id: i32,
    ) -> Result<Vec<EventView>, AppError> {
        let participant_repo = EventParticipantRepository::new(self.db);

        let mut club_ids: Vec<i32> = events.iter().map(|e| e.club_id).collect();
        club_ids.sort_unstable();
        club_ids.dedup();

        let club_names: HashMap<i32, String> = ClubRepository::new(self.db)
            .find_by_ids(&club_ids)
            .await?
            .into_iter()
            .map(|club| (club.id, club.name))
            .collect();

        let mut views = Vec::with_capacity(events.len());
        for event in events {
            let participant_count = participant_repo.count(event.id).await?;
            let is_participating = participant_repo
                .is_participating(event.id, viewer_id)
                .await?;

            views.push(EventView {
                club_name: club_names.get(&event.club_id).cloned().unwrap_or_default(),
                event,
                participant_count,
                is_participating,
            });
        }

        Ok(views)
    }

    async fn find_event(&self, event_id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    async fn find_club(&self, club_id: i32) -> Result<Club, AppError> {
        ClubRepository::new(self.db)
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Club not found".to_string()))
    }

    /// Admins, or the club's approved president or leader.
    async fn ensure_can_manage_events(
        &self,
        actor: &User,
        club_id: i32,
    ) -> Result<(), AppError> {
        if actor.is_admin()
            || ClubPermissionRepository::new(self.db)
                .can_manage_events(actor.id, club_id)
                .await?
        {
            return Ok(());
        }

        Err(AuthError::AccessDenied(
            actor.id,
            "Only the club president or leader can manage its events".to_string(),
        )
        .into())
    }
}

fn ensure_not_started(event: &Event, now: DateTime<Utc>) -> Result<(), AppError> {
    if event.start_date <= now {
        return Err(AppError::BadRequest(
            "Events that have already started cannot be changed".to_string(),
        ));
    }

    Ok(())
}

fn validate_details(
    mut details: EventDetailsParams,
    now: DateTime<Utc>,
) -> Result<EventDetailsParams, AppError> {
    details.name = details.name.trim().to_string();

    if details.name.is_empty() {
        return Err(AppError::BadRequest("Event name is required".to_string()));
    }

    if details.start_date <= now {
        return Err(AppError::BadRequest(
            "Event must start in the future".to_string(),
        ));
    }

    if details.end_date <= details.start_date {
        return Err(AppError::BadRequest(
            "Event must end after it starts".to_string(),
        ));
    }

    if details.max_participants <= 0 {
        return Err(AppError::BadRequest(
            "Event needs room for at least one participant".to_string(),
        ));
    }

    details.category = details
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    Ok(details)
}
