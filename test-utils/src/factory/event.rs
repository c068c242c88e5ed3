//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::EventStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventFactory::new(&db, club.id)
///     .status(EventStatus::AdminPending)
///     .max_participants(2)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    name: String,
    description: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    max_participants: i32,
    category: Option<String>,
    status: EventStatus,
    result_report_document_id: Option<String>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {id}"`
    /// - start_date: 7 days from now, lasting 2 hours
    /// - max_participants: `50`
    /// - status: `EventStatus::AdvisorPending`
    pub fn new(db: &'a DatabaseConnection, club_id: i32) -> Self {
        let id = next_id();
        let start_date = Utc::now() + Duration::days(7);
        Self {
            db,
            club_id,
            name: format!("Event {}", id),
            description: "Test event description".to_string(),
            start_date,
            end_date: start_date + Duration::hours(2),
            max_participants: 50,
            category: None,
            status: EventStatus::AdvisorPending,
            result_report_document_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets both timestamps.
    pub fn dates(mut self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn max_participants(mut self, max_participants: i32) -> Self {
        self.max_participants = max_participants;
        self
    }

    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the result report as uploaded under the given document id.
    pub fn result_report(mut self, document_id: impl Into<String>) -> Self {
        self.result_report_document_id = Some(document_id.into());
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            club_id: ActiveValue::Set(self.club_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            max_participants: ActiveValue::Set(self.max_participants),
            category: ActiveValue::Set(self.category),
            status: ActiveValue::Set(self.status),
            reject_reason: ActiveValue::Set(None),
            result_report_document_id: ActiveValue::Set(self.result_report_document_id),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `advisor_pending` event for the club.
pub async fn create_event(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, club_id).build().await
}
