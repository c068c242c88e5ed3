//! Event domain models and parameters.
//!
//! Events move through a two-stage review: the club advisor first, then an admin.
//! Only approved events accept participants.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::EventStatus;

use crate::{
    model::event::{
        CompletedEventDto, CreateEventDto, EventDto, EventQueryDto, EventTimingDto,
        ParticipantDto, ParticipationDto, ResultReportStatusDto, ReviewDecisionDto,
        ReviewEventDto, UpdateEventDto,
    },
    server::model::user::User,
};

/// How far ahead an event counts as upcoming.
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Days after the end date during which the result report can be uploaded.
const RESULT_REPORT_WINDOW_DAYS: i64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub club_id: i32,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub max_participants: i32,
    pub category: Option<String>,
    pub status: EventStatus,
    pub reject_reason: Option<String>,
    pub result_report_document_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            club_id: entity.club_id,
            name: entity.name,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
            max_participants: entity.max_participants,
            category: entity.category,
            status: entity.status,
            reject_reason: entity.reject_reason,
            result_report_document_id: entity.result_report_document_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.end_date <= now
    }

    /// State of the post-event result report.
    ///
    /// The report is due within 15 days of the end date; after that a missing report
    /// counts as expired.
    pub fn result_report_status(&self, now: DateTime<Utc>) -> ResultReportStatusDto {
        if self.result_report_document_id.is_some() {
            ResultReportStatusDto::Uploaded
        } else if now > self.end_date + Duration::days(RESULT_REPORT_WINDOW_DAYS) {
            ResultReportStatusDto::Expired
        } else {
            ResultReportStatusDto::NotUploaded
        }
    }
}

/// Event enriched with the data listing endpoints show.
#[derive(Debug, Clone, PartialEq)]
pub struct EventView {
    pub event: Event,
    pub club_name: String,
    pub participant_count: u64,
    /// Whether the requesting user is registered.
    pub is_participating: bool,
}

impl EventView {
    /// Classifies the event relative to `now`.
    ///
    /// A full event reports `Full` regardless of its dates.
    pub fn timing(&self, now: DateTime<Utc>) -> EventTimingDto {
        let event = &self.event;

        if self.participant_count >= event.max_participants.max(0) as u64 {
            EventTimingDto::Full
        } else if event.start_date > now
            && event.start_date <= now + Duration::days(UPCOMING_WINDOW_DAYS)
        {
            EventTimingDto::Upcoming
        } else if event.start_date <= now && event.end_date > now {
            EventTimingDto::Ongoing
        } else if event.end_date <= now {
            EventTimingDto::Completed
        } else {
            EventTimingDto::Scheduled
        }
    }

    pub fn into_dto(self, now: DateTime<Utc>) -> EventDto {
        let timing = self.timing(now);
        let event = self.event;

        EventDto {
            id: event.id,
            club_id: event.club_id,
            club_name: self.club_name,
            name: event.name,
            description: event.description,
            start_date: event.start_date,
            end_date: event.end_date,
            max_participants: event.max_participants,
            participant_count: self.participant_count,
            category: event.category,
            status: event.status,
            reject_reason: event.reject_reason,
            timing,
            is_participating: self.is_participating,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }

    /// DTO for the completed-events listing, with the result report state.
    pub fn into_completed_dto(self, now: DateTime<Utc>) -> CompletedEventDto {
        let result_report_status = self.event.result_report_status(now);
        let result_report_document_id = self.event.result_report_document_id.clone();

        CompletedEventDto {
            event: self.into_dto(now),
            result_report_document_id,
            result_report_status,
        }
    }
}

/// Fields shared by event creation and update.
#[derive(Debug, Clone)]
pub struct EventDetailsParams {
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub max_participants: i32,
    pub category: Option<String>,
}

impl EventDetailsParams {
    pub fn from_dto(dto: UpdateEventDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            max_participants: dto.max_participants,
            category: dto.category,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub club_id: i32,
    pub details: EventDetailsParams,
}

impl CreateEventParams {
    pub fn from_dto(dto: CreateEventDto) -> Self {
        Self {
            club_id: dto.club_id,
            details: EventDetailsParams {
                name: dto.name,
                description: dto.description,
                start_date: dto.start_date,
                end_date: dto.end_date,
                max_participants: dto.max_participants,
                category: dto.category,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub club_id: Option<i32>,
    /// Case-insensitive substring of the event name.
    pub search: Option<String>,
}

impl EventFilter {
    pub fn from_dto(dto: EventQueryDto) -> Self {
        Self {
            club_id: dto.club_id,
            search: dto.search.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Outcome of a review step.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewDecision {
    Approve,
    Reject { reason: Option<String> },
}

impl ReviewDecision {
    pub fn from_dto(dto: ReviewEventDto) -> Self {
        match dto.status {
            ReviewDecisionDto::Approved => Self::Approve,
            ReviewDecisionDto::Rejected => Self::Reject {
                reason: dto.reject_reason,
            },
        }
    }
}

/// Registration state of a user after joining or leaving an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Participation {
    pub event_id: i32,
    pub is_participating: bool,
    pub participant_count: u64,
}

impl Participation {
    pub fn into_dto(self) -> ParticipationDto {
        ParticipationDto {
            event_id: self.event_id,
            is_participating: self.is_participating,
            participant_count: self.participant_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub user: User,
    pub registered_at: DateTime<Utc>,
}

impl Participant {
    pub fn into_dto(self) -> ParticipantDto {
        ParticipantDto {
            user_id: self.user.id,
            name: self.user.name,
            surname: self.user.surname,
            email: self.user.email,
            registered_at: self.registered_at,
        }
    }
}
