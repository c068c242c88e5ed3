use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::EventStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventDto {
    pub club_id: i32,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub max_participants: i32,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventDto {
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub max_participants: i32,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecisionDto {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewEventDto {
    pub status: ReviewDecisionDto,
    pub reject_reason: Option<String>,
}

/// Where an event stands relative to now and its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventTimingDto {
    Full,
    Upcoming,
    Ongoing,
    Completed,
    Scheduled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub club_id: i32,
    pub club_name: String,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub max_participants: i32,
    pub participant_count: u64,
    pub category: Option<String>,
    #[schema(value_type = String, example = "advisor_pending")]
    pub status: EventStatus,
    pub reject_reason: Option<String>,
    pub timing: EventTimingDto,
    pub is_participating: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Whether a finished event's result report has been handed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResultReportStatusDto {
    Uploaded,
    NotUploaded,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompletedEventDto {
    #[serde(flatten)]
    pub event: EventDto,
    pub result_report_document_id: Option<String>,
    pub result_report_status: ResultReportStatusDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParticipationDto {
    pub event_id: i32,
    pub is_participating: bool,
    pub participant_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParticipantDto {
    pub user_id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventQueryDto {
    pub club_id: Option<i32>,
    pub search: Option<String>,
}
