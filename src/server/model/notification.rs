use chrono::{DateTime, Utc};

use crate::model::notification::NotificationDto;

/// Notification kinds written by the membership workflow.
pub mod kind {
    pub const MEMBERSHIP_REQUEST: &str = "membership_request";
    pub const MEMBERSHIP: &str = "membership";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub related_id: Option<i32>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            message: entity.message,
            kind: entity.kind,
            related_id: entity.related_id,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            title: self.title,
            message: self.message,
            kind: self.kind,
            related_id: self.related_id,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

/// Parameters for queueing a notification to a single user.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub kind: &'static str,
    pub related_id: Option<i32>,
}
