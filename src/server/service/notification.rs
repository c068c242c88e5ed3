use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{CreateNotificationParams, Notification},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Notifications of the user, newest first.
    pub async fn list(&self, user_id: i32) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .find_by_user(user_id)
            .await?)
    }

    /// Marks one of the user's notifications read.
    ///
    /// # Returns
    /// - `Ok(())` - Notification marked read
    /// - `Err(AppError::NotFound)` - No such notification for this user
    pub async fn mark_read(&self, notification_id: i32, user_id: i32) -> Result<(), AppError> {
        let updated = NotificationRepository::new(self.db)
            .mark_read(notification_id, user_id)
            .await?;

        if !updated {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }

    /// Queues a notification, logging instead of failing when the insert fails.
    ///
    /// Used after the triggering change is committed so a notification problem never
    /// undoes or fails the operation the user asked for.
    pub async fn send(&self, params: CreateNotificationParams) {
        let user_id = params.user_id;

        if let Err(e) = NotificationRepository::new(self.db).create(params).await {
            tracing::warn!("Failed to queue notification for user {}: {}", user_id, e);
        }
    }
}
