//! Club factory for creating test club entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clubs with customizable fields.
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    advisor_id: Option<i32>,
    member_count: i32,
}

impl<'a> ClubFactory<'a> {
    /// Creates a new ClubFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Club {id}"`
    /// - description: `Some("Test club description")`
    /// - advisor_id: `None`
    /// - member_count: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Club {}", id),
            description: Some("Test club description".to_string()),
            advisor_id: None,
            member_count: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the advisor; the user must already exist.
    pub fn advisor_id(mut self, advisor_id: Option<i32>) -> Self {
        self.advisor_id = advisor_id;
        self
    }

    pub fn member_count(mut self, member_count: i32) -> Self {
        self.member_count = member_count;
        self
    }

    /// Builds and inserts the club entity into the database.
    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            advisor_id: ActiveValue::Set(self.advisor_id),
            member_count: ActiveValue::Set(self.member_count),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a club without an advisor.
pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).build().await
}
