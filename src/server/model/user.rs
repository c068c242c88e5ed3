//! User domain model.
//!
//! Accounts are created by the external authentication service; this backend only
//! reads them to resolve names and system roles.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::model::user::UserDto;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    /// System-wide role, independent of any club membership.
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_advisor(&self) -> bool {
        self.role == UserRole::Advisor
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            email: self.email,
            role: self.role,
        }
    }
}
