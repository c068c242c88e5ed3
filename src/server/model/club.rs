use chrono::{DateTime, Utc};

/// A club as the services see it.
///
/// `member_count` mirrors the number of approved memberships and is recomputed by
/// the repository whenever a membership changes state.
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub advisor_id: Option<i32>,
    pub member_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Club {
    pub fn from_entity(entity: entity::club::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            advisor_id: entity.advisor_id,
            member_count: entity.member_count,
            created_at: entity.created_at,
        }
    }
}
