use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{MembershipRole, MembershipStatus, UserRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplyDto {
    pub club_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangePresidentDto {
    pub new_president_user_id: i32,
}

/// A membership as seen by its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MembershipDto {
    pub id: i32,
    pub club_id: i32,
    pub club_name: String,
    #[schema(value_type = String, example = "approved")]
    pub status: MembershipStatus,
    #[schema(value_type = String, example = "member")]
    pub role: MembershipRole,
    pub joined_at: DateTime<Utc>,
}

/// A pending application as seen by club staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub club_id: i32,
    pub club_name: String,
    pub user_id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClubMemberDto {
    pub membership_id: i32,
    pub user_id: i32,
    pub name: String,
    pub surname: String,
    #[schema(value_type = String, example = "member")]
    pub role: MembershipRole,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WhoAmIDto {
    pub memberships: Vec<MembershipDto>,
    pub pending_memberships: Vec<MembershipDto>,
    pub is_president_of_any_club: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberDetailsDto {
    pub user_id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    #[schema(value_type = String, example = "student")]
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub memberships: Vec<MembershipDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PresidentValidationDto {
    pub club_id: i32,
    pub has_single_president: bool,
}
