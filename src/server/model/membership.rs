//! Membership domain models.
//!
//! A membership ties one user to one club with a status (`pending` until staff
//! approve it) and a role inside the club. The views below pair a membership with the
//! club or user data the API responses need.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{MembershipRole, MembershipStatus};

use crate::{
    model::membership::{
        ApplicationDto, ClubMemberDto, MemberDetailsDto, MembershipDto, WhoAmIDto,
    },
    server::model::user::User,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub id: i32,
    pub club_id: i32,
    pub user_id: i32,
    pub status: MembershipStatus,
    pub role: MembershipRole,
    pub joined_at: DateTime<Utc>,
}

impl Membership {
    pub fn from_entity(entity: entity::club_membership::Model) -> Self {
        Self {
            id: entity.id,
            club_id: entity.club_id,
            user_id: entity.user_id,
            status: entity.status,
            role: entity.role,
            joined_at: entity.joined_at,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == MembershipStatus::Approved
    }

    pub fn is_pending(&self) -> bool {
        self.status == MembershipStatus::Pending
    }

    /// Approved membership holding the president role.
    pub fn is_president(&self) -> bool {
        self.is_approved() && self.role == MembershipRole::President
    }
}

/// Membership with the name of its club.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubMembership {
    pub membership: Membership,
    pub club_name: String,
}

impl ClubMembership {
    pub fn into_dto(self) -> MembershipDto {
        MembershipDto {
            id: self.membership.id,
            club_id: self.membership.club_id,
            club_name: self.club_name,
            status: self.membership.status,
            role: self.membership.role,
            joined_at: self.membership.joined_at,
        }
    }
}

/// Pending application with applicant and club details for reviewers.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub membership: Membership,
    pub club_name: String,
    pub applicant: User,
}

impl Application {
    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.membership.id,
            club_id: self.membership.club_id,
            club_name: self.club_name,
            user_id: self.applicant.id,
            name: self.applicant.name,
            surname: self.applicant.surname,
            email: self.applicant.email,
            joined_at: self.membership.joined_at,
        }
    }
}

/// Approved member of a club.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubMember {
    pub membership: Membership,
    pub user: User,
}

impl ClubMember {
    pub fn into_dto(self) -> ClubMemberDto {
        ClubMemberDto {
            membership_id: self.membership.id,
            user_id: self.user.id,
            name: self.user.name,
            surname: self.user.surname,
            role: self.membership.role,
            joined_at: self.membership.joined_at,
        }
    }
}

/// Membership overview of the current user.
#[derive(Debug, Clone, PartialEq)]
pub struct WhoAmI {
    pub memberships: Vec<ClubMembership>,
    pub pending_memberships: Vec<ClubMembership>,
    pub is_president_of_any_club: bool,
}

impl WhoAmI {
    pub fn into_dto(self) -> WhoAmIDto {
        WhoAmIDto {
            memberships: self.memberships.into_iter().map(|m| m.into_dto()).collect(),
            pending_memberships: self
                .pending_memberships
                .into_iter()
                .map(|m| m.into_dto())
                .collect(),
            is_president_of_any_club: self.is_president_of_any_club,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberDetails {
    pub user: User,
    pub memberships: Vec<ClubMembership>,
}

impl MemberDetails {
    pub fn into_dto(self) -> MemberDetailsDto {
        MemberDetailsDto {
            user_id: self.user.id,
            name: self.user.name,
            surname: self.user.surname,
            email: self.user.email,
            role: self.user.role,
            created_at: self.user.created_at,
            memberships: self.memberships.into_iter().map(|m| m.into_dto()).collect(),
        }
    }
}
