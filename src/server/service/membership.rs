//! Club membership workflow.
//!
//! Students apply, the club advisor or president approves or rejects, and staff hand
//! the presidency from one member to another. The presidency swap runs in a single
//! transaction: the current president is demoted before the new one is promoted, so
//! the one-president partial unique index never sees two presidents at once.

use entity::sea_orm_active_enums::{MembershipRole, MembershipStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        club::ClubRepository, club_membership::ClubMembershipRepository,
        club_permission::ClubPermissionRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        club::Club,
        membership::{Application, ClubMember, ClubMembership, MemberDetails, Membership, WhoAmI},
        notification::{kind, CreateNotificationParams},
        user::User,
    },
    service::notification::NotificationService,
};

pub struct MembershipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a pending membership application and notifies the club staff.
    ///
    /// # Returns
    /// - `Ok(ClubMembership)` - The pending application
    /// - `Err(AppError::NotFound)` - Club does not exist
    /// - `Err(AppError::Conflict)` - Already a member, or an application is pending
    pub async fn apply(
        &self,
        applicant: &User,
        club_id: i32,
    ) -> Result<ClubMembership, AppError> {
        let club = self.find_club(club_id).await?;
        let membership_repo = ClubMembershipRepository::new(self.db);

        if let Some(existing) = membership_repo
            .find_by_club_and_user(club_id, applicant.id)
            .await?
        {
            return Err(match existing.status {
                MembershipStatus::Approved => {
                    AppError::Conflict("You are already a member of this club".to_string())
                }
                MembershipStatus::Pending => AppError::Conflict(
                    "Your application to this club is already pending".to_string(),
                ),
            });
        }

        let membership = membership_repo
            .create_pending(club_id, applicant.id)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "You already applied to this club"))?;

        let mut recipients = Vec::new();
        if let Some(advisor_id) = club.advisor_id {
            recipients.push(advisor_id);
        }
        if let Some(president) = membership_repo.find_president(club_id).await? {
            if !recipients.contains(&president.user_id) {
                recipients.push(president.user_id);
            }
        }

        let notifications = NotificationService::new(self.db);
        for user_id in recipients {
            notifications
                .send(CreateNotificationParams {
                    user_id,
                    title: "New membership application".to_string(),
                    message: format!(
                        "{} {} applied to join {}",
                        applicant.name, applicant.surname, club.name
                    ),
                    kind: kind::MEMBERSHIP_REQUEST,
                    related_id: Some(membership.id),
                })
                .await;
        }

        Ok(ClubMembership {
            membership,
            club_name: club.name,
        })
    }

    /// Approves a pending application and recounts the club's members.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The approved membership
    /// - `Err(AppError::NotFound)` - No pending application with that id
    /// - `Err(AuthError::AccessDenied)` - Actor is not admin, club advisor or president
    pub async fn approve(&self, membership_id: i32, actor: &User) -> Result<Membership, AppError> {
        let application = self.find_pending(membership_id).await?;
        self.ensure_can_manage_members(actor, application.club_id)
            .await?;

        let txn = self.db.begin().await?;
        let membership = ClubMembershipRepository::new(&txn)
            .set_status(membership_id, MembershipStatus::Approved)
            .await?;
        ClubRepository::new(&txn)
            .refresh_member_count(membership.club_id)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "User {} approved membership {} of user {} in club {}",
            actor.id,
            membership.id,
            membership.user_id,
            membership.club_id
        );

        Ok(membership)
    }

    /// Rejects a pending application by deleting it.
    pub async fn reject(&self, membership_id: i32, actor: &User) -> Result<(), AppError> {
        let application = self.find_pending(membership_id).await?;
        self.ensure_can_manage_members(actor, application.club_id)
            .await?;

        ClubMembershipRepository::new(self.db)
            .delete(membership_id)
            .await?;

        tracing::info!(
            "User {} rejected membership {} of user {} in club {}",
            actor.id,
            application.id,
            application.user_id,
            application.club_id
        );

        Ok(())
    }

    /// Leaves a club. Presidents must hand over the presidency first.
    ///
    /// # Returns
    /// - `Ok(())` - Membership removed
    /// - `Err(AppError::NotFound)` - No membership with that id
    /// - `Err(AuthError::AccessDenied)` - Membership belongs to someone else
    /// - `Err(AppError::Conflict)` - Membership not approved, or held by the president
    pub async fn leave(&self, membership_id: i32, user_id: i32) -> Result<(), AppError> {
        let membership = ClubMembershipRepository::new(self.db)
            .find_by_id(membership_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Membership not found".to_string()))?;

        if membership.user_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                "You can only leave clubs through your own membership".to_string(),
            )
            .into());
        }

        if !membership.is_approved() {
            return Err(AppError::Conflict(
                "Only approved memberships can be left".to_string(),
            ));
        }

        if membership.is_president() {
            return Err(AppError::Conflict(
                "The club president cannot leave the club, hand over the presidency first"
                    .to_string(),
            ));
        }

        self.delete_and_recount(&membership).await?;

        tracing::info!("User {} left club {}", user_id, membership.club_id);

        Ok(())
    }

    /// Removes an approved member from a club.
    ///
    /// Only admins and the club president may remove members, and the president
    /// cannot be removed.
    pub async fn remove_member(&self, membership_id: i32, actor: &User) -> Result<(), AppError> {
        let membership = ClubMembershipRepository::new(self.db)
            .find_by_id(membership_id)
            .await?
            .filter(Membership::is_approved)
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        if !actor.is_admin()
            && !ClubPermissionRepository::new(self.db)
                .is_club_president(actor.id, membership.club_id)
                .await?
        {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Only the club president can remove members".to_string(),
            )
            .into());
        }

        if membership.is_president() {
            return Err(AppError::Conflict(
                "The club president cannot be removed".to_string(),
            ));
        }

        self.delete_and_recount(&membership).await?;

        tracing::info!(
            "User {} removed user {} from club {}",
            actor.id,
            membership.user_id,
            membership.club_id
        );

        Ok(())
    }

    /// Makes the member holding `membership_id` president of its club.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The promoted membership
    /// - `Err(AuthError::AccessDenied)` - Actor is neither admin nor advisor
    /// - `Err(AppError::NotFound)` - No approved membership with that id
    /// - `Err(AppError::Conflict)` - Target is not a plain `member`, or already
    ///   presides here or elsewhere
    pub async fn set_president(
        &self,
        membership_id: i32,
        actor: &User,
    ) -> Result<Membership, AppError> {
        Self::ensure_staff(actor)?;

        let membership = ClubMembershipRepository::new(self.db)
            .find_by_id(membership_id)
            .await?
            .filter(Membership::is_approved)
            .ok_or_else(|| AppError::NotFound("Approved membership not found".to_string()))?;

        if membership.is_president() {
            return Err(AppError::Conflict(
                "User is already the president of this club".to_string(),
            ));
        }

        if membership.role != MembershipRole::Member {
            return Err(AppError::Conflict(
                "Only members can become president".to_string(),
            ));
        }

        self.ensure_not_president_elsewhere(membership.user_id)
            .await?;

        let club = self.find_club(membership.club_id).await?;

        self.swap_president(&club, &membership, actor).await
    }

    /// Hands the presidency of a club to one of its approved members.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The promoted membership
    /// - `Err(AuthError::AccessDenied)` - Actor is neither admin nor advisor
    /// - `Err(AppError::NotFound)` - Club does not exist
    /// - `Err(AppError::Conflict)` - Target is not an approved `member`, or already
    ///   presides here or elsewhere
    pub async fn change_president(
        &self,
        club_id: i32,
        new_president_user_id: i32,
        actor: &User,
    ) -> Result<Membership, AppError> {
        Self::ensure_staff(actor)?;

        let club = self.find_club(club_id).await?;

        let target = ClubMembershipRepository::new(self.db)
            .find_by_club_and_user(club_id, new_president_user_id)
            .await?
            .filter(Membership::is_approved)
            .ok_or_else(|| {
                AppError::Conflict("User is not an approved member of this club".to_string())
            })?;

        if target.role == MembershipRole::President {
            return Err(AppError::Conflict(
                "User is already the president of this club".to_string(),
            ));
        }

        if target.role != MembershipRole::Member {
            return Err(AppError::Conflict(
                "Only members can become president".to_string(),
            ));
        }

        self.ensure_not_president_elsewhere(new_president_user_id)
            .await?;

        self.swap_president(&club, &target, actor).await
    }

    /// Pending applications filed by the user.
    pub async fn my_applications(&self, user_id: i32) -> Result<Vec<ClubMembership>, AppError> {
        Ok(ClubMembershipRepository::new(self.db)
            .find_by_user(user_id, MembershipStatus::Pending)
            .await?)
    }

    pub async fn whoami(&self, user_id: i32) -> Result<WhoAmI, AppError> {
        let repo = ClubMembershipRepository::new(self.db);

        let memberships = repo
            .find_by_user(user_id, MembershipStatus::Approved)
            .await?;
        let pending_memberships = repo
            .find_by_user(user_id, MembershipStatus::Pending)
            .await?;
        let is_president_of_any_club = repo.find_presidency(user_id).await?.is_some();

        Ok(WhoAmI {
            memberships,
            pending_memberships,
            is_president_of_any_club,
        })
    }

    /// Pending applications to clubs the user advises or presides over.
    pub async fn pending_for_advisor(&self, user_id: i32) -> Result<Vec<Application>, AppError> {
        let permission_repo = ClubPermissionRepository::new(self.db);

        let mut club_ids = permission_repo.advised_club_ids(user_id).await?;
        club_ids.extend(permission_repo.presided_club_ids(user_id).await?);
        club_ids.sort_unstable();
        club_ids.dedup();

        Ok(ClubMembershipRepository::new(self.db)
            .find_pending_for_clubs(&club_ids)
            .await?)
    }

    /// Pending applications to the club the user presides over.
    pub async fn pending_for_led_clubs(&self, user_id: i32) -> Result<Vec<Application>, AppError> {
        let club_ids = ClubPermissionRepository::new(self.db)
            .presided_club_ids(user_id)
            .await?;

        Ok(ClubMembershipRepository::new(self.db)
            .find_pending_for_clubs(&club_ids)
            .await?)
    }

    pub async fn club_members(&self, club_id: i32) -> Result<Vec<ClubMember>, AppError> {
        self.find_club(club_id).await?;

        Ok(ClubMembershipRepository::new(self.db)
            .find_approved_by_club(club_id)
            .await?)
    }

    /// Profile of a club member with all their approved memberships.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown user, or user without approved membership
    pub async fn member_details(&self, user_id: i32) -> Result<MemberDetails, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let memberships = ClubMembershipRepository::new(self.db)
            .find_by_user(user_id, MembershipStatus::Approved)
            .await?;

        if memberships.is_empty() {
            return Err(AppError::NotFound(
                "User is not a member of any club".to_string(),
            ));
        }

        Ok(MemberDetails { user, memberships })
    }

    /// Whether the club has exactly one approved president.
    pub async fn validate_president(&self, club_id: i32) -> Result<bool, AppError> {
        self.find_club(club_id).await?;

        let count = ClubMembershipRepository::new(self.db)
            .count_presidents(club_id)
            .await?;

        Ok(count == 1)
    }

    /// Current president of the club.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Club does not exist or has no president
    pub async fn president_of(&self, club_id: i32) -> Result<ClubMember, AppError> {
        self.find_club(club_id).await?;

        let membership = ClubMembershipRepository::new(self.db)
            .find_president(club_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Club has no president".to_string()))?;

        let user = UserRepository::new(self.db)
            .find_by_id(membership.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(ClubMember { membership, user })
    }

    async fn swap_president(
        &self,
        club: &Club,
        target: &Membership,
        actor: &User,
    ) -> Result<Membership, AppError> {
        let txn = self.db.begin().await?;
        let repo = ClubMembershipRepository::new(&txn);

        let previous = repo.find_president(club.id).await?;
        if let Some(previous) = &previous {
            repo.set_role(previous.id, MembershipRole::Member).await?;
        }

        let promoted = repo
            .set_role(target.id, MembershipRole::President)
            .await
            .map_err(|e| {
                AppError::conflict_on_unique(e, "The presidency changed concurrently, try again")
            })?;

        txn.commit().await?;

        tracing::info!(
            "User {} made user {} president of club {} (previous: {:?})",
            actor.id,
            promoted.user_id,
            club.id,
            previous.as_ref().map(|p| p.user_id)
        );

        let notifications = NotificationService::new(self.db);
        notifications
            .send(CreateNotificationParams {
                user_id: promoted.user_id,
                title: "Presidency assigned".to_string(),
                message: format!("You are now the president of {}", club.name),
                kind: kind::MEMBERSHIP,
                related_id: Some(club.id),
            })
            .await;

        if let Some(previous) = previous {
            notifications
                .send(CreateNotificationParams {
                    user_id: previous.user_id,
                    title: "Presidency handed over".to_string(),
                    message: format!(
                        "You are no longer the president of {} and remain a member",
                        club.name
                    ),
                    kind: kind::MEMBERSHIP,
                    related_id: Some(club.id),
                })
                .await;
        }

        Ok(promoted)
    }

    async fn delete_and_recount(&self, membership: &Membership) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        ClubMembershipRepository::new(&txn)
            .delete(membership.id)
            .await?;
        ClubRepository::new(&txn)
            .refresh_member_count(membership.club_id)
            .await?;
        txn.commit().await?;

        Ok(())
    }

    async fn find_club(&self, club_id: i32) -> Result<Club, AppError> {
        ClubRepository::new(self.db)
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Club not found".to_string()))
    }

    async fn find_pending(&self, membership_id: i32) -> Result<Membership, AppError> {
        ClubMembershipRepository::new(self.db)
            .find_by_id(membership_id)
            .await?
            .filter(Membership::is_pending)
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
    }

    async fn ensure_can_manage_members(&self, actor: &User, club_id: i32) -> Result<(), AppError> {
        if actor.is_admin() {
            return Ok(());
        }

        if ClubPermissionRepository::new(self.db)
            .can_manage_members(actor.id, club_id)
            .await?
        {
            return Ok(());
        }

        Err(AuthError::AccessDenied(
            actor.id,
            "Only the club advisor or president can review applications".to_string(),
        )
        .into())
    }

    async fn ensure_not_president_elsewhere(&self, user_id: i32) -> Result<(), AppError> {
        if ClubMembershipRepository::new(self.db)
            .find_presidency(user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "User is already the president of another club".to_string(),
            ));
        }

        Ok(())
    }

    fn ensure_staff(actor: &User) -> Result<(), AppError> {
        if actor.is_admin() || actor.is_advisor() {
            return Ok(());
        }

        Err(AuthError::AccessDenied(
            actor.id,
            "Only admins and advisors can assign a club president".to_string(),
        )
        .into())
    }
}
