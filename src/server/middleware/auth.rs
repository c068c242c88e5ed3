use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{club_permission::ClubPermissionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// System role `admin`.
    Admin,
    /// System role `admin` or `advisor`.
    Staff,
    /// Admin, the club's advisor or its approved president.
    ManageClub(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::AccessDenied)` - First permission the user lacks
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "This operation requires admin permissions".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Staff => {
                    if !user.is_admin() && !user.is_advisor() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "This operation requires admin or advisor permissions".to_string(),
                        )
                        .into());
                    }
                }
                Permission::ManageClub(club_id) => {
                    if user.is_admin() {
                        continue;
                    }

                    let permission_repo = ClubPermissionRepository::new(self.db);
                    if !permission_repo.can_manage_members(user_id, *club_id).await? {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("You do not manage club {}", club_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
