use super::*;

mod require_staff;

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated
/// user with a valid database record is granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.role, UserRole::Student);

    Ok(())
}

/// Tests that if any permission fails, the whole check fails.
///
/// Verifies that an advisor passes the staff check but is stopped by the
/// admin check that follows it.
///
/// Expected: Err(AuthError::AccessDenied) for the admin permission
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let advisor = factory::create_user_with_role(db, UserRole::Advisor).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(advisor.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::Staff, Permission::Admin])
        .await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, msg)) => {
            assert_eq!(user_id, advisor.id);
            assert!(msg.contains("admin"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests clearing the session logs the user out.
///
/// Expected: Err(AuthError::UserNotInSession) after `clear`
#[tokio::test]
async fn cleared_session_is_unauthenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    auth_session.clear().await;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
