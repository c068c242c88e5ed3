use super::*;

/// Tests advisor passes the staff permission check.
///
/// Expected: Ok(User) with role advisor
#[tokio::test]
async fn grants_access_to_advisor() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let advisor = factory::create_user_with_role(db, UserRole::Advisor).await?;
    AuthSession::new(session).set_user_id(advisor.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Staff])
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_advisor());

    Ok(())
}

/// Tests admin passes the staff permission check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_user_with_role(db, UserRole::Admin).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Staff])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests students and leaders are not staff.
///
/// Verifies that the system role `leader` grants no staff rights on its own.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_leader() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let leader = factory::create_user_with_role(db, UserRole::Leader).await?;
    AuthSession::new(session).set_user_id(leader.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Staff])
        .await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, msg)) => {
            assert_eq!(user_id, leader.id);
            assert!(msg.contains("advisor"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}
