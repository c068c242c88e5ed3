use super::*;

/// Tests the club advisor rejecting a pending application.
///
/// Expected: Ok with the application row deleted
#[tokio::test]
async fn deletes_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, _, advisor) = factory::helpers::create_club_with_staff(db).await?;
    let student = factory::create_user(db).await?;
    let application = factory::create_pending_membership(db, club.id, student.id).await?;

    MembershipService::new(db)
        .reject(application.id, &user(advisor))
        .await?;

    assert!(membership_row(db, application.id).await?.is_none());

    Ok(())
}

/// Tests a regular member trying to reject an application.
///
/// Expected: Err(AccessDenied) and the application stays pending
#[tokio::test]
async fn denies_regular_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, club.id, member.id).await?;
    let student = factory::create_user(db).await?;
    let application = factory::create_pending_membership(db, club.id, student.id).await?;

    let result = MembershipService::new(db)
        .reject(application.id, &user(member))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    let row = membership_row(db, application.id).await?.unwrap();
    assert_eq!(row.status, MembershipStatus::Pending);

    Ok(())
}

/// Tests rejecting a membership that was already approved.
///
/// Verifies that reject only deletes pending applications.
///
/// Expected: Err(NotFound) and the membership is kept
#[tokio::test]
async fn fails_for_approved_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user_with_role(db, UserRole::Admin).await?;
    let club = factory::create_club(db).await?;
    let member = factory::create_user(db).await?;
    let membership = factory::create_member(db, club.id, member.id).await?;

    let result = MembershipService::new(db)
        .reject(membership.id, &user(admin))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(membership_row(db, membership.id).await?.is_some());

    Ok(())
}
