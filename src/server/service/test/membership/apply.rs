use super::*;

/// Tests a student applying to a club with an advisor and a president.
///
/// Verifies that the application is stored as a pending member row and that
/// both club staff members receive a membership request notification.
///
/// Expected: Ok with one notification each for advisor and president
#[tokio::test]
async fn notifies_advisor_and_president() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, president, advisor) = factory::helpers::create_club_with_staff(db).await?;
    let student = factory::create_user(db).await?;

    let application = MembershipService::new(db)
        .apply(&user(student), club.id)
        .await?;
    let membership = application.membership;

    assert_eq!(membership.status, MembershipStatus::Pending);
    assert_eq!(membership.role, MembershipRole::Member);
    assert_eq!(application.club_name, club.name);

    let notification_repo = NotificationRepository::new(db);
    for staff_id in [advisor.id, president.id] {
        let notifications = notification_repo.find_by_user(staff_id).await?;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, kind::MEMBERSHIP_REQUEST);
        assert_eq!(notifications[0].related_id, Some(membership.id));
    }

    Ok(())
}

/// Tests applying twice to the same club.
///
/// Expected: Err(Conflict) on the second application
#[tokio::test]
async fn rejects_duplicate_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let student = user(factory::create_user(db).await?);
    let service = MembershipService::new(db);

    service.apply(&student, club.id).await?;
    let result = service.apply(&student, club.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests an approved member applying again.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_existing_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let student = factory::create_user(db).await?;
    factory::create_member(db, club.id, student.id).await?;

    let result = MembershipService::new(db)
        .apply(&user(student), club.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests applying to a club that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_club() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_user(db).await?;

    let result = MembershipService::new(db).apply(&user(student), 999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
