use super::*;

/// Tests the club advisor handing the presidency to another member.
///
/// Verifies that the old president is demoted to member, the new one is
/// promoted, the club still has exactly one president and both users are
/// notified.
///
/// Expected: Ok with roles swapped and one notification per user
#[tokio::test]
async fn swaps_roles_and_notifies_both() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, old_president, advisor) = factory::helpers::create_club_with_staff(db).await?;
    let member = factory::create_user(db).await?;
    let member_row = factory::create_member(db, club.id, member.id).await?;

    let service = MembershipService::new(db);
    let promoted = service
        .change_president(club.id, member.id, &user(advisor))
        .await?;

    assert_eq!(promoted.id, member_row.id);
    assert_eq!(promoted.role, MembershipRole::President);
    assert!(service.validate_president(club.id).await?);
    assert_eq!(service.president_of(club.id).await?.user.id, member.id);

    let old_row = service
        .member_details(old_president.id)
        .await?
        .memberships
        .into_iter()
        .find(|m| m.membership.club_id == club.id)
        .unwrap();
    assert_eq!(old_row.membership.role, MembershipRole::Member);

    let notification_repo = NotificationRepository::new(db);
    for user_id in [member.id, old_president.id] {
        let notifications = notification_repo.find_by_user(user_id).await?;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, kind::MEMBERSHIP);
        assert_eq!(notifications[0].related_id, Some(club.id));
    }

    Ok(())
}

/// Tests promoting a user who already presides over another club.
///
/// Expected: Err(Conflict) and the current president is untouched
#[tokio::test]
async fn rejects_president_of_other_club() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, president, advisor) = factory::helpers::create_club_with_staff(db).await?;
    let (other_club, other_president, _) = factory::helpers::create_club_with_staff(db).await?;
    factory::create_member(db, club.id, other_president.id).await?;

    let service = MembershipService::new(db);
    let result = service
        .change_president(club.id, other_president.id, &user(advisor))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.president_of(club.id).await?.user.id, president.id);
    assert_eq!(
        service.president_of(other_club.id).await?.user.id,
        other_president.id
    );

    Ok(())
}

/// Tests promoting a user whose application is still pending.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_pending_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, _, advisor) = factory::helpers::create_club_with_staff(db).await?;
    let applicant = factory::create_user(db).await?;
    factory::create_pending_membership(db, club.id, applicant.id).await?;

    let result = MembershipService::new(db)
        .change_president(club.id, applicant.id, &user(advisor))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a student trying to change a club's president.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, president, _) = factory::helpers::create_club_with_staff(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, club.id, member.id).await?;

    let result = MembershipService::new(db)
        .change_president(club.id, member.id, &user(president))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
