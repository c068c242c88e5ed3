use super::*;

/// Tests the club president approving a pending application.
///
/// Verifies that the membership becomes approved and that the club's member
/// count is recomputed from the approved rows (president plus new member).
///
/// Expected: Ok with member_count 2
#[tokio::test]
async fn approves_and_recounts_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, president, _) = factory::helpers::create_club_with_staff(db).await?;
    let student = factory::create_user(db).await?;
    let application = factory::create_pending_membership(db, club.id, student.id).await?;

    let membership = MembershipService::new(db)
        .approve(application.id, &user(president))
        .await?;

    assert_eq!(membership.status, MembershipStatus::Approved);

    let club = ClubRepository::new(db).find_by_id(club.id).await?.unwrap();
    assert_eq!(club.member_count, 2);

    Ok(())
}

/// Tests a regular member trying to approve an application.
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
        .approve(application.id, &user(member))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    let row = membership_row(db, application.id).await?.unwrap();
    assert_eq!(row.status, MembershipStatus::Pending);

    Ok(())
}

/// Tests approving a membership that is already approved.
///
/// Expected: Err(NotFound)
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
        .approve(membership.id, &user(admin))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
