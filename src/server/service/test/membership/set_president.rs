use super::*;

/// Tests an admin assigning the first president of a club.
///
/// Expected: Ok with the membership promoted and exactly one president
#[tokio::test]
async fn assigns_first_president() -> Result<(), AppError> {
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

    let service = MembershipService::new(db);
    let promoted = service.set_president(membership.id, &user(admin)).await?;

    assert_eq!(promoted.role, MembershipRole::President);
    assert!(service.validate_president(club.id).await?);

    Ok(())
}

/// Tests promoting the member who already is the president.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_current_president() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user_with_role(db, UserRole::Admin).await?;
    let club = factory::create_club(db).await?;
    let president = factory::create_user(db).await?;
    let membership = factory::create_president(db, club.id, president.id).await?;

    let result = MembershipService::new(db)
        .set_president(membership.id, &user(admin))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests promoting a member who presides over a different club.
///
/// Expected: Err(Conflict) and the membership keeps its member role
#[tokio::test]
async fn rejects_president_of_other_club() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user_with_role(db, UserRole::Admin).await?;
    let (_, other_president, _) = factory::helpers::create_club_with_staff(db).await?;
    let club = factory::create_club(db).await?;
    let membership = factory::create_member(db, club.id, other_president.id).await?;

    let result = MembershipService::new(db)
        .set_president(membership.id, &user(admin))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let row = membership_row(db, membership.id).await?.unwrap();
    assert_eq!(row.role, MembershipRole::Member);

    Ok(())
}

/// Tests promoting an approved club leader.
///
/// Verifies that only plain members can be promoted, so a leader or advisor
/// membership never loses its role to the presidency.
///
/// Expected: Err(Conflict) and the membership keeps its leader role
#[tokio::test]
async fn rejects_leader_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user_with_role(db, UserRole::Admin).await?;
    let club = factory::create_club(db).await?;
    let leader = factory::create_user_with_role(db, UserRole::Leader).await?;
    let membership =
        factory::club_membership::MembershipFactory::new(db, club.id, leader.id)
            .status(MembershipStatus::Approved)
            .role(MembershipRole::Leader)
            .build()
            .await?;

    let result = MembershipService::new(db)
        .set_president(membership.id, &user(admin))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let row = membership_row(db, membership.id).await?.unwrap();
    assert_eq!(row.role, MembershipRole::Leader);

    Ok(())
}
