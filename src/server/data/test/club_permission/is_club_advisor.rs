use super::*;

/// Tests the advisor named on the club is recognised.
///
/// Expected: Ok(true)
#[tokio::test]
async fn recognises_named_advisor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, _, advisor) = factory::helpers::create_club_with_staff(db).await?;

    let repo = ClubPermissionRepository::new(db);

    assert!(repo.is_club_advisor(advisor.id, club.id).await?);

    Ok(())
}

/// Tests an approved advisor membership also counts.
///
/// Expected: Ok(true) for the approved advisor membership, Ok(false) once pending
#[tokio::test]
async fn recognises_approved_advisor_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let approved = factory::create_user(db).await?;
    let pending = factory::create_user(db).await?;
    factory::club_membership::MembershipFactory::new(db, club.id, approved.id)
        .status(MembershipStatus::Approved)
        .role(MembershipRole::Advisor)
        .build()
        .await?;
    factory::club_membership::MembershipFactory::new(db, club.id, pending.id)
        .role(MembershipRole::Advisor)
        .build()
        .await?;

    let repo = ClubPermissionRepository::new(db);

    assert!(repo.is_club_advisor(approved.id, club.id).await?);
    assert!(!repo.is_club_advisor(pending.id, club.id).await?);

    Ok(())
}

/// Tests the president is not treated as advisor.
///
/// Expected: Ok(false) for advisor check, Ok(true) for member management
#[tokio::test]
async fn president_is_not_advisor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, president, _) = factory::helpers::create_club_with_staff(db).await?;

    let repo = ClubPermissionRepository::new(db);

    assert!(!repo.is_club_advisor(president.id, club.id).await?);
    assert!(repo.can_manage_members(president.id, club.id).await?);

    Ok(())
}
