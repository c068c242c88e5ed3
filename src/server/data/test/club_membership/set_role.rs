use super::*;

/// Tests promoting a member while the club already has a president.
///
/// Verifies that the partial unique index allows only one approved
/// president per club.
///
/// Expected: Err with a unique constraint violation, president unchanged
#[tokio::test]
async fn rejects_second_president_in_club() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, president, _) = factory::helpers::create_club_with_staff(db).await?;
    let member = factory::create_user(db).await?;
    let membership = factory::create_member(db, club.id, member.id).await?;

    let repo = ClubMembershipRepository::new(db);
    let result = repo
        .set_role(membership.id, MembershipRole::President)
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    let current = repo.find_president(club.id).await?.unwrap();
    assert_eq!(current.user_id, president.id);

    Ok(())
}

/// Tests a user cannot preside over a second club.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_second_presidency_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, president, _) = factory::helpers::create_club_with_staff(db).await?;
    let other_club = factory::create_club(db).await?;
    let membership = factory::create_member(db, other_club.id, president.id).await?;

    let repo = ClubMembershipRepository::new(db);
    let result = repo
        .set_role(membership.id, MembershipRole::President)
        .await;

    assert!(result.is_err());
    assert_eq!(repo.count_presidents(other_club.id).await?, 0);

    Ok(())
}

/// Tests demoting then promoting swaps the presidency.
///
/// Expected: Ok with exactly one president, the promoted member
#[tokio::test]
async fn demote_then_promote_swaps_president() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, president, _) = factory::helpers::create_club_with_staff(db).await?;
    let member = factory::create_user(db).await?;
    let membership = factory::create_member(db, club.id, member.id).await?;

    let repo = ClubMembershipRepository::new(db);
    let old = repo.find_president(club.id).await?.unwrap();
    repo.set_role(old.id, MembershipRole::Member).await?;
    repo.set_role(membership.id, MembershipRole::President)
        .await?;

    assert_eq!(repo.count_presidents(club.id).await?, 1);
    assert_eq!(repo.find_president(club.id).await?.unwrap().user_id, member.id);
    assert!(repo.find_presidency(president.id).await?.is_none());

    Ok(())
}

/// Tests a pending president row does not count as a presidency.
///
/// Expected: Ok, a pending president coexists with the approved one
#[tokio::test]
async fn ignores_pending_president_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, _, _) = factory::helpers::create_club_with_staff(db).await?;
    let applicant = factory::create_user(db).await?;
    let pending = factory::create_pending_membership(db, club.id, applicant.id).await?;

    let repo = ClubMembershipRepository::new(db);
    let updated = repo
        .set_role(pending.id, MembershipRole::President)
        .await?;

    assert_eq!(updated.role, MembershipRole::President);
    assert!(!updated.is_president());
    assert_eq!(repo.count_presidents(club.id).await?, 1);

    Ok(())
}
