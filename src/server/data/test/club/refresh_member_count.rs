use super::*;

/// Tests member count only counts approved memberships.
///
/// Verifies that pending applications are ignored and that the stored
/// `member_count` column is overwritten with the fresh count.
///
/// Expected: Ok(2) and the club row shows 2 members
#[tokio::test]
async fn counts_only_approved_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::ClubFactory::new(db)
        .member_count(17)
        .build()
        .await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let applicant = factory::create_user(db).await?;
    factory::create_president(db, club.id, first.id).await?;
    factory::create_member(db, club.id, second.id).await?;
    factory::create_pending_membership(db, club.id, applicant.id).await?;

    let repo = ClubRepository::new(db);
    let count = repo.refresh_member_count(club.id).await?;

    assert_eq!(count, 2);
    let stored = repo.find_by_id(club.id).await?.unwrap();
    assert_eq!(stored.member_count, 2);

    Ok(())
}

/// Tests a club without members is reset to zero.
///
/// Expected: Ok(0)
#[tokio::test]
async fn resets_empty_club_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::ClubFactory::new(db)
        .member_count(3)
        .build()
        .await?;

    let repo = ClubRepository::new(db);
    let count = repo.refresh_member_count(club.id).await?;

    assert_eq!(count, 0);
    assert_eq!(repo.find_by_id(club.id).await?.unwrap().member_count, 0);

    Ok(())
}
