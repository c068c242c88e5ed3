use super::*;

/// Tests advised clubs merge both sources without duplicates.
///
/// Verifies that a club naming the user as advisor and also holding an
/// advisor membership for them is listed once.
///
/// Expected: Ok with each advised club once, ascending
#[tokio::test]
async fn merges_named_and_membership_advisors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _, advisor) = factory::helpers::create_club_with_staff(db).await?;
    let second = factory::create_club(db).await?;
    factory::club_membership::MembershipFactory::new(db, first.id, advisor.id)
        .status(MembershipStatus::Approved)
        .role(MembershipRole::Advisor)
        .build()
        .await?;
    factory::club_membership::MembershipFactory::new(db, second.id, advisor.id)
        .status(MembershipStatus::Approved)
        .role(MembershipRole::Advisor)
        .build()
        .await?;

    let ids = ClubPermissionRepository::new(db)
        .advised_club_ids(advisor.id)
        .await?;

    let mut expected = vec![first.id, second.id];
    expected.sort_unstable();
    assert_eq!(ids, expected);

    Ok(())
}
