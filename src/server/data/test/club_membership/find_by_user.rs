use super::*;

/// Tests listing a user's memberships by status.
///
/// Verifies that approved and pending memberships are separated and that
/// each carries its club name.
///
/// Expected: Ok with one approved and one pending membership
#[tokio::test]
async fn separates_memberships_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let chess = factory::club::ClubFactory::new(db).name("Chess").build().await?;
    let drama = factory::club::ClubFactory::new(db).name("Drama").build().await?;
    factory::create_member(db, chess.id, user.id).await?;
    factory::create_pending_membership(db, drama.id, user.id).await?;

    let repo = ClubMembershipRepository::new(db);
    let approved = repo.find_by_user(user.id, MembershipStatus::Approved).await?;
    let pending = repo.find_by_user(user.id, MembershipStatus::Pending).await?;

    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].club_name, "Chess");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].club_name, "Drama");

    Ok(())
}
