use super::*;

/// Tests presidents and leaders manage events, plain members do not.
///
/// Expected: Ok(true) for president and leader, Ok(false) for member
#[tokio::test]
async fn allows_president_and_leader_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, president, advisor) = factory::helpers::create_club_with_staff(db).await?;
    let leader = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    factory::club_membership::MembershipFactory::new(db, club.id, leader.id)
        .status(MembershipStatus::Approved)
        .role(MembershipRole::Leader)
        .build()
        .await?;
    factory::create_member(db, club.id, member.id).await?;

    let repo = ClubPermissionRepository::new(db);

    assert!(repo.can_manage_events(president.id, club.id).await?);
    assert!(repo.can_manage_events(leader.id, club.id).await?);
    assert!(!repo.can_manage_events(member.id, club.id).await?);
    assert!(!repo.can_manage_events(advisor.id, club.id).await?);

    let mut led = repo.led_club_ids(leader.id).await?;
    led.sort_unstable();
    assert_eq!(led, vec![club.id]);

    Ok(())
}
