use super::*;

/// Tests pending applications are limited to the requested clubs.
///
/// Expected: Ok with only the application to the requested club
#[tokio::test]
async fn returns_pending_applications_of_given_clubs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::ClubFactory::new(db).name("Robotics").build().await?;
    let other = factory::create_club(db).await?;
    let applicant = factory::user::UserFactory::new(db).name("Deniz").build().await?;
    let member = factory::create_user(db).await?;
    factory::create_pending_membership(db, club.id, applicant.id).await?;
    factory::create_member(db, club.id, member.id).await?;
    factory::create_pending_membership(db, other.id, member.id).await?;

    let repo = ClubMembershipRepository::new(db);
    let applications = repo.find_pending_for_clubs(&[club.id]).await?;

    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].applicant.name, "Deniz");
    assert_eq!(applications[0].club_name, "Robotics");

    Ok(())
}

/// Tests an empty club list short-circuits.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_no_clubs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let applications = ClubMembershipRepository::new(db)
        .find_pending_for_clubs(&[])
        .await?;

    assert!(applications.is_empty());

    Ok(())
}
