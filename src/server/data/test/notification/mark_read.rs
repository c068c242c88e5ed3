use super::*;

/// Tests only the owner can mark a notification read.
///
/// Expected: Ok(false) for another user, Ok(true) for the owner
#[tokio::test]
async fn marks_read_for_owner_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo.create(params(owner.id, "Hello")).await?;

    assert!(!repo.mark_read(notification.id, stranger.id).await?);
    assert!(repo.mark_read(notification.id, owner.id).await?);
    assert!(repo.find_by_user(owner.id).await?[0].is_read);

    Ok(())
}
