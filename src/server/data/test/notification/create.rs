use super::*;

/// Tests stored notifications are unread and listed newest first.
///
/// Expected: Ok with two unread notifications, latest first, none for others
#[tokio::test]
async fn stores_unread_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_membership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    repo.create(params(user.id, "First")).await?;
    repo.create(params(user.id, "Second")).await?;

    let notifications = repo.find_by_user(user.id).await?;

    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].title, "Second");
    assert!(notifications.iter().all(|n| !n.is_read));
    assert_eq!(notifications[0].kind, kind::MEMBERSHIP);
    assert!(repo.find_by_user(other.id).await?.is_empty());

    Ok(())
}
