use super::*;

/// Tests rejecting stores the reason and stamps the update time.
///
/// Expected: Ok(Some) with status rejected, reason stored and updated_at set
#[tokio::test]
async fn stores_reject_reason() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let updated = EventRepository::new(db)
        .set_status(
            event.id,
            EventStatus::AdvisorPending,
            EventStatus::Rejected,
            Some("Room unavailable".to_string()),
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, EventStatus::Rejected);
    assert_eq!(updated.reject_reason.as_deref(), Some("Room unavailable"));
    assert!(updated.updated_at.is_some());

    Ok(())
}

/// Tests a transition whose expected current status no longer holds.
///
/// Verifies that an approval aimed at `admin_pending` leaves an event that was
/// already rejected untouched.
///
/// Expected: Ok(None) and the stored status stays rejected
#[tokio::test]
async fn skips_event_in_other_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let event = factory::event::EventFactory::new(db, club.id)
        .status(EventStatus::Rejected)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let result = repo
        .set_status(
            event.id,
            EventStatus::AdminPending,
            EventStatus::Approved,
            None,
        )
        .await?;

    assert!(result.is_none());
    let stored = repo.find_by_id(event.id).await?.unwrap();
    assert_eq!(stored.status, EventStatus::Rejected);

    Ok(())
}

/// Tests updating a missing event.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventRepository::new(db)
        .set_status(404, EventStatus::AdminPending, EventStatus::Approved, None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
