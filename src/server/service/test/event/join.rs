use super::*;

/// Tests joining an approved event.
///
/// Expected: Ok with the user registered and a participant count of 1
#[tokio::test]
async fn joins_approved_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let event = factory::event::EventFactory::new(db, club.id)
        .status(EventStatus::Approved)
        .build()
        .await?;
    let student = factory::create_user(db).await?;

    let service = EventService::new(db);
    let participation = service.join(event.id, student.id).await?;

    assert!(participation.is_participating);
    assert_eq!(participation.participant_count, 1);
    assert!(service.get(event.id, student.id).await?.is_participating);

    Ok(())
}

/// Tests joining an event still under review.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_unapproved_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let student = factory::create_user(db).await?;

    let result = EventService::new(db).join(event.id, student.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests joining an event whose capacity is reached.
///
/// Expected: Err(Conflict) for the second participant
#[tokio::test]
async fn rejects_full_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let event = factory::event::EventFactory::new(db, club.id)
        .status(EventStatus::Approved)
        .max_participants(1)
        .build()
        .await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let service = EventService::new(db);
    service.join(event.id, first.id).await?;
    let result = service.join(event.id, second.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests joining the same event twice.
///
/// Expected: Err(Conflict) and the count stays at 1
#[tokio::test]
async fn rejects_second_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let event = factory::event::EventFactory::new(db, club.id)
        .status(EventStatus::Approved)
        .build()
        .await?;
    let student = factory::create_user(db).await?;

    let service = EventService::new(db);
    service.join(event.id, student.id).await?;
    let result = service.join(event.id, student.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get(event.id, student.id).await?.participant_count, 1);

    Ok(())
}
