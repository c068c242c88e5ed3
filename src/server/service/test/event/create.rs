use super::*;

/// Tests the club president creating an event.
///
/// Verifies that the event starts in the advisor review stage and that the
/// name is stored trimmed.
///
/// Expected: Ok with status advisor_pending
#[tokio::test]
async fn president_creates_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, president, _) = factory::helpers::create_club_with_staff(db).await?;

    let view = EventService::new(db)
        .create(
            CreateEventParams {
                club_id: club.id,
                details: details(3),
            },
            &user(president),
        )
        .await?;

    assert_eq!(view.event.status, EventStatus::AdvisorPending);
    assert_eq!(view.event.name, "Spring meetup");
    assert_eq!(view.club_name, club.name);
    assert_eq!(view.participant_count, 0);

    Ok(())
}

/// Tests creating an event that starts in the past.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_past_start() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, president, _) = factory::helpers::create_club_with_staff(db).await?;

    let result = EventService::new(db)
        .create(
            CreateEventParams {
                club_id: club.id,
                details: details(-1),
            },
            &user(president),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a regular member trying to create an event for the club.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_regular_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, club.id, member.id).await?;

    let result = EventService::new(db)
        .create(
            CreateEventParams {
                club_id: club.id,
                details: details(3),
            },
            &user(member),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
