use super::*;

/// Tests the club president booking a free slot for their event.
///
/// Expected: Ok with the reservation carrying event and location names
#[tokio::test]
async fn president_books_free_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, president, _) = factory::helpers::create_club_with_staff(db).await?;
    let event = factory::create_event(db, club.id).await?;
    let (location, slot) = factory::helpers::create_location_with_slot(db, 0).await?;

    let reservation = ReservationService::new(db)
        .reserve(
            ReserveParams {
                event_id: event.id,
                location_id: location.id,
                daily_slot_id: slot.id,
                date: monday(),
            },
            &user(president),
        )
        .await?;

    assert_eq!(reservation.event_name, event.name);
    assert_eq!(reservation.location_name, location.name);
    assert_eq!(reservation.slot.id, slot.id);
    assert_eq!(reservation.reservation_date, monday());

    Ok(())
}

/// Tests booking a slot another event already holds on that date.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_double_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = user(factory::create_user_with_role(db, UserRole::Admin).await?);
    let (club, first) = factory::helpers::create_event_with_dependencies(db).await?;
    let second = factory::create_event(db, club.id).await?;
    let (location, slot) = factory::helpers::create_location_with_slot(db, 0).await?;

    let service = ReservationService::new(db);
    for (event_id, expect_ok) in [(first.id, true), (second.id, false)] {
        let result = service
            .reserve(
                ReserveParams {
                    event_id,
                    location_id: location.id,
                    daily_slot_id: slot.id,
                    date: monday(),
                },
                &admin,
            )
            .await;

        if expect_ok {
            assert!(result.is_ok());
        } else {
            assert!(matches!(result, Err(AppError::Conflict(_))));
        }
    }

    assert_eq!(service.all().await?.len(), 1);

    Ok(())
}

/// Tests booking a Monday slot for a Tuesday.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_weekday_mismatch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = user(factory::create_user_with_role(db, UserRole::Admin).await?);
    let (_, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let (location, slot) = factory::helpers::create_location_with_slot(db, 0).await?;

    let result = ReservationService::new(db)
        .reserve(
            ReserveParams {
                event_id: event.id,
                location_id: location.id,
                daily_slot_id: slot.id,
                date: monday() + Duration::days(1),
            },
            &admin,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests booking a slot disabled for that date.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_disabled_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = user(factory::create_user_with_role(db, UserRole::Admin).await?);
    let (_, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let (location, slot) = factory::helpers::create_location_with_slot(db, 0).await?;
    LocationService::new(db)
        .disable_slots(location.id, &[slot.id], monday())
        .await?;

    let result = ReservationService::new(db)
        .reserve(
            ReserveParams {
                event_id: event.id,
                location_id: location.id,
                daily_slot_id: slot.id,
                date: monday(),
            },
            &admin,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests booking at a location closed on that date.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_closed_location() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = user(factory::create_user_with_role(db, UserRole::Admin).await?);
    let (_, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let location = factory::location::LocationFactory::new(db)
        .disabled_date(monday())
        .build()
        .await?;
    let slot = factory::create_daily_slot(db, location.id, 0).await?;

    let result = ReservationService::new(db)
        .reserve(
            ReserveParams {
                event_id: event.id,
                location_id: location.id,
                daily_slot_id: slot.id,
                date: monday(),
            },
            &admin,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests booking for an event that was rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_rejected_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = user(factory::create_user_with_role(db, UserRole::Admin).await?);
    let club = factory::create_club(db).await?;
    let event = factory::event::EventFactory::new(db, club.id)
        .status(EventStatus::Rejected)
        .build()
        .await?;
    let (location, slot) = factory::helpers::create_location_with_slot(db, 0).await?;

    let result = ReservationService::new(db)
        .reserve(
            ReserveParams {
                event_id: event.id,
                location_id: location.id,
                daily_slot_id: slot.id,
                date: monday(),
            },
            &admin,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a regular member booking for their club's event.
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

    let (club, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, club.id, member.id).await?;
    let (location, slot) = factory::helpers::create_location_with_slot(db, 0).await?;

    let result = ReservationService::new(db)
        .reserve(
            ReserveParams {
                event_id: event.id,
                location_id: location.id,
                daily_slot_id: slot.id,
                date: monday(),
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
