use super::*;

/// Tests booking a free slot.
///
/// Expected: Ok with the slot listed as reserved on that date
#[tokio::test]
async fn books_free_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let (location, slot) = factory::helpers::create_location_with_slot(db, 0).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(ReserveParams {
            event_id: event.id,
            location_id: location.id,
            daily_slot_id: slot.id,
            date: monday(),
        })
        .await?;

    assert_eq!(reservation.daily_slot_id, slot.id);
    assert!(repo.reserved_slot_ids_on(monday()).await?.contains(&slot.id));

    Ok(())
}

/// Tests a second booking of the same slot and date is refused.
///
/// Verifies that the unique index rejects the insert even when a different
/// event asks for the slot.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_double_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, first) = factory::helpers::create_event_with_dependencies(db).await?;
    let second = factory::create_event(db, club.id).await?;
    let (location, slot) = factory::helpers::create_location_with_slot(db, 0).await?;
    factory::create_reservation(db, first.id, &slot, monday()).await?;

    let result = ReservationRepository::new(db)
        .create(ReserveParams {
            event_id: second.id,
            location_id: location.id,
            daily_slot_id: slot.id,
            date: monday(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests the same slot can be booked on another date.
///
/// Expected: Ok
#[tokio::test]
async fn allows_same_slot_on_other_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let (location, slot) = factory::helpers::create_location_with_slot(db, 0).await?;
    factory::create_reservation(db, event.id, &slot, monday()).await?;

    let result = ReservationRepository::new(db)
        .create(ReserveParams {
            event_id: event.id,
            location_id: location.id,
            daily_slot_id: slot.id,
            date: NaiveDate::from_ymd_opt(2030, 1, 14).unwrap(),
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}
