use super::*;

/// Tests reservations carry event, location and slot details.
///
/// Expected: Ok with names and times resolved
#[tokio::test]
async fn resolves_names_and_times() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let event = factory::event::EventFactory::new(db, club.id)
        .name("Spring Concert")
        .build()
        .await?;
    let location = factory::location::LocationFactory::new(db)
        .name("Auditorium")
        .build()
        .await?;
    let slot = factory::create_daily_slot(db, location.id, 0).await?;
    factory::create_reservation(db, event.id, &slot, monday()).await?;

    let reservations = ReservationRepository::new(db)
        .find_by_event(event.id)
        .await?;

    assert_eq!(reservations.len(), 1);
    let dto = reservations[0].clone().into_dto();
    assert_eq!(dto.event_name, "Spring Concert");
    assert_eq!(dto.location_name, "Auditorium");
    assert_eq!(dto.start_time, "10:00");
    assert_eq!(dto.end_time, "12:00");
    assert_eq!(dto.reservation_date, monday());

    Ok(())
}
