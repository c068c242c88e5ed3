use super::*;

/// Tests deleting reservations of one event frees its slots only.
///
/// Expected: Ok(1) and the other event's reservation remains
#[tokio::test]
async fn deletes_only_that_events_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (club, first) = factory::helpers::create_event_with_dependencies(db).await?;
    let second = factory::create_event(db, club.id).await?;
    let (_, slot_a) = factory::helpers::create_location_with_slot(db, 0).await?;
    let (_, slot_b) = factory::helpers::create_location_with_slot(db, 0).await?;
    factory::create_reservation(db, first.id, &slot_a, monday()).await?;
    factory::create_reservation(db, second.id, &slot_b, monday()).await?;

    let repo = ReservationRepository::new(db);
    let removed = repo.delete_by_event(first.id).await?;

    assert_eq!(removed, 1);
    let reserved = repo.reserved_slot_ids_on(monday()).await?;
    assert!(!reserved.contains(&slot_a.id));
    assert!(reserved.contains(&slot_b.id));

    Ok(())
}
