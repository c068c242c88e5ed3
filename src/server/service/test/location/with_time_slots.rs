use super::*;

/// Tests the reserved flag of time slots.
///
/// Verifies that a time slot matching the times of a reserved daily slot at
/// the same location is flagged, while other time slots are not.
///
/// Expected: only the 10:00-12:00 time slot is reserved
#[tokio::test]
async fn flags_time_slots_matching_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let (location, slot) = factory::helpers::create_location_with_slot(db, 0).await?;
    factory::create_reservation(db, event.id, &slot, monday()).await?;

    let service = LocationService::new(db);
    let morning = service.add_time_slot(location.id, times(10, 12)).await?;
    let afternoon = service.add_time_slot(location.id, times(14, 16)).await?;

    let locations = service.with_time_slots().await?;

    assert_eq!(locations.len(), 1);
    let flags: Vec<(i32, bool)> = locations[0]
        .time_slots
        .iter()
        .map(|s| (s.id, s.is_reserved))
        .collect();
    assert_eq!(flags, vec![(morning.id, true), (afternoon.id, false)]);

    Ok(())
}
