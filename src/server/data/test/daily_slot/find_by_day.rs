use super::*;

/// Tests a weekday query spans every location.
///
/// Expected: Ok with one slot from each location
#[tokio::test]
async fn spans_all_locations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_location_with_slot(db, 3).await?;
    let (second, _) = factory::helpers::create_location_with_slot(db, 3).await?;
    factory::helpers::create_location_with_slot(db, 4).await?;

    let slots = DailySlotRepository::new(db).find_by_day(3).await?;

    let mut locations: Vec<i32> = slots.iter().map(|s| s.location_id).collect();
    locations.sort_unstable();
    assert_eq!(locations, vec![first.id, second.id]);

    Ok(())
}
