use super::*;

/// Tests every location is listed with its own details.
///
/// Expected: Ok with locations ordered by name and details not mixed up
#[tokio::test]
async fn lists_locations_with_their_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::location::LocationFactory::new(db)
        .name("B Studio")
        .valid_days(vec![4])
        .build()
        .await?;
    factory::location::LocationFactory::new(db)
        .name("A Hall")
        .disabled_date(date(2030, 3, 1))
        .build()
        .await?;

    let locations = LocationRepository::new(db).find_all().await?;

    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].name, "A Hall");
    assert!(locations[0].valid_days.is_empty());
    assert_eq!(locations[0].disabled_dates, vec![date(2030, 3, 1)]);
    assert_eq!(locations[1].name, "B Studio");
    assert_eq!(locations[1].valid_days, vec![4]);

    Ok(())
}
