use super::*;

/// Tests creating a location with its calendar rules.
///
/// Verifies that valid days are stored sorted and deduplicated and that the
/// disabled dates come back with the location.
///
/// Expected: Ok with days [0, 2] and one disabled date
#[tokio::test]
async fn creates_location_with_days_and_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    let location = repo
        .create(CreateLocationParams {
            name: "Conference Hall".to_string(),
            valid_days: vec![2, 0, 2],
            disabled_dates: vec![date(2030, 1, 7)],
        })
        .await?;

    assert_eq!(location.name, "Conference Hall");
    assert_eq!(location.valid_days, vec![0, 2]);
    assert_eq!(location.disabled_dates, vec![date(2030, 1, 7)]);

    Ok(())
}

/// Tests renaming an unknown location reports nothing changed.
///
/// Expected: Ok(false)
#[tokio::test]
async fn rename_of_missing_location_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_location_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let renamed = LocationRepository::new(db)
        .rename(404, "Nowhere".to_string())
        .await?;

    assert!(!renamed);

    Ok(())
}
