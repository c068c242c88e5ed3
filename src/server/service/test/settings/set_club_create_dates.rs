use super::*;

/// Tests storing and reading back the club creation window.
///
/// Expected: Ok with the same dates returned by the getter
#[tokio::test]
async fn stores_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SettingsService::new(db);
    assert_eq!(service.club_create_dates().await?, ClubCreateDates::default());

    let dates = ClubCreateDates {
        start_date: Some(date(1)),
        end_date: Some(date(31)),
    };
    service.set_club_create_dates(dates.clone()).await?;

    assert_eq!(service.club_create_dates().await?, dates);

    Ok(())
}

/// Tests clearing the end of the window.
///
/// Expected: Ok with only the start date left
#[tokio::test]
async fn clears_unset_end() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SettingsService::new(db);
    service
        .set_club_create_dates(ClubCreateDates {
            start_date: Some(date(1)),
            end_date: Some(date(31)),
        })
        .await?;
    service
        .set_club_create_dates(ClubCreateDates {
            start_date: Some(date(1)),
            end_date: None,
        })
        .await?;

    let stored = service.club_create_dates().await?;
    assert_eq!(stored.start_date, Some(date(1)));
    assert_eq!(stored.end_date, None);

    Ok(())
}

/// Tests a window that ends before it starts.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inverted_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SettingsService::new(db)
        .set_club_create_dates(ClubCreateDates {
            start_date: Some(date(20)),
            end_date: Some(date(10)),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
