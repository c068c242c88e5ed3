use super::*;

/// Tests an advisor listing a club's finished events.
///
/// Verifies that only ended events are returned, latest end date first, and
/// that each one reports its result report state: uploaded, still due, or
/// expired after the 15 day window.
///
/// Expected: Ok with three events and matching report states
#[tokio::test]
async fn lists_ended_events_with_report_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let (club, _, advisor) = factory::helpers::create_club_with_staff(db).await?;

    let uploaded = factory::event::EventFactory::new(db, club.id)
        .status(EventStatus::Approved)
        .dates(now - Duration::days(2), now - Duration::days(1))
        .result_report("result_1.pdf")
        .build()
        .await?;
    let due = factory::event::EventFactory::new(db, club.id)
        .status(EventStatus::Approved)
        .dates(now - Duration::days(6), now - Duration::days(5))
        .build()
        .await?;
    let expired = factory::event::EventFactory::new(db, club.id)
        .status(EventStatus::Approved)
        .dates(now - Duration::days(21), now - Duration::days(20))
        .build()
        .await?;
    factory::create_event(db, club.id).await?;

    let views = EventService::new(db)
        .completed(club.id, &user(advisor))
        .await?;

    let ids: Vec<i32> = views.iter().map(|v| v.event.id).collect();
    assert_eq!(ids, vec![uploaded.id, due.id, expired.id]);

    let statuses: Vec<ResultReportStatusDto> = views
        .iter()
        .map(|v| v.event.result_report_status(now))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ResultReportStatusDto::Uploaded,
            ResultReportStatusDto::NotUploaded,
            ResultReportStatusDto::Expired,
        ]
    );

    Ok(())
}

/// Tests a student asking for a club's completed events.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let student = user(factory::create_user_with_role(db, UserRole::Student).await?);

    let result = EventService::new(db).completed(club.id, &student).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests listing completed events of a club that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_club() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = user(factory::create_user_with_role(db, UserRole::Admin).await?);

    let result = EventService::new(db).completed(404, &admin).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
