use super::*;

/// Tests listing a club's finished events.
///
/// Verifies that running and future events, and events of other clubs, are left
/// out and that the latest end date comes first.
///
/// Expected: Ok with the two ended events, most recent first
#[tokio::test]
async fn lists_ended_events_latest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let club = factory::club::create_club(db).await?;
    let other_club = factory::club::create_club(db).await?;

    let older = factory::event::EventFactory::new(db, club.id)
        .dates(now - Duration::days(10), now - Duration::days(9))
        .build()
        .await?;
    let recent = factory::event::EventFactory::new(db, club.id)
        .dates(now - Duration::days(2), now - Duration::days(1))
        .build()
        .await?;
    factory::event::EventFactory::new(db, club.id)
        .dates(now - Duration::hours(1), now + Duration::hours(1))
        .build()
        .await?;
    factory::event::EventFactory::new(db, club.id).build().await?;
    factory::event::EventFactory::new(db, other_club.id)
        .dates(now - Duration::days(3), now - Duration::days(2))
        .build()
        .await?;

    let events = EventRepository::new(db)
        .find_completed_by_club(club.id, now)
        .await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![recent.id, older.id]);

    Ok(())
}
