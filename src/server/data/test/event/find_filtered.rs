use super::*;

/// Tests filtering by club and by name fragment.
///
/// Verifies that the search is case-insensitive and that both filters combine.
///
/// Expected: Ok with only the matching event of the requested club
#[tokio::test]
async fn filters_by_club_and_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let other = factory::create_club(db).await?;
    let wanted = factory::event::EventFactory::new(db, club.id)
        .name("Chess Tournament")
        .build()
        .await?;
    factory::event::EventFactory::new(db, club.id)
        .name("Movie Night")
        .build()
        .await?;
    factory::event::EventFactory::new(db, other.id)
        .name("Chess Lessons")
        .build()
        .await?;

    let events = EventRepository::new(db)
        .find_filtered(EventFilter {
            club_id: Some(club.id),
            search: Some("chess".to_string()),
        })
        .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, wanted.id);

    Ok(())
}

/// Tests a blank search term is ignored.
///
/// Expected: Ok with every event
#[tokio::test]
async fn ignores_blank_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    factory::create_event(db, club.id).await?;
    factory::create_event(db, club.id).await?;

    let events = EventRepository::new(db)
        .find_filtered(EventFilter {
            club_id: None,
            search: Some("   ".to_string()),
        })
        .await?;

    assert_eq!(events.len(), 2);

    Ok(())
}
