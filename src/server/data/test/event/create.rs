use super::*;

/// Tests a new event starts at the advisor review stage.
///
/// Expected: Ok with status advisor_pending and no reject reason
#[tokio::test]
async fn creates_event_awaiting_advisor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let start = Utc::now() + Duration::days(3);

    let event = EventRepository::new(db)
        .create(CreateEventParams {
            club_id: club.id,
            details: EventDetailsParams {
                name: "Hackathon".to_string(),
                description: "24 hours of code".to_string(),
                start_date: start,
                end_date: start + Duration::hours(24),
                max_participants: 40,
                category: Some("tech".to_string()),
            },
        })
        .await?;

    assert_eq!(event.club_id, club.id);
    assert_eq!(event.status, EventStatus::AdvisorPending);
    assert!(event.reject_reason.is_none());
    assert!(event.updated_at.is_none());

    Ok(())
}
