use super::*;

/// Tests storing session notes with goals.
///
/// Verifies that goals survive the JSON column and that notes are scoped to the
/// provider.
///
/// Expected: Ok with the stored note
#[tokio::test]
async fn stores_goals_and_scopes_to_provider() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (provider, referral, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = SessionNoteRepository::new(db);
    let note = repo
        .create(CreateSessionNoteParams {
            appointment_id: appointment.id,
            referral_id: referral.id,
            provider_id: provider.id,
            session_date: appointment.appointment_date,
            duration_minutes: appointment.duration_minutes,
            session_type: Some("individual".to_string()),
            participant_response: "Engaged well".to_string(),
            progress_notes: "Balance improving".to_string(),
            goals_addressed: vec!["mobility".to_string(), "strength".to_string()],
            homework_assigned: None,
            next_session_focus: None,
            risk_level: "low".to_string(),
        })
        .await?;

    assert_eq!(note.goals_addressed, vec!["mobility", "strength"]);

    let notes = repo.get_by_referral(referral.id, provider.id).await?;
    assert_eq!(notes, vec![note]);
    assert!(repo
        .get_by_referral(referral.id, provider.id + 1)
        .await?
        .is_empty());

    Ok(())
}
