use requisition_intake::{
    config::{Config, LogFormat},
    dto::requisition_dto::{DashboardStats, RequisitionListQuery},
    models::requisition::{RequisitionDraft, RequisitionStatus},
    services::requisition_service::{MockRequisitionSource, RequisitionSource},
    AppState,
};
use std::time::{Duration, Instant};

fn test_config() -> Config {
    Config {
        mock_fetch_delay_ms: 0,
        log_format: LogFormat::Pretty,
        default_requested_by: Some("John Smith".into()),
    }
}

#[tokio::test]
async fn submitted_requisition_shows_up_as_pending() {
    let state = AppState::new(test_config()).expect("state");
    let mut session = state.new_session();
    assert_eq!(session.draft().requested_by, "John Smith");

    let submitted = requisition_intake::submit(&RequisitionDraft {
        job_title: "Site Reliability Engineer".into(),
        department: "engineering".into(),
        number_of_positions: 3,
        ..session.draft().clone()
    });
    assert!(submitted.is_err(), "incomplete draft must not submit");

    session
        .update(|d| d.job_title = "Site Reliability Engineer".into())
        .unwrap();
    let record = requisition_intake::models::requisition::SubmittedRequisition {
        id: uuid::Uuid::new_v4(),
        status: RequisitionStatus::Pending,
        draft: RequisitionDraft {
            department: "engineering".into(),
            number_of_positions: 3,
            ..session.draft().clone()
        },
        submitted_at: chrono::Utc::now(),
    };
    state.source.record(&record).await;

    let listing = state
        .requisition_service
        .list(
            RequisitionListQuery::default()
                .search("reliability")
                .department("Engineering"),
        )
        .await
        .unwrap();
    assert_eq!(listing.total, 1);
    assert_eq!(listing.items[0].status, RequisitionStatus::Pending);
    assert_eq!(listing.items[0].id, record.id.to_string());

    let stats = state.requisition_service.stats().await.unwrap();
    assert_eq!(
        stats,
        DashboardStats {
            pending: 2,
            approved: 1,
            draft: 1,
            total_positions: 9,
        }
    );

    let found = state
        .requisition_service
        .get_by_id(&record.id.to_string())
        .await
        .unwrap();
    assert_eq!(found.job_title, "Site Reliability Engineer");
}

#[tokio::test]
async fn mock_source_waits_for_simulated_delay() {
    let source = MockRequisitionSource::new(Duration::from_millis(50)).unwrap();
    let started = Instant::now();
    let rows = source.fetch_requisitions().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(50));
    assert_eq!(rows.len(), 5);
}

#[test]
fn reference_lists_are_exposed_through_state() {
    let state = AppState::new(test_config()).unwrap();
    let refs = &state.reference_service;
    assert_eq!(refs.skills().len(), 15);
    assert_eq!(refs.departments().len(), 8);
    assert!(refs.timezones().iter().any(|tz| tz.value == "utc"));
    assert!(!refs.certifications().is_empty());
}
