use requisition_intake::{
    error::Error,
    get_active_steps,
    models::requisition::{Billable, OnsiteWorkMode, RequisitionDraft, WorkArrangement},
    models::step::{Field, StepId},
    models::validation::FieldErrorKind,
    services::form_service::{FormSession, FormState},
    submit, validate_step,
};
use rust_decimal::Decimal;

fn complete_offshore_draft() -> RequisitionDraft {
    RequisitionDraft {
        work_arrangement: Some(WorkArrangement::Offshore),
        job_type: "contract".into(),
        job_title: "Backend Engineer".into(),
        department: "engineering".into(),
        requested_date: "2024-03-01".into(),
        requested_by: "John Smith".into(),
        hiring_manager: "Sarah Johnson".into(),
        number_of_positions: 2,
        billable: Billable::No,
        client_billing_rate: None,
        total_budget_min: Some(Decimal::from(80_000)),
        total_budget_max: Some(Decimal::from(100_000)),
        expected_salary_min: Some(Decimal::from(60_000)),
        expected_salary_max: Some(Decimal::from(75_000)),
        primary_skills: vec!["Rust".into()],
        experience_years: Some(4),
        education: "bachelor".into(),
        project_name: "Atlas".into(),
        client_name: "Globex".into(),
        business_unit: "consulting".into(),
        work_location: "Pune".into(),
        shift: "day".into(),
        preferred_timezone: "ist".into(),
        job_purpose: "Build services".into(),
        duties: "Design and ship APIs".into(),
        specifications: "Strong Rust background".into(),
        ..RequisitionDraft::default()
    }
}

fn complete_onsite_draft() -> RequisitionDraft {
    RequisitionDraft {
        work_arrangement: Some(WorkArrangement::Onsite),
        onsite_work_mode: Some(OnsiteWorkMode::Hybrid),
        onsite_location: "Austin, TX".into(),
        onsite_days_in_office: Some(3),
        ..complete_offshore_draft()
    }
}

fn walk_to_last_step(session: &mut FormSession) {
    let total = session.steps().len();
    for _ in 1..total {
        session.next().expect("step should validate");
    }
}

#[test]
fn complete_offshore_draft_submits() {
    let record = submit(&complete_offshore_draft()).expect("valid draft");
    assert_eq!(record.draft.job_title, "Backend Engineer");
}

#[test]
fn offshore_submission_ignores_onsite_fields() {
    let draft = RequisitionDraft {
        onsite_work_mode: Some(OnsiteWorkMode::Hybrid),
        ..complete_offshore_draft()
    };
    assert!(submit(&draft).is_ok());
}

#[test]
fn onsite_submission_requires_onsite_step_fields() {
    let draft = RequisitionDraft {
        work_arrangement: Some(WorkArrangement::Onsite),
        ..complete_offshore_draft()
    };
    let err = submit(&draft).unwrap_err();
    let report = err.validation_report().expect("validation error");
    assert_eq!(report.fields(), vec![Field::OnsiteWorkMode]);

    assert!(submit(&complete_onsite_draft()).is_ok());
}

#[test]
fn switching_to_onsite_adds_exactly_one_step_and_keeps_values() {
    let mut session = FormSession::default();
    session
        .update(|d| {
            *d = RequisitionDraft {
                work_arrangement: None,
                ..complete_offshore_draft()
            }
        })
        .unwrap();
    let before = session.steps();
    assert_eq!(before.len(), 6);

    session
        .update(|d| d.work_arrangement = Some(WorkArrangement::Onsite))
        .unwrap();
    let after = session.steps();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last().unwrap().id, StepId::OnsiteSpecific);

    let draft = session.draft();
    assert_eq!(draft.total_budget_max, Some(Decimal::from(100_000)));
    assert_eq!(draft.primary_skills, vec!["Rust".to_string()]);
    assert_eq!(draft.client_name, "Globex");
    assert_eq!(draft.shift, "day");
    assert_eq!(draft.duties, "Design and ship APIs");
}

#[test]
fn billable_rate_gates_basic_details() {
    let mut draft = RequisitionDraft {
        billable: Billable::Yes,
        ..complete_offshore_draft()
    };
    let err = validate_step(StepId::BasicDetails, &draft).unwrap_err();
    let report = err.validation_report().unwrap();
    assert!(report.has(
        Field::ClientBillingRate,
        FieldErrorKind::ConditionalFieldMissing
    ));

    draft.client_billing_rate = Some(Decimal::from(50));
    assert!(validate_step(StepId::BasicDetails, &draft).is_ok());
}

#[test]
fn inverted_budget_fails_submission_on_max_field() {
    let draft = RequisitionDraft {
        total_budget_min: Some(Decimal::from(100_000)),
        total_budget_max: Some(Decimal::from(80_000)),
        ..complete_offshore_draft()
    };
    let err = submit(&draft).unwrap_err();
    let report = err.validation_report().unwrap();
    assert!(report.has(
        Field::TotalBudgetMax,
        FieldErrorKind::CrossFieldInconsistent
    ));
    assert_eq!(report.len(), 1);
}

#[test]
fn submission_lists_every_violation() {
    let draft = RequisitionDraft {
        expected_salary_min: Some(Decimal::from(90_000)),
        expected_salary_max: Some(Decimal::from(70_000)),
        billable: Billable::Yes,
        duties: String::new(),
        ..complete_offshore_draft()
    };
    let report = submit(&draft).unwrap_err().validation_report().cloned().unwrap();
    assert_eq!(
        report.fields(),
        vec![Field::ClientBillingRate, Field::ExpectedSalaryMax, Field::Duties]
    );
    assert!(report.has(
        Field::ClientBillingRate,
        FieldErrorKind::ConditionalFieldMissing
    ));
    assert!(report.has(
        Field::ExpectedSalaryMax,
        FieldErrorKind::CrossFieldInconsistent
    ));
    assert!(report.has(Field::Duties, FieldErrorKind::FieldRequired));
}

#[test]
fn whitespace_only_text_blocks_submission() {
    let draft = RequisitionDraft {
        job_title: "   ".into(),
        duties: " ".into(),
        ..complete_offshore_draft()
    };
    let report = submit(&draft).unwrap_err().validation_report().cloned().unwrap();
    assert_eq!(report.fields(), vec![Field::JobTitle, Field::Duties]);
    assert!(report.has(Field::JobTitle, FieldErrorKind::FieldRequired));
    assert!(report.has(Field::Duties, FieldErrorKind::FieldRequired));
}

#[test]
fn leftover_days_in_office_do_not_block_non_hybrid_submission() {
    let remote = RequisitionDraft {
        onsite_work_mode: Some(OnsiteWorkMode::Remote),
        onsite_location: String::new(),
        onsite_days_in_office: Some(0),
        ..complete_onsite_draft()
    };
    assert!(submit(&remote).is_ok());

    let onsite = RequisitionDraft {
        onsite_work_mode: Some(OnsiteWorkMode::Onsite),
        onsite_days_in_office: Some(9),
        ..complete_onsite_draft()
    };
    assert!(submit(&onsite).is_ok());

    let hybrid = RequisitionDraft {
        onsite_days_in_office: Some(9),
        ..complete_onsite_draft()
    };
    let report = submit(&hybrid).unwrap_err().validation_report().cloned().unwrap();
    assert!(report.has(Field::OnsiteDaysInOffice, FieldErrorKind::FieldOutOfRange));
}

#[test]
fn hybrid_days_in_office_required() {
    let mut draft = RequisitionDraft {
        onsite_days_in_office: None,
        ..complete_onsite_draft()
    };
    assert!(validate_step(StepId::OnsiteSpecific, &draft).is_err());

    draft.onsite_days_in_office = Some(3);
    assert!(validate_step(StepId::OnsiteSpecific, &draft).is_ok());
}

#[test]
fn next_stays_put_on_invalid_step() {
    let mut session = FormSession::default();
    let err = session.next().unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(session.current_step(), Some(StepId::BasicDetails));
    assert!(!session.is_completed(StepId::BasicDetails));
    assert!(!session.view().errors.is_empty());
}

#[test]
fn previous_has_no_gate_and_stops_at_first_step() {
    let mut session = FormSession::new(complete_offshore_draft());
    session.next().unwrap();
    session.update(|d| d.total_budget_min = None).unwrap();
    assert_eq!(session.previous().unwrap(), StepId::BasicDetails);
    assert_eq!(session.previous().unwrap(), StepId::BasicDetails);
}

#[test]
fn save_and_continue_skips_validation() {
    let mut session = FormSession::default();
    let next = session.save_and_continue().unwrap();
    assert_eq!(next, StepId::Compensation);
    let saved = session.last_saved().expect("snapshot");
    assert_eq!(saved.step, StepId::BasicDetails);
    assert_eq!(saved.draft, RequisitionDraft::default());
    assert!(!session.is_completed(StepId::BasicDetails));
}

#[test]
fn submit_only_from_last_step() {
    let mut session = FormSession::new(complete_offshore_draft());
    let err = session.submit().unwrap_err();
    assert!(matches!(err, Error::InvalidTransition(_)));
    assert!(!session.is_submitted());
}

#[test]
fn failed_submission_leaves_draft_untouched() {
    let mut session = FormSession::new(complete_offshore_draft());
    walk_to_last_step(&mut session);
    session
        .update(|d| {
            d.total_budget_min = Some(Decimal::from(100_000));
            d.total_budget_max = Some(Decimal::from(80_000));
        })
        .unwrap();
    let snapshot = session.draft().clone();

    assert!(session.submit().is_err());
    assert_eq!(session.state(), FormState::Editing { step: StepId::JobDescription });
    assert_eq!(session.draft(), &snapshot);
}

#[test]
fn submitted_session_is_terminal_until_reset() {
    let mut session = FormSession::new(complete_onsite_draft());
    walk_to_last_step(&mut session);
    assert_eq!(session.current_step(), Some(StepId::OnsiteSpecific));

    let record = session.submit().unwrap();
    assert_eq!(session.state(), FormState::Submitted { id: record.id });
    assert_eq!(session.progress(), (7, 7));

    assert!(matches!(session.next(), Err(Error::InvalidTransition(_))));
    assert!(matches!(
        session.update(|d| d.job_title = "Changed".into()),
        Err(Error::InvalidTransition(_))
    ));

    session.reset();
    assert_eq!(session.current_step(), Some(StepId::BasicDetails));
    assert_eq!(session.completed_steps().count(), 0);
    assert_eq!(session.draft(), &complete_onsite_draft());
}

#[test]
fn reset_restores_fresh_default_draft() {
    let mut session = FormSession::default();
    session.update(|d| d.job_title = "Temp".into()).unwrap();
    session.save_and_continue().unwrap();
    session.reset();
    assert_eq!(session.draft(), &RequisitionDraft::default());
    assert_eq!(session.current_step(), Some(StepId::BasicDetails));
    assert!(session.last_saved().is_none());
}

#[test]
fn leaving_onsite_moves_off_removed_step() {
    let mut session = FormSession::new(complete_onsite_draft());
    walk_to_last_step(&mut session);
    assert_eq!(session.current_step(), Some(StepId::OnsiteSpecific));

    session
        .update(|d| d.work_arrangement = Some(WorkArrangement::Offshore))
        .unwrap();
    assert_eq!(session.current_step(), Some(StepId::JobDescription));
    assert_eq!(session.steps().len(), 6);
    assert_eq!(session.draft().onsite_location, "Austin, TX");
    assert_eq!(session.progress(), (6, 6));
}

#[test]
fn go_to_allows_back_but_not_skipping_ahead() {
    let mut session = FormSession::new(complete_offshore_draft());
    session.next().unwrap();
    session.next().unwrap();

    assert_eq!(session.go_to(StepId::BasicDetails).unwrap(), StepId::BasicDetails);
    assert_eq!(
        session.go_to(StepId::SkillsQualifications).unwrap(),
        StepId::SkillsQualifications
    );
    assert!(matches!(
        session.go_to(StepId::JobDescription),
        Err(Error::InvalidTransition(_))
    ));
    assert!(matches!(
        session.go_to(StepId::OnsiteSpecific),
        Err(Error::InactiveStep(StepId::OnsiteSpecific))
    ));
}

#[test]
fn active_steps_are_numbered_in_order() {
    let steps = get_active_steps(&complete_onsite_draft());
    let numbers: Vec<usize> = steps.iter().map(|s| s.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
}
