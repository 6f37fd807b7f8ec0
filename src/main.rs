use requisition_intake::{
    config::{get_config, init_config},
    dto::requisition_dto::RequisitionListQuery,
    models::requisition::{Billable, OnsiteWorkMode, WorkArrangement},
    services::reference_service::add_skill,
    utils::telemetry::init_tracing,
    AppState,
};
use rust_decimal::Decimal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();
    init_tracing(config.log_format);

    let state = AppState::new(config.clone())?;
    let mut session = state.new_session();

    session.update(|d| {
        d.work_arrangement = Some(WorkArrangement::Onsite);
        d.job_type = "full-time".into();
        d.job_title = "Platform Engineer".into();
        d.department = "engineering".into();
        d.requested_date = "2024-02-01".into();
        if d.requested_by.is_empty() {
            d.requested_by = "John Smith".into();
        }
        d.hiring_manager = "Sarah Johnson".into();
        d.number_of_positions = 2;
        d.billable = Billable::Yes;
    })?;

    if let Err(e) = session.next() {
        warn!(error = %e, "basic details incomplete");
        session.update(|d| d.client_billing_rate = Some(Decimal::from(85)))?;
        session.next()?;
    }

    session.update(|d| {
        d.total_budget_min = Some(Decimal::from(120_000));
        d.total_budget_max = Some(Decimal::from(150_000));
        d.expected_salary_min = Some(Decimal::from(100_000));
        d.expected_salary_max = Some(Decimal::from(130_000));
    })?;
    session.next()?;

    session.update(|d| {
        add_skill(&mut d.primary_skills, "Kubernetes");
        add_skill(&mut d.primary_skills, "AWS");
        d.experience_years = Some(5);
        d.education = "bachelor".into();
    })?;
    session.next()?;

    session.update(|d| {
        d.project_name = "Atlas".into();
        d.client_name = "Globex".into();
        d.business_unit = "managed-services".into();
    })?;
    session.next()?;

    session.update(|d| {
        d.work_location = "Bengaluru".into();
        d.shift = "day".into();
        d.preferred_timezone = "ist".into();
    })?;
    session.next()?;

    session.update(|d| {
        d.job_purpose = "Run the client's container platform".into();
        d.duties = "Operate clusters, automate releases".into();
        d.specifications = "5+ years running Kubernetes in production".into();
    })?;
    session.next()?;

    session.update(|d| {
        d.onsite_work_mode = Some(OnsiteWorkMode::Hybrid);
        d.onsite_location = "Austin, TX".into();
        d.onsite_days_in_office = Some(3);
    })?;

    let submitted = session.submit()?;
    state.source.record(&submitted).await;
    info!("{}", serde_json::to_string_pretty(&submitted)?);

    let listing = state
        .requisition_service
        .list(RequisitionListQuery::default().department("Engineering"))
        .await?;
    for item in &listing.items {
        info!(id = %item.id, title = %item.job_title, status = item.status.as_str(), "requisition");
    }

    let stats = state.requisition_service.stats().await?;
    info!(
        pending = stats.pending,
        approved = stats.approved,
        draft = stats.draft,
        positions = stats.total_positions,
        "dashboard"
    );

    session.reset();
    info!(step = ?session.current_step(), "form reset");

    Ok(())
}
