use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::dto::requisition_dto::{DashboardStats, RequisitionListQuery, RequisitionListResponse};
use crate::error::{Error, Result};
use crate::models::requisition::{RequisitionStatus, RequisitionSummary, SubmittedRequisition};
use crate::utils::time;

#[async_trait]
pub trait RequisitionSource: Send + Sync {
    async fn fetch_requisitions(&self) -> Result<Vec<RequisitionSummary>>;
}

/// In-memory stand-in for the requisition API, answering after `delay`.
pub struct MockRequisitionSource {
    rows: RwLock<Vec<RequisitionSummary>>,
    delay: Duration,
}

impl MockRequisitionSource {
    pub fn new(delay: Duration) -> Result<Self> {
        Ok(Self::with_rows(seed_rows()?, delay))
    }

    pub fn with_rows(rows: Vec<RequisitionSummary>, delay: Duration) -> Self {
        Self {
            rows: RwLock::new(rows),
            delay,
        }
    }

    pub async fn record(&self, submitted: &SubmittedRequisition) {
        self.rows.write().await.push(RequisitionSummary::from(submitted));
    }
}

#[async_trait]
impl RequisitionSource for MockRequisitionSource {
    async fn fetch_requisitions(&self) -> Result<Vec<RequisitionSummary>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.rows.read().await.clone())
    }
}

#[allow(clippy::too_many_arguments)]
fn row(
    id: &str,
    job_title: &str,
    department: &str,
    status: RequisitionStatus,
    requested_by: &str,
    requested_date: &str,
    number_of_positions: u32,
    created_at: &str,
    updated_at: &str,
) -> Result<RequisitionSummary> {
    Ok(RequisitionSummary {
        id: id.to_string(),
        job_title: job_title.to_string(),
        department: department.to_string(),
        status,
        requested_by: requested_by.to_string(),
        requested_date: requested_date.to_string(),
        number_of_positions,
        created_at: time::from_rfc3339(created_at)?,
        updated_at: time::from_rfc3339(updated_at)?,
    })
}

pub fn seed_rows() -> Result<Vec<RequisitionSummary>> {
    use RequisitionStatus::*;
    Ok(vec![
        row(
            "1",
            "Senior Software Engineer",
            "Engineering",
            Pending,
            "John Smith",
            "2024-01-15",
            2,
            "2024-01-15T10:00:00Z",
            "2024-01-16T14:30:00Z",
        )?,
        row(
            "2",
            "Product Manager",
            "Product",
            Approved,
            "Sarah Johnson",
            "2024-01-10",
            1,
            "2024-01-10T09:00:00Z",
            "2024-01-12T16:45:00Z",
        )?,
        row(
            "3",
            "UX Designer",
            "Design",
            Draft,
            "Mike Davis",
            "2024-01-20",
            1,
            "2024-01-20T11:15:00Z",
            "2024-01-20T11:15:00Z",
        )?,
        row(
            "4",
            "Data Analyst",
            "Analytics",
            Rejected,
            "Emily Brown",
            "2024-01-05",
            1,
            "2024-01-05T14:20:00Z",
            "2024-01-08T10:00:00Z",
        )?,
        row(
            "5",
            "DevOps Engineer",
            "Engineering",
            Closed,
            "Alex Wilson",
            "2023-12-15",
            1,
            "2023-12-15T08:30:00Z",
            "2024-01-02T17:00:00Z",
        )?,
    ])
}

#[derive(Clone)]
pub struct RequisitionService {
    source: Arc<dyn RequisitionSource>,
}

impl RequisitionService {
    pub fn new(source: Arc<dyn RequisitionSource>) -> Self {
        Self { source }
    }

    pub async fn list(&self, query: RequisitionListQuery) -> Result<RequisitionListResponse> {
        let status = match query.status.as_deref().filter(|s| !is_all(s)) {
            Some(raw) => Some(raw.parse::<RequisitionStatus>().map_err(Error::BadRequest)?),
            None => None,
        };
        let department = query.department.filter(|d| !is_all(d));
        let search = query
            .search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let rows = self.source.fetch_requisitions().await?;
        let items: Vec<RequisitionSummary> = rows
            .into_iter()
            .filter(|r| {
                search.as_ref().map_or(true, |term| {
                    r.job_title.to_lowercase().contains(term)
                        || r.requested_by.to_lowercase().contains(term)
                })
            })
            .filter(|r| status.map_or(true, |s| r.status == s))
            .filter(|r| department.as_ref().map_or(true, |d| &r.department == d))
            .collect();

        tracing::debug!(total = items.len(), "listed requisitions");
        Ok(RequisitionListResponse {
            total: items.len(),
            items,
        })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<RequisitionSummary> {
        self.source
            .fetch_requisitions()
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(format!("Requisition {} not found", id)))
    }

    pub async fn stats(&self) -> Result<DashboardStats> {
        let rows = self.source.fetch_requisitions().await?;
        Ok(DashboardStats::from_items(&rows))
    }
}

fn is_all(value: &str) -> bool {
    value.trim().is_empty() || value.eq_ignore_ascii_case("all")
}
