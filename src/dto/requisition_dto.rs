use serde::{Deserialize, Serialize};

use crate::models::requisition::{RequisitionStatus, RequisitionSummary};
use crate::models::step::{StepDefinition, StepId};
use crate::models::validation::FieldError;
use crate::services::form_service::FormState;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RequisitionListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub department: Option<String>,
}

impl RequisitionListQuery {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequisitionListResponse {
    pub items: Vec<RequisitionSummary>,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub pending: usize,
    pub approved: usize,
    pub draft: usize,
    pub total_positions: u32,
}

impl DashboardStats {
    pub fn from_items(items: &[RequisitionSummary]) -> Self {
        let count = |status: RequisitionStatus| items.iter().filter(|r| r.status == status).count();
        Self {
            pending: count(RequisitionStatus::Pending),
            approved: count(RequisitionStatus::Approved),
            draft: count(RequisitionStatus::Draft),
            total_positions: items.iter().map(|r| r.number_of_positions).sum(),
        }
    }
}

/// What a UI shell needs to render the form at any moment.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub state: FormState,
    pub steps: Vec<StepDefinition>,
    pub completed: Vec<StepId>,
    pub errors: Vec<FieldError>,
}
