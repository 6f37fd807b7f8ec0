use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::reference::{label_for, DEPARTMENTS};
use crate::models::step::StepId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkArrangement {
    Offshore,
    Onsite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Billable {
    Yes,
    #[default]
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnsiteWorkMode {
    Remote,
    Hybrid,
    Onsite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequisitionStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
    Closed,
}

impl RequisitionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequisitionStatus::Draft => "draft",
            RequisitionStatus::Pending => "pending",
            RequisitionStatus::Approved => "approved",
            RequisitionStatus::Rejected => "rejected",
            RequisitionStatus::Closed => "closed",
        }
    }
}

impl std::str::FromStr for RequisitionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(RequisitionStatus::Draft),
            "pending" => Ok(RequisitionStatus::Pending),
            "approved" => Ok(RequisitionStatus::Approved),
            "rejected" => Ok(RequisitionStatus::Rejected),
            "closed" => Ok(RequisitionStatus::Closed),
            other => Err(format!("unknown requisition status: {}", other)),
        }
    }
}

/// Every value the intake form collects. Numeric and list constraints live on
/// the derive attributes; required text, conditional and cross-field
/// constraints live in the rule table of `services::validation_service`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RequisitionDraft {
    pub work_arrangement: Option<WorkArrangement>,
    pub job_type: String,
    pub job_title: String,
    pub department: String,
    pub requested_date: String,
    pub requested_by: String,
    pub hiring_manager: String,
    #[validate(range(min = 1, message = "Number of positions must be at least 1"))]
    pub number_of_positions: u32,
    pub billable: Billable,
    pub client_billing_rate: Option<Decimal>,

    pub total_budget_min: Option<Decimal>,
    pub total_budget_max: Option<Decimal>,
    pub expected_salary_min: Option<Decimal>,
    pub expected_salary_max: Option<Decimal>,

    #[validate(length(min = 1, message = "At least one primary skill is required"))]
    pub primary_skills: Vec<String>,
    pub secondary_skills: Vec<String>,
    pub certifications: Vec<String>,
    pub experience_years: Option<u32>,
    pub education: String,

    pub project_name: String,
    pub client_name: String,
    pub business_unit: String,

    pub work_location: String,
    pub shift: String,
    pub preferred_timezone: String,

    pub job_purpose: String,
    pub duties: String,
    pub specifications: String,
    pub good_to_have: String,
    pub additional_notes: String,

    pub onsite_work_mode: Option<OnsiteWorkMode>,
    pub onsite_location: String,
    pub onsite_days_in_office: Option<u8>,
}

impl Default for RequisitionDraft {
    fn default() -> Self {
        Self {
            work_arrangement: None,
            job_type: String::new(),
            job_title: String::new(),
            department: String::new(),
            requested_date: String::new(),
            requested_by: String::new(),
            hiring_manager: String::new(),
            number_of_positions: 1,
            billable: Billable::No,
            client_billing_rate: None,
            total_budget_min: None,
            total_budget_max: None,
            expected_salary_min: None,
            expected_salary_max: None,
            primary_skills: Vec::new(),
            secondary_skills: Vec::new(),
            certifications: Vec::new(),
            experience_years: None,
            education: String::new(),
            project_name: String::new(),
            client_name: String::new(),
            business_unit: String::new(),
            work_location: String::new(),
            shift: String::new(),
            preferred_timezone: String::new(),
            job_purpose: String::new(),
            duties: String::new(),
            specifications: String::new(),
            good_to_have: String::new(),
            additional_notes: String::new(),
            onsite_work_mode: None,
            onsite_location: String::new(),
            onsite_days_in_office: None,
        }
    }
}

impl RequisitionDraft {
    pub fn with_requester(requested_by: impl Into<String>) -> Self {
        Self {
            requested_by: requested_by.into(),
            ..Self::default()
        }
    }

    pub fn is_onsite(&self) -> bool {
        self.work_arrangement == Some(WorkArrangement::Onsite)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedRequisition {
    pub id: Uuid,
    pub status: RequisitionStatus,
    pub draft: RequisitionDraft,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedDraft {
    pub draft: RequisitionDraft,
    pub step: StepId,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionSummary {
    pub id: String,
    pub job_title: String,
    pub department: String,
    pub status: RequisitionStatus,
    pub requested_by: String,
    pub requested_date: String,
    pub number_of_positions: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&SubmittedRequisition> for RequisitionSummary {
    fn from(value: &SubmittedRequisition) -> Self {
        Self {
            id: value.id.to_string(),
            job_title: value.draft.job_title.clone(),
            department: label_for(DEPARTMENTS, &value.draft.department)
                .map(str::to_string)
                .unwrap_or_else(|| value.draft.department.clone()),
            status: value.status,
            requested_by: value.draft.requested_by.clone(),
            requested_date: value.draft.requested_date.clone(),
            number_of_positions: value.draft.number_of_positions,
            created_at: value.submitted_at,
            updated_at: value.submitted_at,
        }
    }
}
