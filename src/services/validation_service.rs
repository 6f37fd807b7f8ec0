use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::reference::{
    contains_value, BUSINESS_UNITS, DEPARTMENTS, EDUCATION_LEVELS, JOB_TYPES, SHIFTS, TIMEZONES,
};
use crate::models::requisition::{Billable, OnsiteWorkMode, RequisitionDraft};
use crate::models::step::{Field, StepId};
use crate::models::validation::{FieldError, FieldErrorKind, ValidationReport};
use crate::services::step_service::{active_step_ids, is_active};
use crate::utils::{time, validation};

/// A check that only runs when `applies` holds for the current draft.
pub struct FieldRule {
    pub field: Field,
    pub kind: FieldErrorKind,
    pub applies: fn(&RequisitionDraft) -> bool,
    pub violated: fn(&RequisitionDraft) -> bool,
    pub message: &'static str,
}

impl FieldRule {
    pub fn evaluate(&self, draft: &RequisitionDraft) -> Option<FieldError> {
        if (self.applies)(draft) && (self.violated)(draft) {
            Some(FieldError::new(self.field, self.kind, self.message))
        } else {
            None
        }
    }
}

fn always(_: &RequisitionDraft) -> bool {
    true
}

fn negative(value: Option<Decimal>) -> bool {
    value.map_or(false, |v| v < Decimal::ZERO)
}

fn inverted(min: Option<Decimal>, max: Option<Decimal>) -> bool {
    min.zip(max).map_or(false, |(min, max)| min > max)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub static RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::WorkArrangement,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| d.work_arrangement.is_none(),
        message: "Work arrangement is required",
    },
    FieldRule {
        field: Field::JobType,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.job_type),
        message: "Job type is required",
    },
    FieldRule {
        field: Field::JobType,
        kind: FieldErrorKind::FieldOutOfRange,
        applies: |d| !is_blank(&d.job_type),
        violated: |d| !contains_value(JOB_TYPES, &d.job_type),
        message: "Select a valid job type",
    },
    FieldRule {
        field: Field::JobTitle,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.job_title),
        message: "Job title is required",
    },
    FieldRule {
        field: Field::Department,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.department),
        message: "Department is required",
    },
    FieldRule {
        field: Field::Department,
        kind: FieldErrorKind::FieldOutOfRange,
        applies: |d| !is_blank(&d.department),
        violated: |d| !contains_value(DEPARTMENTS, &d.department),
        message: "Select a valid department",
    },
    FieldRule {
        field: Field::RequestedDate,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.requested_date),
        message: "Requested date is required",
    },
    FieldRule {
        field: Field::RequestedDate,
        kind: FieldErrorKind::FieldOutOfRange,
        applies: |d| !is_blank(&d.requested_date),
        violated: |d| time::parse_date(&d.requested_date).is_err(),
        message: "Requested date must be a valid date (YYYY-MM-DD)",
    },
    FieldRule {
        field: Field::RequestedBy,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.requested_by),
        message: "Requested by is required",
    },
    FieldRule {
        field: Field::HiringManager,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.hiring_manager),
        message: "Hiring manager is required",
    },
    FieldRule {
        field: Field::ClientBillingRate,
        kind: FieldErrorKind::ConditionalFieldMissing,
        applies: |d| d.billable == Billable::Yes,
        violated: |d| d.client_billing_rate.is_none(),
        message: "Client billing rate is required for billable positions",
    },
    FieldRule {
        field: Field::ClientBillingRate,
        kind: FieldErrorKind::FieldOutOfRange,
        applies: always,
        violated: |d| negative(d.client_billing_rate),
        message: "Client billing rate must be positive",
    },
    FieldRule {
        field: Field::TotalBudgetMin,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| d.total_budget_min.is_none(),
        message: "Total budget min is required",
    },
    FieldRule {
        field: Field::TotalBudgetMin,
        kind: FieldErrorKind::FieldOutOfRange,
        applies: always,
        violated: |d| negative(d.total_budget_min),
        message: "Total budget min must be positive",
    },
    FieldRule {
        field: Field::TotalBudgetMax,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| d.total_budget_max.is_none(),
        message: "Total budget max is required",
    },
    FieldRule {
        field: Field::TotalBudgetMax,
        kind: FieldErrorKind::FieldOutOfRange,
        applies: always,
        violated: |d| negative(d.total_budget_max),
        message: "Total budget max must be positive",
    },
    FieldRule {
        field: Field::TotalBudgetMax,
        kind: FieldErrorKind::CrossFieldInconsistent,
        applies: always,
        violated: |d| inverted(d.total_budget_min, d.total_budget_max),
        message: "Total budget min must be less than or equal to max",
    },
    FieldRule {
        field: Field::ExpectedSalaryMin,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| d.expected_salary_min.is_none(),
        message: "Expected salary min is required",
    },
    FieldRule {
        field: Field::ExpectedSalaryMin,
        kind: FieldErrorKind::FieldOutOfRange,
        applies: always,
        violated: |d| negative(d.expected_salary_min),
        message: "Expected salary min must be positive",
    },
    FieldRule {
        field: Field::ExpectedSalaryMax,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| d.expected_salary_max.is_none(),
        message: "Expected salary max is required",
    },
    FieldRule {
        field: Field::ExpectedSalaryMax,
        kind: FieldErrorKind::FieldOutOfRange,
        applies: always,
        violated: |d| negative(d.expected_salary_max),
        message: "Expected salary max must be positive",
    },
    FieldRule {
        field: Field::ExpectedSalaryMax,
        kind: FieldErrorKind::CrossFieldInconsistent,
        applies: always,
        violated: |d| inverted(d.expected_salary_min, d.expected_salary_max),
        message: "Expected salary min must be less than or equal to max",
    },
    FieldRule {
        field: Field::ExperienceYears,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| d.experience_years.is_none(),
        message: "Experience years is required",
    },
    FieldRule {
        field: Field::Education,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.education),
        message: "Education level is required",
    },
    FieldRule {
        field: Field::Education,
        kind: FieldErrorKind::FieldOutOfRange,
        applies: |d| !is_blank(&d.education),
        violated: |d| !contains_value(EDUCATION_LEVELS, &d.education),
        message: "Select a valid education level",
    },
    FieldRule {
        field: Field::ProjectName,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.project_name),
        message: "Project name is required",
    },
    FieldRule {
        field: Field::ClientName,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.client_name),
        message: "Client name is required",
    },
    FieldRule {
        field: Field::BusinessUnit,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.business_unit),
        message: "Business unit is required",
    },
    FieldRule {
        field: Field::BusinessUnit,
        kind: FieldErrorKind::FieldOutOfRange,
        applies: |d| !is_blank(&d.business_unit),
        violated: |d| !contains_value(BUSINESS_UNITS, &d.business_unit),
        message: "Select a valid business unit",
    },
    FieldRule {
        field: Field::WorkLocation,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.work_location),
        message: "Work location is required",
    },
    FieldRule {
        field: Field::Shift,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.shift),
        message: "Shift is required",
    },
    FieldRule {
        field: Field::Shift,
        kind: FieldErrorKind::FieldOutOfRange,
        applies: |d| !is_blank(&d.shift),
        violated: |d| !contains_value(SHIFTS, &d.shift),
        message: "Select a valid shift",
    },
    FieldRule {
        field: Field::PreferredTimezone,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.preferred_timezone),
        message: "Preferred timezone is required",
    },
    FieldRule {
        field: Field::PreferredTimezone,
        kind: FieldErrorKind::FieldOutOfRange,
        applies: |d| !is_blank(&d.preferred_timezone),
        violated: |d| !contains_value(TIMEZONES, &d.preferred_timezone),
        message: "Select a valid timezone",
    },
    FieldRule {
        field: Field::JobPurpose,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.job_purpose),
        message: "Job purpose is required",
    },
    FieldRule {
        field: Field::Duties,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.duties),
        message: "Duties are required",
    },
    FieldRule {
        field: Field::Specifications,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| is_blank(&d.specifications),
        message: "Specifications are required",
    },
    FieldRule {
        field: Field::OnsiteWorkMode,
        kind: FieldErrorKind::FieldRequired,
        applies: always,
        violated: |d| d.onsite_work_mode.is_none(),
        message: "Work mode is required",
    },
    FieldRule {
        field: Field::OnsiteLocation,
        kind: FieldErrorKind::ConditionalFieldMissing,
        applies: |d| matches!(d.onsite_work_mode, Some(mode) if mode != OnsiteWorkMode::Remote),
        violated: |d| is_blank(&d.onsite_location),
        message: "Onsite location is required unless the role is remote",
    },
    FieldRule {
        field: Field::OnsiteDaysInOffice,
        kind: FieldErrorKind::ConditionalFieldMissing,
        applies: |d| d.onsite_work_mode == Some(OnsiteWorkMode::Hybrid),
        violated: |d| d.onsite_days_in_office.is_none(),
        message: "Days in office is required for hybrid roles",
    },
    FieldRule {
        field: Field::OnsiteDaysInOffice,
        kind: FieldErrorKind::FieldOutOfRange,
        applies: |d| d.onsite_work_mode == Some(OnsiteWorkMode::Hybrid),
        violated: |d| matches!(d.onsite_days_in_office, Some(days) if !(1..=7).contains(&days)),
        message: "Days in office must be between 1 and 7",
    },
];

fn collect(steps: &[StepId], draft: &RequisitionDraft) -> ValidationReport {
    let mut errors: Vec<FieldError> = validation::field_errors(draft)
        .into_iter()
        .filter(|e| steps.iter().any(|s| s.contains(e.field)))
        .collect();

    errors.extend(
        RULES
            .iter()
            .filter(|rule| steps.iter().any(|s| s.contains(rule.field)))
            .filter_map(|rule| rule.evaluate(draft)),
    );

    ValidationReport::new(errors)
}

/// Violations for one step's fields, evaluated against the current draft.
pub fn check_step(step: StepId, draft: &RequisitionDraft) -> ValidationReport {
    collect(&[step], draft)
}

pub fn validate_step(step: StepId, draft: &RequisitionDraft) -> Result<()> {
    if !is_active(step, draft) {
        return Err(Error::InactiveStep(step));
    }
    let report = check_step(step, draft);
    if !report.is_empty() {
        tracing::debug!(step = ?step, errors = report.len(), "step validation failed");
    }
    report.into_result()
}

/// Whole-record validation over every step of the active sequence.
pub fn validate_submission(draft: &RequisitionDraft) -> Result<()> {
    let steps = active_step_ids(draft);
    collect(&steps, draft).into_result()
}
