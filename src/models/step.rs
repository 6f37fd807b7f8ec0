use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    BasicDetails,
    Compensation,
    SkillsQualifications,
    ProjectClient,
    LocationShift,
    JobDescription,
    OnsiteSpecific,
}

impl StepId {
    pub const BASE_SEQUENCE: [StepId; 6] = [
        StepId::BasicDetails,
        StepId::Compensation,
        StepId::SkillsQualifications,
        StepId::ProjectClient,
        StepId::LocationShift,
        StepId::JobDescription,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            StepId::BasicDetails => "Basic Details",
            StepId::Compensation => "Budget & Compensation",
            StepId::SkillsQualifications => "Skills & Qualifications",
            StepId::ProjectClient => "Project & Client",
            StepId::LocationShift => "Location & Shift",
            StepId::JobDescription => "Job Description",
            StepId::OnsiteSpecific => "Onsite Specific",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StepId::BasicDetails => "Work arrangement, job type, title, department and billing",
            StepId::Compensation => "Total budget and expected salary ranges",
            StepId::SkillsQualifications => "Required skills, experience, and education",
            StepId::ProjectClient => "Project details and client information",
            StepId::LocationShift => "Work location, shift, and timezone",
            StepId::JobDescription => "Purpose, duties, and expectations",
            StepId::OnsiteSpecific => "Onsite work mode, location, and office days",
        }
    }

    /// Fields validated together when leaving this step.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            StepId::BasicDetails => &[
                Field::WorkArrangement,
                Field::JobType,
                Field::JobTitle,
                Field::Department,
                Field::RequestedDate,
                Field::RequestedBy,
                Field::HiringManager,
                Field::NumberOfPositions,
                Field::Billable,
                Field::ClientBillingRate,
            ],
            StepId::Compensation => &[
                Field::TotalBudgetMin,
                Field::TotalBudgetMax,
                Field::ExpectedSalaryMin,
                Field::ExpectedSalaryMax,
            ],
            StepId::SkillsQualifications => &[
                Field::PrimarySkills,
                Field::SecondarySkills,
                Field::Certifications,
                Field::ExperienceYears,
                Field::Education,
            ],
            StepId::ProjectClient => &[Field::ProjectName, Field::ClientName, Field::BusinessUnit],
            StepId::LocationShift => &[Field::WorkLocation, Field::Shift, Field::PreferredTimezone],
            StepId::JobDescription => &[
                Field::JobPurpose,
                Field::Duties,
                Field::Specifications,
                Field::GoodToHave,
                Field::AdditionalNotes,
            ],
            StepId::OnsiteSpecific => &[
                Field::OnsiteWorkMode,
                Field::OnsiteLocation,
                Field::OnsiteDaysInOffice,
            ],
        }
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields().contains(&field)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    WorkArrangement,
    JobType,
    JobTitle,
    Department,
    RequestedDate,
    RequestedBy,
    HiringManager,
    NumberOfPositions,
    Billable,
    ClientBillingRate,
    TotalBudgetMin,
    TotalBudgetMax,
    ExpectedSalaryMin,
    ExpectedSalaryMax,
    PrimarySkills,
    SecondarySkills,
    Certifications,
    ExperienceYears,
    Education,
    ProjectName,
    ClientName,
    BusinessUnit,
    WorkLocation,
    Shift,
    PreferredTimezone,
    JobPurpose,
    Duties,
    Specifications,
    GoodToHave,
    AdditionalNotes,
    OnsiteWorkMode,
    OnsiteLocation,
    OnsiteDaysInOffice,
}

impl Field {
    pub const ALL: [Field; 33] = [
        Field::WorkArrangement,
        Field::JobType,
        Field::JobTitle,
        Field::Department,
        Field::RequestedDate,
        Field::RequestedBy,
        Field::HiringManager,
        Field::NumberOfPositions,
        Field::Billable,
        Field::ClientBillingRate,
        Field::TotalBudgetMin,
        Field::TotalBudgetMax,
        Field::ExpectedSalaryMin,
        Field::ExpectedSalaryMax,
        Field::PrimarySkills,
        Field::SecondarySkills,
        Field::Certifications,
        Field::ExperienceYears,
        Field::Education,
        Field::ProjectName,
        Field::ClientName,
        Field::BusinessUnit,
        Field::WorkLocation,
        Field::Shift,
        Field::PreferredTimezone,
        Field::JobPurpose,
        Field::Duties,
        Field::Specifications,
        Field::GoodToHave,
        Field::AdditionalNotes,
        Field::OnsiteWorkMode,
        Field::OnsiteLocation,
        Field::OnsiteDaysInOffice,
    ];

    /// Name of the matching `RequisitionDraft` struct field.
    pub fn name(&self) -> &'static str {
        match self {
            Field::WorkArrangement => "work_arrangement",
            Field::JobType => "job_type",
            Field::JobTitle => "job_title",
            Field::Department => "department",
            Field::RequestedDate => "requested_date",
            Field::RequestedBy => "requested_by",
            Field::HiringManager => "hiring_manager",
            Field::NumberOfPositions => "number_of_positions",
            Field::Billable => "billable",
            Field::ClientBillingRate => "client_billing_rate",
            Field::TotalBudgetMin => "total_budget_min",
            Field::TotalBudgetMax => "total_budget_max",
            Field::ExpectedSalaryMin => "expected_salary_min",
            Field::ExpectedSalaryMax => "expected_salary_max",
            Field::PrimarySkills => "primary_skills",
            Field::SecondarySkills => "secondary_skills",
            Field::Certifications => "certifications",
            Field::ExperienceYears => "experience_years",
            Field::Education => "education",
            Field::ProjectName => "project_name",
            Field::ClientName => "client_name",
            Field::BusinessUnit => "business_unit",
            Field::WorkLocation => "work_location",
            Field::Shift => "shift",
            Field::PreferredTimezone => "preferred_timezone",
            Field::JobPurpose => "job_purpose",
            Field::Duties => "duties",
            Field::Specifications => "specifications",
            Field::GoodToHave => "good_to_have",
            Field::AdditionalNotes => "additional_notes",
            Field::OnsiteWorkMode => "onsite_work_mode",
            Field::OnsiteLocation => "onsite_location",
            Field::OnsiteDaysInOffice => "onsite_days_in_office",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDefinition {
    pub id: StepId,
    pub number: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [Field],
}

impl StepDefinition {
    pub fn new(id: StepId, number: usize) -> Self {
        Self {
            id,
            number,
            title: id.title(),
            description: id.description(),
            fields: id.fields(),
        }
    }
}
