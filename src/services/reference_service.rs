use crate::models::reference::{
    default_skills, SelectOption, Skill, BUSINESS_UNITS, CERTIFICATIONS, DEPARTMENTS,
    EDUCATION_LEVELS, JOB_TYPES, SHIFTS, TIMEZONES,
};

#[derive(Clone)]
pub struct ReferenceService {
    skills: Vec<Skill>,
    certifications: Vec<String>,
}

impl Default for ReferenceService {
    fn default() -> Self {
        Self::new(
            default_skills(),
            CERTIFICATIONS.iter().map(|c| c.to_string()).collect(),
        )
    }
}

impl ReferenceService {
    pub fn new(skills: Vec<Skill>, certifications: Vec<String>) -> Self {
        Self {
            skills,
            certifications,
        }
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn certifications(&self) -> &[String] {
        &self.certifications
    }

    pub fn search_skills(&self, term: &str) -> Vec<&Skill> {
        let term = term.trim().to_lowercase();
        self.skills
            .iter()
            .filter(|s| {
                term.is_empty()
                    || s.name.to_lowercase().contains(&term)
                    || s.category.to_lowercase().contains(&term)
            })
            .collect()
    }

    pub fn skills_in_category(&self, category: &str) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|s| s.category.eq_ignore_ascii_case(category))
            .collect()
    }

    pub fn job_types(&self) -> &'static [SelectOption] {
        JOB_TYPES
    }

    pub fn departments(&self) -> &'static [SelectOption] {
        DEPARTMENTS
    }

    pub fn education_levels(&self) -> &'static [SelectOption] {
        EDUCATION_LEVELS
    }

    pub fn business_units(&self) -> &'static [SelectOption] {
        BUSINESS_UNITS
    }

    pub fn shifts(&self) -> &'static [SelectOption] {
        SHIFTS
    }

    pub fn timezones(&self) -> &'static [SelectOption] {
        TIMEZONES
    }
}

/// Adds a trimmed skill unless blank or already selected. Returns whether it was added.
pub fn add_skill(selected: &mut Vec<String>, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || selected.iter().any(|s| s == name) {
        return false;
    }
    selected.push(name.to_string());
    true
}

pub fn remove_skill(selected: &mut Vec<String>, name: &str) -> bool {
    let before = selected.len();
    selected.retain(|s| s != name);
    selected.len() != before
}
