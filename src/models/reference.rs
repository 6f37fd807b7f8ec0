use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
}

impl Skill {
    pub fn new(id: &str, name: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
        }
    }
}

/// A `(value, label)` pair offered by a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const JOB_TYPES: &[SelectOption] = &[
    opt("full-time", "Full-time"),
    opt("part-time", "Part-time"),
    opt("contract", "Contract"),
    opt("temporary", "Temporary"),
    opt("internship", "Internship"),
];

pub const DEPARTMENTS: &[SelectOption] = &[
    opt("engineering", "Engineering"),
    opt("product", "Product"),
    opt("design", "Design"),
    opt("marketing", "Marketing"),
    opt("sales", "Sales"),
    opt("operations", "Operations"),
    opt("hr", "Human Resources"),
    opt("finance", "Finance"),
];

pub const EDUCATION_LEVELS: &[SelectOption] = &[
    opt("high-school", "High School"),
    opt("associate", "Associate Degree"),
    opt("bachelor", "Bachelor's Degree"),
    opt("master", "Master's Degree"),
    opt("phd", "PhD"),
    opt("certification", "Professional Certification"),
];

pub const BUSINESS_UNITS: &[SelectOption] = &[
    opt("consulting", "Consulting"),
    opt("product-development", "Product Development"),
    opt("managed-services", "Managed Services"),
    opt("research-development", "Research & Development"),
    opt("support", "Support"),
];

pub const SHIFTS: &[SelectOption] = &[
    opt("day", "Day Shift (9 AM - 5 PM)"),
    opt("evening", "Evening Shift (2 PM - 10 PM)"),
    opt("night", "Night Shift (10 PM - 6 AM)"),
    opt("flexible", "Flexible"),
    opt("rotating", "Rotating Shifts"),
];

pub const TIMEZONES: &[SelectOption] = &[
    opt("est", "Eastern Time (EST)"),
    opt("cst", "Central Time (CST)"),
    opt("mst", "Mountain Time (MST)"),
    opt("pst", "Pacific Time (PST)"),
    opt("utc", "UTC"),
    opt("ist", "Indian Standard Time (IST)"),
    opt("cet", "Central European Time (CET)"),
];

pub const CERTIFICATIONS: &[&str] = &[
    "AWS Certified Solutions Architect",
    "Certified Kubernetes Administrator",
    "PMP",
    "Scrum Master",
    "CISSP",
    "Google Cloud Professional",
    "Azure Fundamentals",
];

pub fn contains_value(options: &[SelectOption], value: &str) -> bool {
    options.iter().any(|o| o.value == value)
}

pub fn label_for(options: &[SelectOption], value: &str) -> Option<&'static str> {
    options.iter().find(|o| o.value == value).map(|o| o.label)
}

pub fn default_skills() -> Vec<Skill> {
    vec![
        Skill::new("1", "React", "Frontend"),
        Skill::new("2", "TypeScript", "Programming"),
        Skill::new("3", "Node.js", "Backend"),
        Skill::new("4", "Python", "Programming"),
        Skill::new("5", "Java", "Programming"),
        Skill::new("6", "AWS", "Cloud"),
        Skill::new("7", "Docker", "DevOps"),
        Skill::new("8", "Kubernetes", "DevOps"),
        Skill::new("9", "MongoDB", "Database"),
        Skill::new("10", "PostgreSQL", "Database"),
        Skill::new("11", "GraphQL", "API"),
        Skill::new("12", "REST API", "API"),
        Skill::new("13", "Machine Learning", "AI/ML"),
        Skill::new("14", "Data Analysis", "Analytics"),
        Skill::new("15", "Project Management", "Management"),
    ]
}
