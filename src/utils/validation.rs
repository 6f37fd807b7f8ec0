use validator::{Validate, ValidationErrors};

use crate::models::step::Field;
use crate::models::validation::{FieldError, FieldErrorKind, ValidationReport};

pub fn validate<T: Validate>(val: &T) -> Result<(), ValidationErrors> {
    val.validate()
}

/// Runs the derive-based checks and flattens them into field errors.
pub fn field_errors<T: Validate>(val: &T) -> Vec<FieldError> {
    match validate(val) {
        Ok(()) => Vec::new(),
        Err(errors) => flatten(&errors),
    }
}

fn flatten(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (name, errs) in errors.field_errors() {
        let Some(field) = Field::from_name(&*name) else {
            tracing::warn!(field = %name, "validation error for unknown field");
            continue;
        };
        for err in errs.iter() {
            let kind = match &*err.code {
                "length" | "required" => FieldErrorKind::FieldRequired,
                _ => FieldErrorKind::FieldOutOfRange,
            };
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            out.push(FieldError::new(field, kind, message));
        }
    }
    out
}

impl From<ValidationErrors> for ValidationReport {
    fn from(errors: ValidationErrors) -> Self {
        ValidationReport::new(flatten(&errors))
    }
}
