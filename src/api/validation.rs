//! Request validation helpers.
//!
//! `validator` reports errors keyed by field in a hash map. Clients expect
//! them in the order the fields are declared, so every validated DTO lists
//! its fields through [`FieldOrder`].

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{AppError, FieldError};

/// Declaration order of the validated fields of a request DTO.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// Runs every rule of the payload and collects all violations.
///
/// # Errors
///
/// Returns [`AppError::Validation`] listing each violated rule, ordered by
/// field declaration order and then by rule order.
pub fn validate_payload<T: Validate + FieldOrder>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|errors| AppError::validation(flatten::<T>(&errors)))
}

fn flatten<T: FieldOrder>(errors: &ValidationErrors) -> Vec<FieldError> {
    let field_errors = errors.field_errors();
    let mut flat = Vec::new();

    for field in T::FIELDS {
        let Some(rules) = field_errors.get(*field) else {
            continue;
        };
        for rule in rules.iter() {
            let message = rule
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {field}"));
            flat.push(FieldError::new(*field, message));
        }
    }

    flat
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
