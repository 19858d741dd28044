//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entities into these models at the data boundary and
//! controllers convert them into DTOs at the HTTP boundary. Parameter types carry the
//! explicit `validate()` checks that run before anything is persisted.

pub mod album;
pub mod genre;
pub mod track;
pub mod user;

use crate::server::validation::{FieldError, Location, ValidationErrors};

pub(crate) const MAX_TITLE_LENGTH: usize = 255;
pub(crate) const MAX_DESCRIPTION_LENGTH: usize = 5000;

/// Records a failure when `value` is blank or its character count is outside `min..=max`.
pub(crate) fn check_length(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let length = value.chars().count();

    let message = if min > 0 && value.trim().is_empty() {
        format!("{} is required", field)
    } else if length < min || length > max {
        format!("{} must be between {} and {} characters", field, min, max)
    } else {
        return;
    };

    errors.push(FieldError {
        location: Location::Body,
        field: field.to_string(),
        message,
    });
}

/// The value a nullable column holds once `patch` is applied.
///
/// `None` keeps `existing`, `Some(None)` clears it.
pub(crate) fn merged<'a, T>(patch: &'a Option<Option<T>>, existing: &'a Option<T>) -> &'a Option<T> {
    patch.as_ref().unwrap_or(existing)
}

/// Converts accumulated failures into a result.
pub(crate) fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
