//! Pure presence checks for required command parameters.

use crate::error::TaskpadError;

/// Require that an optional parameter is present.
///
/// Returns the inner value, or an empty-body failure naming the missing
/// field. No shared state; callers pass everything in.
///
/// # Errors
///
/// Returns [`TaskpadError::EmptyBody`] when `value` is `None`.
pub fn require<T>(value: Option<T>, field: &str, context: &str) -> Result<T, TaskpadError> {
    value.ok_or_else(|| TaskpadError::empty_body(field, context))
}
