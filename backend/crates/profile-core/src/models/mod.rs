pub mod badge;
pub mod identity_record;
pub mod learning_goal;
pub mod user_profile;
pub mod user_reference;

use crate::{CoreError, Result as CoreErrorResult};

/// Checks that `value` has between `min` and `max` characters (inclusive).
#[track_caller]
pub(crate) fn check_length(field: &str, value: &str, min: usize, max: usize) -> CoreErrorResult<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(CoreError::validation(
            field,
            format!("{field} must be {min}-{max} characters, got {len}"),
        ));
    }
    Ok(())
}
