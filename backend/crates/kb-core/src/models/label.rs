use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MAX_LABEL_LENGTH: usize = 30;

/// Labels are 1-30 characters of `[A-Za-z0-9-_/]`.
#[track_caller]
pub fn validate_label(label: &str) -> CoreResult<()> {
    if label.is_empty() || label.chars().count() > MAX_LABEL_LENGTH {
        return Err(CoreError::Validation {
            message: format!("Label must be 1-{MAX_LABEL_LENGTH} characters"),
            field: Some("labels".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if !label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/'))
    {
        return Err(CoreError::Validation {
            message: format!("Label '{label}' may only contain letters, digits, '-', '_' and '/'"),
            field: Some("labels".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
