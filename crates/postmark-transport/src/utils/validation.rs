/// Input validation utilities
use crate::constants::RECIPIENTS_LIMIT;
use crate::error::PostmarkError;

/// Checks a recipient total against the provider's per-message limit
pub fn validate_recipient_count(count: usize) -> Result<(), PostmarkError> {
    if count <= RECIPIENTS_LIMIT {
        Ok(())
    } else {
        Err(PostmarkError::Validation(format!(
            "{} recipients exceeds the limit of {} per message",
            count, RECIPIENTS_LIMIT
        )))
    }
}
