//! Small validation helpers shared by the domain crates.

use crate::{DomainError, DomainResult};

/// Reject empty / whitespace-only text fields.
pub fn require_non_empty(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Reject percentages outside `0..=100`.
pub fn require_percent(field: &str, value: f64) -> DomainResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(DomainError::validation(format!(
            "{field} must be between 0 and 100"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected() {
        assert!(require_non_empty("name", "  ").is_err());
        assert!(require_non_empty("name", "Main DC").is_ok());
    }

    #[test]
    fn percent_bounds_are_inclusive() {
        assert!(require_percent("utilization", 0.0).is_ok());
        assert!(require_percent("utilization", 100.0).is_ok());
        assert!(require_percent("utilization", 100.5).is_err());
        assert!(require_percent("utilization", f64::NAN).is_err());
    }
}
