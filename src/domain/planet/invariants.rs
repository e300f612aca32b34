use crate::domain::{DomainError, DomainResult};

/// Name must be present and not blank
pub(super) fn validate_name(name: Option<String>) -> DomainResult<String> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(DomainError::MissingName),
    }
}

/// Invariants that must hold true for the Planet domain:
///
/// 1. Name is present and not blank
/// 2. Diameter is always a known integer
/// 3. Surface water and population may be unknown
/// 4. No field changes after construction

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        assert_eq!(validate_name(Some("Tatooine".to_string())).unwrap(), "Tatooine");
    }

    #[test]
    fn test_empty_name_fails() {
        assert!(matches!(validate_name(Some(String::new())), Err(DomainError::MissingName)));
    }

    #[test]
    fn test_blank_name_fails() {
        assert!(validate_name(Some("   ".to_string())).is_err());
    }

    #[test]
    fn test_name_is_kept_verbatim() {
        assert_eq!(validate_name(Some(" Naboo".to_string())).unwrap(), " Naboo");
    }
}
