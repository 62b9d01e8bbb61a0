//! Password validation functions

/// Why a password was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordIssue {
    /// Nothing was entered
    Missing,
    /// Entered, but shorter than the configured minimum
    TooShort { min: usize },
}

/// Validates password presence and length
///
/// Length is counted in characters, not bytes. The password is never
/// trimmed: surrounding spaces are part of it.
pub fn validate_password(password: &str, min_length: usize) -> Result<(), PasswordIssue> {
    if password.is_empty() {
        return Err(PasswordIssue::Missing);
    }

    if password.chars().count() < min_length {
        return Err(PasswordIssue::TooShort { min: min_length });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password() {
        assert_eq!(validate_password("", 6), Err(PasswordIssue::Missing));
        // Even with the smallest minimum
        assert_eq!(validate_password("", 1), Err(PasswordIssue::Missing));
    }

    #[test]
    fn test_min_length() {
        assert!(validate_password("abcdef", 6).is_ok());
        assert!(validate_password("abcdefg", 6).is_ok());
        assert_eq!(
            validate_password("abc", 6),
            Err(PasswordIssue::TooShort { min: 6 })
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // Six characters, twelve bytes
        assert!(validate_password("ññññññ", 6).is_ok());
        assert_eq!(
            validate_password("ñññññ", 6),
            Err(PasswordIssue::TooShort { min: 6 })
        );
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert!(validate_password("  ab  ", 6).is_ok());
        assert!(validate_password("      ", 6).is_ok());
    }
}
