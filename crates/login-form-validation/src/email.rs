//! Email address grammar

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part, a single `@`, then a domain made of dot-separated labels.
/// At least one dot is required in the domain and whitespace never matches.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+._%-]{1,256}@[A-Za-z0-9][A-Za-z0-9-]{0,64}(\.[A-Za-z0-9][A-Za-z0-9-]{0,25})+$";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).unwrap());

/// Validates email format
///
/// The value is matched as given; callers trim before asking.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com")]
    #[case("test.user@example.co.uk")]
    #[case("user+tag@example.com")]
    #[case("user_name@example-domain.com")]
    #[case("100%@numbers.io")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email), "{email} should be accepted");
    }

    #[rstest]
    #[case("")]
    #[case("not-an-email")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@@example.com")]
    #[case("user@example")]
    #[case("user@.com")]
    #[case("user@example..com")]
    #[case("us er@example.com")]
    #[case(" user@example.com")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!is_valid_email(email), "{email:?} should be rejected");
    }
}
