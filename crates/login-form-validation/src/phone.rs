//! Phone number grammar
//!
//! Permissive international format: an optional `+country` prefix, an
//! optional parenthesized area code, then digits separated by `-`, `.` or
//! spaces. The number itself must start and end with a digit.
//!
//! Matching the grammar is not enough on its own: a phone number must also be
//! at least [`MIN_PHONE_LENGTH`] characters long.

use once_cell::sync::Lazy;
use regex::Regex;

pub const PHONE_PATTERN: &str = r"^(\+[0-9]+[ .\-]*)?(\([0-9]+\)[ .\-]*)?([0-9][0-9 .\-]+[0-9])$";

/// Shortest accepted phone number, counted in characters after trimming
pub const MIN_PHONE_LENGTH: usize = 7;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN).unwrap());

/// Checks the phone grammar only
pub fn matches_phone_grammar(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Validates a phone number: grammar match and minimum length
pub fn is_valid_phone(phone: &str) -> bool {
    matches_phone_grammar(phone) && phone.chars().count() >= MIN_PHONE_LENGTH
}
