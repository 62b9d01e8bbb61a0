// File: src/state.rs
// Purpose: Current field values of an open form

use std::fmt;

use crate::validation::FieldErrors;

/// What the user has entered so far
///
/// Values are stored exactly as typed. Email and phone are trimmed when they
/// are judged; the password never is.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub phone: String,
    pub password: String,
    pub remember_me: bool,
    /// Errors from the most recent validation pass
    pub field_errors: FieldErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trimmed_email(&self) -> &str {
        self.email.trim()
    }

    pub fn trimmed_phone(&self) -> &str {
        self.phone.trim()
    }
}

// Keep the password out of logs
impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .field("field_errors", &self.field_errors)
            .finish()
    }
}
