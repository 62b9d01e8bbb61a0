// File: src/messages.rs
// Purpose: Display strings and error messages used by the form

use login_form_validation::PasswordIssue;
use serde::{Deserialize, Serialize};

/// Placeholder replaced with the configured minimum in `password_too_short`
pub const MIN_PLACEHOLDER: &str = "{min}";

/// String table for the form
///
/// Every entry has an English default and can be overridden from the
/// `[messages]` table of the options file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub title: String,
    pub subtitle: String,
    pub login_button: String,

    pub email_label: String,
    pub phone_label: String,
    pub password_label: String,
    pub remember_me_label: String,
    pub forgot_password_label: String,

    /// Set on the contact fields when no usable contact was entered
    pub contact_required: String,
    pub email_invalid: String,
    pub phone_invalid: String,
    pub password_required: String,
    /// May contain `{min}`
    pub password_too_short: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            title: "Welcome back".to_string(),
            subtitle: "Sign in to continue".to_string(),
            login_button: "Login".to_string(),
            email_label: "Email".to_string(),
            phone_label: "Phone number".to_string(),
            password_label: "Password".to_string(),
            remember_me_label: "Remember me".to_string(),
            forgot_password_label: "Forgot password?".to_string(),
            contact_required: "Please enter your email or phone number".to_string(),
            email_invalid: "Please enter a valid email address".to_string(),
            phone_invalid: "Please enter a valid phone number".to_string(),
            password_required: "Please enter your password".to_string(),
            password_too_short: "Password must be at least {min} characters".to_string(),
        }
    }
}

impl Messages {
    /// Too-short message with the minimum filled in
    pub fn too_short(&self, min: usize) -> String {
        self.password_too_short
            .replace(MIN_PLACEHOLDER, &min.to_string())
    }

    /// Message for a rejected password
    pub fn password_issue(&self, issue: PasswordIssue) -> String {
        match issue {
            PasswordIssue::Missing => self.password_required.clone(),
            PasswordIssue::TooShort { min } => self.too_short(min),
        }
    }
}
