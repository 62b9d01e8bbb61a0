// File: src/result.rs
// Purpose: Typed results handed back to the caller when the form closes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::state::FormState;

/// Payload of a successful submit
///
/// Email and phone are trimmed, the password is exactly as typed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub email: String,
    pub phone: String,
    pub password: String,
    pub remember_me: bool,
}

impl SubmitResult {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            email: state.trimmed_email().to_string(),
            phone: state.trimmed_phone().to_string(),
            password: state.password.clone(),
            remember_me: state.remember_me,
        }
    }
}

// Keep the password out of logs
impl fmt::Debug for SubmitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitResult")
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// Which channel a forgot-password request goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Email,
    Phone,
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactType::Email => f.write_str("email"),
            ContactType::Phone => f.write_str("phone"),
        }
    }
}

/// Payload of a successful forgot-password request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordResult {
    pub contact_value: String,
    pub contact_type: ContactType,
}

/// How a form session ended
///
/// Serialized with an `outcome` tag so a caller can tell the three apart
/// without looking at the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoginResult {
    #[serde(rename = "success")]
    Submitted(SubmitResult),
    ForgotPassword(ForgotPasswordResult),
    Cancelled,
}

impl LoginResult {
    /// The outcome tag as serialized
    pub fn tag(&self) -> &'static str {
        match self {
            LoginResult::Submitted(_) => "success",
            LoginResult::ForgotPassword(_) => "forgot_password",
            LoginResult::Cancelled => "cancelled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submit_result_trims_contacts_only() {
        let state = FormState {
            email: "  user@example.com ".to_string(),
            phone: " 5551234567".to_string(),
            password: " secret ".to_string(),
            remember_me: true,
            ..FormState::default()
        };
        let result = SubmitResult::from_state(&state);
        assert_eq!(result.email, "user@example.com");
        assert_eq!(result.phone, "5551234567");
        assert_eq!(result.password, " secret ");
        assert!(result.remember_me);
    }

    #[test]
    fn test_debug_redacts_password() {
        let result = SubmitResult {
            email: "user@example.com".to_string(),
            phone: String::new(),
            password: "hunter22".to_string(),
            remember_me: false,
        };
        let printed = format!("{:?}", result);
        assert!(!printed.contains("hunter22"));
        assert!(printed.contains("user@example.com"));
    }

    #[test]
    fn test_form_state_debug_redacts_password() {
        let state = FormState {
            email: "user@example.com".to_string(),
            password: "hunter22".to_string(),
            ..FormState::default()
        };
        let printed = format!("{:?}", state);
        assert!(!printed.contains("hunter22"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("user@example.com"));
    }

    #[test]
    fn test_outcome_tags() {
        let forgot = LoginResult::ForgotPassword(ForgotPasswordResult {
            contact_value: "5551234567".to_string(),
            contact_type: ContactType::Phone,
        });
        assert_eq!(
            serde_json::to_value(&forgot).unwrap(),
            json!({
                "outcome": "forgot_password",
                "contact_value": "5551234567",
                "contact_type": "phone",
            })
        );
        assert_eq!(forgot.tag(), "forgot_password");

        assert_eq!(
            serde_json::to_value(LoginResult::Cancelled).unwrap(),
            json!({ "outcome": "cancelled" })
        );
    }

    #[test]
    fn test_submitted_tag_is_success() {
        let submitted = LoginResult::Submitted(SubmitResult {
            email: "user@example.com".to_string(),
            phone: String::new(),
            password: "abcdef".to_string(),
            remember_me: true,
        });
        let value = serde_json::to_value(&submitted).unwrap();
        assert_eq!(value["outcome"], "success");
        assert_eq!(value["remember_me"], true);

        let back: LoginResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, submitted);
    }
}
