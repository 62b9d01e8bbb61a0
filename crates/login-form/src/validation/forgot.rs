// File: src/validation/forgot.rs
// Purpose: Resolve the contact channel for a forgot-password request

use login_form_validation::{is_valid_email, is_valid_phone};

use super::{FieldErrors, FieldId, ForgotPasswordOutcome};
use crate::config::FormConfig;
use crate::result::{ContactType, ForgotPasswordResult};
use crate::state::FormState;

/// Pick exactly one usable contact for a password reset
///
/// Email wins over phone when both are filled. Only the first filled active
/// channel is judged; the other is never looked at. The password and
/// remember-me are not part of this pass, and the returned errors only ever
/// concern email and phone.
pub fn resolve_forgot_password(state: &FormState, config: &FormConfig) -> ForgotPasswordOutcome {
    let messages = config.messages();
    let email_active = config.email_enabled();
    let phone_active = config.phone_enabled();

    let email = state.trimmed_email();
    let phone = state.trimmed_phone();

    let mut errors = FieldErrors::new();

    if email_active && !email.is_empty() {
        if is_valid_email(email) {
            return resolved(email, ContactType::Email);
        }
        errors.set(FieldId::Email, messages.email_invalid.as_str());
    } else if phone_active && !phone.is_empty() {
        if is_valid_phone(phone) {
            return resolved(phone, ContactType::Phone);
        }
        errors.set(FieldId::Phone, messages.phone_invalid.as_str());
    } else if !email_active && !phone_active {
        tracing::warn!("forgot-password requested but no contact channel is enabled");
    } else {
        // Nothing entered
        if email_active {
            errors.set(FieldId::Email, messages.contact_required.as_str());
        }
        if phone_active {
            errors.set(FieldId::Phone, messages.contact_required.as_str());
        }
    }

    tracing::debug!(errors = errors.len(), "forgot-password pass rejected");

    ForgotPasswordOutcome::Invalid(errors)
}

fn resolved(value: &str, contact_type: ContactType) -> ForgotPasswordOutcome {
    tracing::debug!(?contact_type, "forgot-password contact resolved");
    ForgotPasswordOutcome::Resolved(ForgotPasswordResult {
        contact_value: value.to_string(),
        contact_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormOptions;

    fn state(email: &str, phone: &str) -> FormState {
        FormState {
            email: email.to_string(),
            phone: phone.to_string(),
            ..FormState::default()
        }
    }

    #[test]
    fn test_invalid_email_does_not_fall_back_to_phone() {
        let config = FormConfig::default();
        let outcome = resolve_forgot_password(&state("nope", "5551234567"), &config);
        match outcome {
            ForgotPasswordOutcome::Invalid(errors) => {
                assert_eq!(errors.get(FieldId::Email), Some(config.messages().email_invalid.as_str()));
                assert_eq!(errors.get(FieldId::Phone), None);
            }
            other => panic!("expected invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_phone_used_when_email_disabled() {
        let config = FormOptions {
            enable_email: false,
            ..FormOptions::default()
        }
        .resolve();
        let outcome = resolve_forgot_password(&state("user@example.com", " 5551234567 "), &config);
        assert_eq!(
            outcome,
            ForgotPasswordOutcome::Resolved(ForgotPasswordResult {
                contact_value: "5551234567".to_string(),
                contact_type: ContactType::Phone,
            })
        );
    }

    #[test]
    fn test_short_phone_rejected() {
        let config = FormConfig::default();
        let outcome = resolve_forgot_password(&state("", "12345"), &config);
        match outcome {
            ForgotPasswordOutcome::Invalid(errors) => {
                assert_eq!(errors.get(FieldId::Phone), Some(config.messages().phone_invalid.as_str()));
                assert_eq!(errors.get(FieldId::Email), None);
            }
            other => panic!("expected invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_nothing_entered_marks_only_active_fields() {
        let config = FormOptions {
            enable_phone: false,
            ..FormOptions::default()
        }
        .resolve();
        let outcome = resolve_forgot_password(&state("", "5551234567"), &config);
        match outcome {
            ForgotPasswordOutcome::Invalid(errors) => {
                assert_eq!(errors.get(FieldId::Email), Some(config.messages().contact_required.as_str()));
                assert!(!errors.contains(FieldId::Phone));
            }
            other => panic!("expected invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_no_channels_yields_empty_invalid() {
        let config = FormOptions {
            enable_email: false,
            enable_phone: false,
            ..FormOptions::default()
        }
        .resolve();
        let outcome = resolve_forgot_password(&state("user@example.com", ""), &config);
        assert_eq!(outcome, ForgotPasswordOutcome::Invalid(FieldErrors::new()));
    }
}
