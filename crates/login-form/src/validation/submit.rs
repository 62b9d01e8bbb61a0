// File: src/validation/submit.rs
// Purpose: Validation pass run when the form is submitted

use login_form_validation::{is_valid_email, is_valid_phone, validate_password};

use super::{FieldErrors, FieldId, ValidationOutcome};
use crate::config::FormConfig;
use crate::state::FormState;

/// Judge every field for a submit
///
/// All checks run so that every field can report at once. Later checks
/// overwrite earlier messages on the same field, so a malformed email shows
/// the format error rather than the contact-required one.
pub fn validate_for_submit(state: &FormState, config: &FormConfig) -> ValidationOutcome {
    let messages = config.messages();
    let email_active = config.email_enabled();
    let phone_active = config.phone_enabled();

    let email = state.trimmed_email();
    let phone = state.trimmed_phone();

    let mut errors = FieldErrors::new();

    // At least one contact must be entered among the active ones
    match (email_active, phone_active) {
        (true, true) => {
            if email.is_empty() && phone.is_empty() {
                errors.set(FieldId::Email, messages.contact_required.as_str());
                errors.set(FieldId::Phone, messages.contact_required.as_str());
            }
        }
        (true, false) => {
            if email.is_empty() {
                errors.set(FieldId::Email, messages.contact_required.as_str());
            }
        }
        (false, true) => {
            if phone.is_empty() {
                errors.set(FieldId::Phone, messages.contact_required.as_str());
            }
        }
        (false, false) => {}
    }

    if email_active && !email.is_empty() && !is_valid_email(email) {
        errors.set(FieldId::Email, messages.email_invalid.as_str());
    }

    if phone_active && !phone.is_empty() && !is_valid_phone(phone) {
        errors.set(FieldId::Phone, messages.phone_invalid.as_str());
    }

    if let Err(issue) = validate_password(&state.password, config.min_password_length()) {
        errors.set(FieldId::Password, messages.password_issue(issue));
    }

    tracing::debug!(
        email_active,
        phone_active,
        errors = errors.len(),
        "submit validation pass"
    );

    ValidationOutcome::from_errors(errors)
}
